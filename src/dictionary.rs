#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! dictionary provides the 2048 word tables that map word indices to words and back. The built-in
//! tables are the standard BIP-39 wordlists; they are loaded once per process on first use and
//! are never mutated afterwards, so they can be shared between threads freely.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use unicode_normalization::UnicodeNormalization;

use crate::error::{MnemonicError, Result};

/// DICTIONARY_SIZE is the number of words in every dictionary, one for each 11 bit index.
pub const DICTIONARY_SIZE: usize = 2048;

static DICTIONARIES: Lazy<Vec<Dictionary>> = Lazy::new(|| {
    Language::ALL
        .iter()
        .map(|&language| Dictionary::builtin(language))
        .collect()
});

/// Language identifies one of the built-in dictionaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English, the default dictionary.
    #[default]
    English,
    /// Spanish.
    Spanish,
    /// French.
    French,
    /// Italian.
    Italian,
    /// Czech.
    Czech,
    /// Japanese.
    Japanese,
    /// Korean.
    Korean,
    /// Chinese, simplified characters.
    ChineseSimplified,
    /// Chinese, traditional characters.
    ChineseTraditional,
}

impl Language {
    /// ALL lists every built-in language, in the order used by `Dictionary::all`.
    pub const ALL: [Language; 9] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Italian,
        Language::Czech,
        Language::Japanese,
        Language::Korean,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
    ];

    /// id returns the short identifier that tags this language's dictionary.
    pub fn id(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Italian => "it",
            Language::Czech => "cs",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::ChineseSimplified => "zh_Hans",
            Language::ChineseTraditional => "zh_Hant",
        }
    }

    /// dictionary returns the process-wide dictionary for this language.
    pub fn dictionary(self) -> &'static Dictionary {
        let position = Language::ALL
            .iter()
            .position(|&l| l == self)
            .unwrap_or_default();
        &DICTIONARIES[position]
    }

    fn wordlist(self) -> &'static [&'static str; DICTIONARY_SIZE] {
        let source = match self {
            Language::English => bip39::Language::English,
            Language::Spanish => bip39::Language::Spanish,
            Language::French => bip39::Language::French,
            Language::Italian => bip39::Language::Italian,
            Language::Czech => bip39::Language::Czech,
            Language::Japanese => bip39::Language::Japanese,
            Language::Korean => bip39::Language::Korean,
            Language::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Language::ChineseTraditional => bip39::Language::TraditionalChinese,
        };
        source.word_list()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Language {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Language> {
        let language = match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "en" | "english" => Language::English,
            "es" | "spanish" => Language::Spanish,
            "fr" | "french" => Language::French,
            "it" | "italian" => Language::Italian,
            "cs" | "czech" => Language::Czech,
            "ja" | "japanese" => Language::Japanese,
            "ko" | "korean" => Language::Korean,
            "zh_hans" | "chinese_simplified" => Language::ChineseSimplified,
            "zh_hant" | "chinese_traditional" => Language::ChineseTraditional,
            _ => return Err(MnemonicError::UnknownLanguage(s.to_string())),
        };
        Ok(language)
    }
}

/// Dictionary is an ordered table of exactly 2048 distinct words tagged with a language
/// identifier. Reverse lookups are keyed on the NFKD form of each word.
pub struct Dictionary {
    language: String,
    words: Vec<String>,
    lookup: HashMap<String, u16>,
}

impl Dictionary {
    /// new builds a custom dictionary. The words must number exactly 2048 and must stay distinct
    /// after NFKD normalization.
    pub fn new<S: Into<String>>(language: impl Into<String>, words: Vec<S>) -> Result<Dictionary> {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != DICTIONARY_SIZE {
            return Err(MnemonicError::InvalidDictionary(format!(
                "expecting {} words but got {}",
                DICTIONARY_SIZE,
                words.len()
            )));
        }
        let dictionary = Dictionary::from_words(language.into(), words);
        if dictionary.lookup.len() != DICTIONARY_SIZE {
            return Err(MnemonicError::InvalidDictionary(
                "dictionary contains duplicate words".to_string(),
            ));
        }
        Ok(dictionary)
    }

    fn builtin(language: Language) -> Dictionary {
        let words = language.wordlist().iter().map(|w| w.to_string()).collect();
        Dictionary::from_words(language.id().to_string(), words)
    }

    fn from_words(language: String, words: Vec<String>) -> Dictionary {
        let lookup = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.nfkd().collect::<String>(), i as u16))
            .collect();
        Dictionary {
            language,
            words,
            lookup,
        }
    }

    /// default_dictionary returns the English dictionary.
    pub fn default_dictionary() -> &'static Dictionary {
        Language::default().dictionary()
    }

    /// all returns every built-in dictionary, the candidate set for multi-language validation.
    pub fn all() -> &'static [Dictionary] {
        &DICTIONARIES
    }

    /// language returns the language identifier of the dictionary.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// word returns the word at `index`, or None if the index does not fit in 11 bits.
    pub fn word(&self, index: u16) -> Option<&str> {
        self.words.get(usize::from(index)).map(String::as_str)
    }

    /// index_of returns the index of `word`. The word is NFKD normalized before the lookup.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        if let Some(&index) = self.lookup.get(word) {
            return Some(index);
        }
        self.lookup.get(&word.nfkd().collect::<String>()).copied()
    }

    /// contains returns true if `word` is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.index_of(word).is_some()
    }

    /// words iterates over the dictionary in index order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("language", &self.language)
            .field("words", &self.words.len())
            .finish()
    }
}
