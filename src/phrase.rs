#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! phrase implements functions for moving between entropy and a mnemonic, and for checking that
//! a mnemonic is well formed against one dictionary or a set of candidate dictionaries.
//!
//! <https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki>

use subtle::ConstantTimeEq;
use tracing::{debug, trace};
use unicode_normalization::UnicodeNormalization;
use userspace_rng::random256;
use zeroize::Zeroize;

use crate::codec::{self, Checksum};
use crate::dictionary::Dictionary;
use crate::error::{MnemonicError, Result};

/// Mnemonic is an ordered sequence of dictionary words.
pub type Mnemonic = Vec<String>;

/// MNEMONIC_WORD_MULTIPLE is the number that every valid word count is divisible by.
pub const MNEMONIC_WORD_MULTIPLE: usize = 3;

/// MnemonicStrength enumerates the standard mnemonic sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MnemonicStrength {
    /// 12 words, 128 bits of entropy.
    Words12,
    /// 15 words, 160 bits of entropy.
    Words15,
    /// 18 words, 192 bits of entropy.
    Words18,
    /// 21 words, 224 bits of entropy.
    Words21,
    /// 24 words, 256 bits of entropy.
    #[default]
    Words24,
}

impl MnemonicStrength {
    /// ALL lists every standard strength from weakest to strongest.
    pub const ALL: [MnemonicStrength; 5] = [
        MnemonicStrength::Words12,
        MnemonicStrength::Words15,
        MnemonicStrength::Words18,
        MnemonicStrength::Words21,
        MnemonicStrength::Words24,
    ];

    /// entropy_bytes returns the number of entropy bytes encoded at this strength.
    pub fn entropy_bytes(self) -> usize {
        match self {
            MnemonicStrength::Words12 => 16,
            MnemonicStrength::Words15 => 20,
            MnemonicStrength::Words18 => 24,
            MnemonicStrength::Words21 => 28,
            MnemonicStrength::Words24 => 32,
        }
    }

    /// word_count returns the number of words in a mnemonic of this strength.
    pub fn word_count(self) -> usize {
        let bits = self.entropy_bytes() * 8;
        (bits + bits / 32) / codec::BITS_PER_WORD
    }

    /// from_word_count returns the strength with the given number of words, if there is one.
    pub fn from_word_count(words: usize) -> Option<MnemonicStrength> {
        MnemonicStrength::ALL
            .into_iter()
            .find(|s| s.word_count() == words)
    }
}

/// create_mnemonic will convert entropy into a mnemonic using the provided dictionary. The
/// entropy must be a positive multiple of 4 bytes.
pub fn create_mnemonic(entropy: &[u8], dictionary: &Dictionary) -> Result<Mnemonic> {
    let indices = codec::encode(entropy)?;
    let mnemonic = indices
        .iter()
        .map(|&index| {
            dictionary
                .word(index)
                .map(str::to_string)
                .ok_or(MnemonicError::IndexOutOfRange(index))
        })
        .collect::<Result<Mnemonic>>()?;
    debug!(
        words = mnemonic.len(),
        language = dictionary.language(),
        "created mnemonic"
    );
    Ok(mnemonic)
}

/// generate_mnemonic will create a mnemonic from fresh entropy drawn from the userspace csprng.
pub fn generate_mnemonic(strength: MnemonicStrength, dictionary: &Dictionary) -> Result<Mnemonic> {
    let mut entropy = random256();
    let mnemonic = create_mnemonic(&entropy[..strength.entropy_bytes()], dictionary);
    entropy.zeroize();
    mnemonic
}

/// mnemonic_to_entropy will recover the entropy encoded by a mnemonic, returning an error that
/// describes the first problem found if the mnemonic is not valid under the dictionary.
pub fn mnemonic_to_entropy<S: AsRef<str>>(
    mnemonic: &[S],
    dictionary: &Dictionary,
) -> Result<Vec<u8>> {
    if MnemonicStrength::from_word_count(mnemonic.len()).is_none() {
        return Err(MnemonicError::InvalidWordCount(mnemonic.len()));
    }

    let indices = mnemonic
        .iter()
        .map(|word| {
            let word = word.as_ref();
            dictionary
                .index_of(word)
                .ok_or_else(|| MnemonicError::UnknownWord(word.to_string()))
        })
        .collect::<Result<Vec<u16>>>()?;

    let (mut entropy, checksum) = codec::decode(&indices)?;
    if !bool::from(Checksum::of(&entropy).ct_eq(&checksum)) {
        entropy.zeroize();
        return Err(MnemonicError::ChecksumMismatch);
    }
    Ok(entropy)
}

/// validate_mnemonic returns true if every word is spelled correctly in the dictionary, the word
/// count is standard, and the checksum matches.
pub fn validate_mnemonic<S: AsRef<str>>(mnemonic: &[S], dictionary: &Dictionary) -> bool {
    match mnemonic_to_entropy(mnemonic, dictionary) {
        Ok(mut entropy) => {
            entropy.zeroize();
            true
        }
        Err(err) => {
            // Never log the offending word itself.
            let reason = match err {
                MnemonicError::InvalidWordCount(_) => "word count",
                MnemonicError::UnknownWord(_) => "unknown word",
                MnemonicError::ChecksumMismatch => "checksum",
                _ => "encoding",
            };
            trace!(
                words = mnemonic.len(),
                language = dictionary.language(),
                reason,
                "mnemonic rejected"
            );
            false
        }
    }
}

/// validate_mnemonic_any returns true if the mnemonic is valid in at least one of the provided
/// dictionaries. It stops at the first dictionary that accepts the mnemonic.
pub fn validate_mnemonic_any<'a, S, I>(mnemonic: &[S], dictionaries: I) -> bool
where
    S: AsRef<str>,
    I: IntoIterator<Item = &'a Dictionary>,
{
    dictionaries
        .into_iter()
        .any(|dictionary| validate_mnemonic(mnemonic, dictionary))
}

/// split_mnemonic will break a sentence into its words. The sentence is NFKD normalized first, so
/// any unicode whitespace (including the ideographic space used by Japanese) separates words.
pub fn split_mnemonic(sentence: &str) -> Mnemonic {
    let normalized: String = sentence.nfkd().collect();
    normalized.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Language;

    // verify_conversion will convert the entropy into a mnemonic and back, confirming that the
    // mnemonic validates and the entropy survives unchanged.
    fn verify_conversion(entropy: &[u8], dictionary: &Dictionary) {
        let mnemonic = match create_mnemonic(entropy, dictionary) {
            Ok(m) => m,
            Err(e) => panic!("create_mnemonic failed: {}\n\t{:?}", e, entropy),
        };
        if !validate_mnemonic(&mnemonic, dictionary) {
            panic!("mnemonic did not validate: {:?}", mnemonic);
        }
        let entropy_conf = mnemonic_to_entropy(&mnemonic, dictionary).unwrap();
        if entropy != entropy_conf.as_slice() {
            panic!(
                "entropy conversion failed: \n\t{:?}\n\t{:?}\n\t{}",
                entropy,
                entropy_conf,
                mnemonic.join(" ")
            );
        }
    }

    #[test]
    fn check_strengths() {
        let counts: Vec<usize> = MnemonicStrength::ALL.iter().map(|s| s.word_count()).collect();
        assert_eq!(counts, vec![12, 15, 18, 21, 24]);
        for strength in MnemonicStrength::ALL {
            assert_eq!(strength.word_count() % MNEMONIC_WORD_MULTIPLE, 0);
            assert_eq!(
                MnemonicStrength::from_word_count(strength.word_count()),
                Some(strength)
            );
        }
        assert_eq!(MnemonicStrength::from_word_count(13), None);
        assert_eq!(MnemonicStrength::from_word_count(0), None);
    }

    #[test]
    // perform some basic conversions between entropy and mnemonics in several languages.
    fn check_conversions() {
        let mut entropy = [0u8; 32];
        for strength in MnemonicStrength::ALL {
            verify_conversion(&entropy[..strength.entropy_bytes()], Dictionary::default_dictionary());
        }
        entropy[0] = 185;
        entropy[1] = 46;
        entropy[7] = 7;
        entropy[19] = 254;
        entropy[31] = 2;
        for language in Language::ALL {
            for strength in MnemonicStrength::ALL {
                verify_conversion(&entropy[..strength.entropy_bytes()], language.dictionary());
            }
        }

        // Try with 200 random mnemonics.
        for _ in 0..200 {
            let entropy = random256();
            verify_conversion(&entropy[..16], Dictionary::default_dictionary());
            verify_conversion(&entropy, Dictionary::default_dictionary());
        }
    }

    #[test]
    fn check_known_mnemonic() {
        let mnemonic = create_mnemonic(&[0u8; 16], Dictionary::default_dictionary()).unwrap();
        let mut expected = vec!["abandon"; 11];
        expected.push("about");
        assert_eq!(mnemonic, expected);
    }

    #[test]
    fn check_invalid_entropy() {
        match create_mnemonic(&[0u8; 15], Dictionary::default_dictionary()) {
            Err(MnemonicError::InvalidLength { bytes: 15 }) => {}
            other => panic!("15 bytes of entropy should be rejected, got {:?}", other),
        }
    }

    #[test]
    // Verify that each of these bad mnemonics is rejected.
    fn check_unhappy_mnemonics() {
        let dictionary = Dictionary::default_dictionary();
        let good = generate_mnemonic(MnemonicStrength::Words12, dictionary).unwrap();
        assert!(validate_mnemonic(&good, dictionary));

        // Explore a malformed word.
        let mut words = good.clone();
        words[0] = "ab".to_string();
        assert!(!validate_mnemonic(&words, dictionary));
        assert_eq!(
            mnemonic_to_entropy(&words, dictionary).unwrap_err(),
            MnemonicError::UnknownWord("ab".to_string())
        );

        // Explore adding an extra word.
        let mut words = good.clone();
        words.push("abandon".to_string());
        assert!(!validate_mnemonic(&words, dictionary));
        assert_eq!(
            mnemonic_to_entropy(&words, dictionary).unwrap_err(),
            MnemonicError::InvalidWordCount(13)
        );

        // Explore removing a word.
        assert!(!validate_mnemonic(&good[..11], dictionary));

        // Explore the empty mnemonic.
        let empty: [&str; 0] = [];
        assert!(!validate_mnemonic(&empty, dictionary));

        // Explore a bad checksum by changing the final word, which carries the checksum bits.
        let mut words = good.clone();
        let last = dictionary.index_of(&words[11]).unwrap();
        words[11] = dictionary.word(last ^ 1).unwrap().to_string();
        assert!(!validate_mnemonic(&words, dictionary));
        assert_eq!(
            mnemonic_to_entropy(&words, dictionary).unwrap_err(),
            MnemonicError::ChecksumMismatch
        );

        // Explore a mnemonic from a different dictionary.
        assert!(!validate_mnemonic(&good, Language::Spanish.dictionary()));
    }

    #[test]
    // A 13 word mnemonic is refused even when it is otherwise made of valid words.
    fn check_thirteen_words() {
        let mut words = vec!["abandon"; 12];
        words.push("about");
        assert!(!validate_mnemonic(&words, Dictionary::default_dictionary()));
        assert!(!validate_mnemonic_any(&words, Dictionary::all()));
    }

    #[test]
    fn check_validate_any() {
        let english = create_mnemonic(&[7u8; 20], Language::English.dictionary()).unwrap();
        let french = create_mnemonic(&[7u8; 20], Language::French.dictionary()).unwrap();
        let candidates = [Language::English.dictionary(), Language::French.dictionary()];

        assert!(validate_mnemonic_any(&english, candidates));
        assert!(validate_mnemonic_any(&french, candidates));
        assert!(validate_mnemonic_any(&french, Dictionary::all()));
        assert!(!validate_mnemonic_any(&french, [Language::Italian.dictionary()]));
        assert!(!validate_mnemonic_any(&english, std::iter::empty()));
    }

    #[test]
    fn check_split_mnemonic() {
        let words = split_mnemonic("  legal winner\tthank\nyear ");
        assert_eq!(words, vec!["legal", "winner", "thank", "year"]);

        let japanese = split_mnemonic("あいこくしん\u{3000}あいさつ");
        assert_eq!(japanese.len(), 2);
        assert!(split_mnemonic("").is_empty());
    }
}
