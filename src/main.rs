//! seed39 command line tool for generating, checking and stretching mnemonics.

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use seed39::{
    create_mnemonic, decode_mnemonic, generate_mnemonic, split_mnemonic, validate_mnemonic,
    Dictionary, Language, Mnemonic, MnemonicStrength,
};

#[derive(Parser)]
#[command(name = "seed39")]
#[command(about = "BIP-39 mnemonic generation, validation and seed derivation")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new random mnemonic
    New {
        /// Number of words (12, 15, 18, 21, 24)
        #[arg(short, long, default_value_t = 24)]
        words: usize,
        /// Dictionary language
        #[arg(short, long, env = "SEED39_LANGUAGE", default_value = "en")]
        language: Language,
    },
    /// Convert hex-encoded entropy into a mnemonic
    FromEntropy {
        /// Hex-encoded entropy, a multiple of 4 bytes
        entropy: String,
        /// Dictionary language
        #[arg(short, long, env = "SEED39_LANGUAGE", default_value = "en")]
        language: Language,
    },
    /// Check the words and checksum of a mnemonic
    Validate {
        /// Mnemonic words, or one quoted sentence
        #[arg(required = true)]
        words: Vec<String>,
        /// Only accept this language instead of trying every dictionary
        #[arg(short, long, env = "SEED39_LANGUAGE")]
        language: Option<Language>,
    },
    /// Derive the 64-byte seed of a mnemonic
    Seed {
        /// Mnemonic words, or one quoted sentence
        #[arg(required = true)]
        words: Vec<String>,
        /// Optional passphrase
        #[arg(short, long, env = "SEED39_PASSPHRASE", default_value = "", hide_env_values = true)]
        passphrase: String,
        /// Refuse to derive a seed unless the mnemonic validates in some dictionary
        #[arg(long)]
        require_valid: bool,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Commands::New { words, language } => cmd_new(words, language),
        Commands::FromEntropy { entropy, language } => cmd_from_entropy(&entropy, language),
        Commands::Validate { words, language } => cmd_validate(&words, language),
        Commands::Seed {
            words,
            passphrase,
            require_valid,
        } => cmd_seed(&words, &passphrase, require_valid),
    }
}

fn cmd_new(words: usize, language: Language) -> Result<ExitCode> {
    let Some(strength) = MnemonicStrength::from_word_count(words) else {
        bail!("expecting 12, 15, 18, 21 or 24 words but got {}", words);
    };
    let mnemonic = generate_mnemonic(strength, language.dictionary())?;
    println!("{}", mnemonic.join(" "));
    Ok(ExitCode::SUCCESS)
}

fn cmd_from_entropy(entropy: &str, language: Language) -> Result<ExitCode> {
    let entropy = hex::decode(entropy.trim()).context("entropy is not valid hex")?;
    let mnemonic = create_mnemonic(&entropy, language.dictionary())?;
    println!("{}", mnemonic.join(" "));
    Ok(ExitCode::SUCCESS)
}

fn cmd_validate(words: &[String], language: Option<Language>) -> Result<ExitCode> {
    let mnemonic = parse_words(words);
    let candidates: Vec<&Dictionary> = match language {
        Some(language) => vec![language.dictionary()],
        None => Dictionary::all().iter().collect(),
    };

    // Try each candidate in turn so the matching language can be reported.
    match candidates
        .into_iter()
        .find(|dictionary| validate_mnemonic(&mnemonic, dictionary))
    {
        Some(dictionary) => {
            println!("valid ({})", dictionary.language());
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("invalid");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn cmd_seed(words: &[String], passphrase: &str, require_valid: bool) -> Result<ExitCode> {
    let mnemonic = parse_words(words);
    if require_valid && !seed39::validate_mnemonic_any(&mnemonic, Dictionary::all()) {
        bail!("mnemonic is not valid in any dictionary");
    }
    let seed = decode_mnemonic(&mnemonic, passphrase)?;
    info!(words = mnemonic.len(), "seed derived");
    println!("{}", hex::encode(seed));
    Ok(ExitCode::SUCCESS)
}

/// parse_words accepts both separate arguments and a single quoted sentence.
fn parse_words(words: &[String]) -> Mnemonic {
    split_mnemonic(&words.join(" "))
}
