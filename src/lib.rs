#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! seed39 is a crate with helper functions for working with BIP-39 mnemonics: converting entropy
//! into a human-transcribable word sequence, validating a word sequence against one or more
//! dictionaries, and stretching a mnemonic plus optional passphrase into a 64 byte seed.
//!
//! Every function is pure. The built-in dictionaries are immutable process-wide tables, so all
//! operations can be called from any number of threads without synchronization.

pub mod codec;
pub mod dictionary;
pub mod error;
pub mod phrase;
pub mod seed;

pub use dictionary::{Dictionary, Language};
pub use error::{MnemonicError, Result};
pub use phrase::{
    create_mnemonic, generate_mnemonic, mnemonic_to_entropy, split_mnemonic, validate_mnemonic,
    validate_mnemonic_any, Mnemonic, MnemonicStrength,
};
pub use seed::{decode_mnemonic, Seed};
