#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! error defines the single error type shared by every operation in the crate.

/// Result is the result type used throughout the crate.
pub type Result<T> = std::result::Result<T, MnemonicError>;

/// MnemonicError covers every way that encoding, decoding, validating or deriving can fail. All
/// of them are permanent functions of the input; retrying with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MnemonicError {
    /// The entropy is empty, is not a multiple of 4 bytes, or is too long to checksum.
    #[error("invalid entropy length: {bytes} bytes")]
    InvalidLength {
        /// Length of the rejected entropy in bytes.
        bytes: usize,
    },

    /// The packed indices cannot be split into entropy and a 1/32 checksum.
    #[error("invalid checksum length: {bits} packed bits cannot be split 32:1")]
    InvalidChecksumLength {
        /// Total number of packed bits that were supplied.
        bits: usize,
    },

    /// An index does not fit in 11 bits.
    #[error("word index {0} is out of range")]
    IndexOutOfRange(u16),

    /// The mnemonic does not have 12, 15, 18, 21 or 24 words.
    #[error("expecting 12, 15, 18, 21 or 24 words but got {0} words")]
    InvalidWordCount(usize),

    /// A word is not present in the dictionary.
    #[error("word '{0}' is not in the dictionary")]
    UnknownWord(String),

    /// The checksum bits do not match the entropy.
    #[error("mnemonic checksum is incorrect")]
    ChecksumMismatch,

    /// Seed derivation was asked to stretch an empty word sequence.
    #[error("mnemonic has no words")]
    EmptyMnemonic,

    /// A language identifier does not name a built-in dictionary.
    #[error("unknown language '{0}'")]
    UnknownLanguage(String),

    /// A dictionary is not made of exactly 2048 distinct words.
    #[error("invalid dictionary: {0}")]
    InvalidDictionary(String),
}
