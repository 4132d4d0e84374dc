#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! seed stretches a mnemonic and an optional passphrase into the 64 byte seed used for wallet
//! generation. Derivation does not check the mnemonic, callers that require a valid mnemonic
//! should call `validate_mnemonic` first.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroize;

use crate::error::{MnemonicError, Result};

/// PBKDF2_ROUNDS is the number of HMAC-SHA512 iterations used to stretch the mnemonic.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// SALT_PREFIX is prepended to the passphrase to form the PBKDF2 salt.
pub const SALT_PREFIX: &str = "mnemonic";

/// Seed is the key material derived from a mnemonic.
pub type Seed = [u8; 64];

/// decode_mnemonic will convert a mnemonic and passphrase into a wallet-generation seed. Any
/// passphrase can be used and will change the resulting seed. The words are joined with single
/// spaces, and both sentence and passphrase are NFKD normalized before stretching.
pub fn decode_mnemonic<S: AsRef<str>>(mnemonic: &[S], passphrase: &str) -> Result<Seed> {
    if mnemonic.is_empty() {
        return Err(MnemonicError::EmptyMnemonic);
    }

    let mut joined = mnemonic
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");
    let mut sentence: String = joined.nfkd().collect();
    let mut salt: String = SALT_PREFIX.chars().chain(passphrase.nfkd()).collect();

    let mut seed: Seed = [0u8; 64];
    pbkdf2_hmac::<Sha512>(sentence.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed);

    joined.zeroize();
    sentence.zeroize();
    salt.zeroize();
    debug!(words = mnemonic.len(), "derived seed from mnemonic");
    Ok(seed)
}
