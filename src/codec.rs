#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(unused_mut)]

//! codec packs entropy plus a SHA-256 checksum into 11 bit word indices, and unpacks indices back
//! into entropy and checksum. One checksum bit is appended for every 32 bits of entropy, which
//! makes the packed length a multiple of 33 bits and therefore always a whole number of words.

use sha2::{Digest, Sha256};
use subtle::{Choice, ConstantTimeEq};

use crate::error::{MnemonicError, Result};

/// BITS_PER_WORD is the number of bits encoded by each word index.
pub const BITS_PER_WORD: usize = 11;

/// ENTROPY_MULTIPLE is the number of bytes that entropy length must be a multiple of.
pub const ENTROPY_MULTIPLE: usize = 4;

/// MAX_ENTROPY_BYTES is the longest entropy whose checksum still fits in a SHA-256 digest.
pub const MAX_ENTROPY_BYTES: usize = 1024;

/// Checksum holds the leading `len()` bits of the SHA-256 hash of some entropy, packed big endian
/// and zero padded on the right to a whole number of bytes.
#[derive(Debug, Clone)]
pub struct Checksum {
    bits: usize,
    bytes: Vec<u8>,
}

impl Checksum {
    /// of computes the checksum for the provided entropy, one bit per 32 bits of entropy. The
    /// checksum never grows past the 256 bits of a single digest.
    pub fn of(entropy: &[u8]) -> Checksum {
        let bits = (entropy.len() * 8 / 32).min(256);
        let hash = Sha256::digest(entropy);
        let mut bytes = hash[..(bits + 7) / 8].to_vec();
        if bits % 8 != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= 0xff << (8 - bits % 8);
            }
        }
        Checksum { bits, bytes }
    }

    /// len returns the number of checksum bits.
    pub fn len(&self) -> usize {
        self.bits
    }

    /// is_empty returns true if the checksum carries no bits.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// as_bytes returns the packed checksum bits.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl ConstantTimeEq for Checksum {
    fn ct_eq(&self, other: &Self) -> Choice {
        // The lengths are public, only the bit contents need protecting.
        if self.bits != other.bits {
            return Choice::from(0);
        }
        self.bytes.as_slice().ct_eq(other.bytes.as_slice())
    }
}

impl PartialEq for Checksum {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Checksum {}

/// bit_is_set reports whether bit `i` of `data` is set, counting from the most significant bit of
/// the first byte.
fn bit_is_set(data: &[u8], i: usize) -> bool {
    data[i / 8] & (1 << (7 - i % 8)) != 0
}

/// encode will pack the entropy followed by its checksum into consecutive 11 bit indices, most
/// significant group first.
pub fn encode(entropy: &[u8]) -> Result<Vec<u16>> {
    if entropy.is_empty()
        || entropy.len() % ENTROPY_MULTIPLE != 0
        || entropy.len() > MAX_ENTROPY_BYTES
    {
        return Err(MnemonicError::InvalidLength {
            bytes: entropy.len(),
        });
    }
    let checksum = Checksum::of(entropy);
    let entropy_bits = entropy.len() * 8;
    let total_bits = entropy_bits + checksum.len();
    if total_bits % BITS_PER_WORD != 0 {
        return Err(MnemonicError::InvalidLength {
            bytes: entropy.len(),
        });
    }

    // Walk the combined bit stream one bit at a time, switching from the entropy to the checksum
    // once the entropy is exhausted.
    let mut indices = Vec::with_capacity(total_bits / BITS_PER_WORD);
    let mut position = 0;
    for _ in 0..total_bits / BITS_PER_WORD {
        let mut index: u16 = 0;
        for _ in 0..BITS_PER_WORD {
            let set = if position < entropy_bits {
                bit_is_set(entropy, position)
            } else {
                bit_is_set(checksum.as_bytes(), position - entropy_bits)
            };
            index = (index << 1) | set as u16;
            position += 1;
        }
        indices.push(index);
    }
    Ok(indices)
}

/// decode will unpack a sequence of 11 bit indices into the entropy and checksum they carry. The
/// split point is the only one consistent with one checksum bit per 32 entropy bits.
pub fn decode(indices: &[u16]) -> Result<(Vec<u8>, Checksum)> {
    let total_bits = indices.len() * BITS_PER_WORD;
    if total_bits == 0 || total_bits % 33 != 0 {
        return Err(MnemonicError::InvalidChecksumLength { bits: total_bits });
    }
    if let Some(&index) = indices.iter().find(|&&i| usize::from(i) >> BITS_PER_WORD != 0) {
        return Err(MnemonicError::IndexOutOfRange(index));
    }
    let entropy_bits = total_bits * 32 / 33;
    let checksum_bits = total_bits - entropy_bits;

    let mut entropy = vec![0u8; entropy_bits / 8];
    let mut checksum = vec![0u8; (checksum_bits + 7) / 8];
    let mut position = 0;
    for index in indices {
        for j in 0..BITS_PER_WORD {
            // Set the current bit if needed.
            if index & (1 << (BITS_PER_WORD - j - 1)) != 0 {
                if position < entropy_bits {
                    entropy[position / 8] |= 1 << (7 - position % 8);
                } else {
                    let offset = position - entropy_bits;
                    checksum[offset / 8] |= 1 << (7 - offset % 8);
                }
            }
            position += 1;
        }
    }

    Ok((
        entropy,
        Checksum {
            bits: checksum_bits,
            bytes: checksum,
        },
    ))
}
