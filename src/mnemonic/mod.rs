//! Mnemonic seed phrases.
//!
//! Converts secret entropy into a checksummed word sequence, validates
//! such sequences, and stretches a phrase plus passphrase into a 64-byte
//! seed. The algorithm is bit-compatible with BIP-39:
//! - SHA-256 checksum, `entropy_bits / 32` bits long
//! - 11-bit groups indexing a 2048-word list
//! - PBKDF2-HMAC-SHA512, 2048 rounds, salt `"mnemonic" || passphrase`

mod bits;
mod codec;
mod encoder;
mod entropy;
mod seed;
mod size;
mod validator;
mod wordlist;

pub use bits::BitBuffer;
pub use codec::MnemonicCodec;
pub use encoder::{encode_entropy, generate};
pub use entropy::{EntropySource, FixedEntropy, OsEntropy};
pub use seed::{derive, Seed, PBKDF2_ROUNDS, SALT_PREFIX, SEED_LEN};
pub use size::EntropySize;
pub use validator::{check, to_entropy, validate};
pub use wordlist::{Wordlist, WORDLIST_LEN};

use thiserror::Error;

/// Number of bits each word encodes
pub const BITS_PER_WORD: usize = 11;

/// Why a phrase was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Word count is not one of 12, 15, 18, 21 or 24
    WordCount(usize),
    /// Word at this zero-based position is not in the wordlist
    UnknownWord(usize),
    /// Checksum bits do not match the entropy
    Checksum,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WordCount(n) => write!(f, "unsupported word count {n}"),
            Self::UnknownWord(pos) => write!(f, "word {} is not in the wordlist", pos + 1),
            Self::Checksum => write!(f, "checksum mismatch"),
        }
    }
}

/// Mnemonic errors
#[derive(Debug, Error)]
pub enum MnemonicError {
    /// Entropy size outside the allowed set
    #[error("invalid entropy size: {0} bits (expected 128, 160, 192, 224 or 256)")]
    InvalidParameter(u32),
    /// The random byte source failed
    #[error("randomness unavailable: {0}")]
    RandomnessUnavailable(String),
    /// Dictionary resource is malformed
    #[error("invalid wordlist: {0}")]
    WordlistInvalid(String),
    /// Phrase failed structural, membership or checksum validation
    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(InvalidReason),
}

/// Result type for mnemonic operations
pub type MnemonicResult<T> = Result<T, MnemonicError>;
