//! # Seedphrase
//!
//! Deterministic mnemonic seed phrases.
//!
//! ## Pipeline
//!
//! - **Encoder**: entropy → checksummed bit string → phrase
//! - **Validator**: phrase → word count, dictionary and checksum verdict
//! - **Seed Deriver**: (phrase, passphrase) → 64-byte seed
//!
//! ## Security Model
//!
//! - Entropy and intermediate bit buffers are zeroized on drop
//! - Seeds never print their bytes through `Debug`
//! - Nothing secret is ever logged
//!
//! ```no_run
//! let phrase = seedphrase::generate_mnemonic(256).unwrap();
//! assert!(seedphrase::validate_mnemonic(&phrase));
//! let seed = seedphrase::mnemonic_to_seed(&phrase, "").unwrap();
//! assert_eq!(seed.as_bytes().len(), 64);
//! ```

#![forbid(unsafe_code)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rust_2018_idioms
)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod mnemonic;

pub use config::{ConfigError, MnemonicConfig, WordlistSource};
pub use mnemonic::{
    EntropySize, EntropySource, InvalidReason, MnemonicCodec, MnemonicError, MnemonicResult,
    OsEntropy, Seed, Wordlist,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate a phrase from `entropy_bits` of OS randomness using the
/// embedded English wordlist.
///
/// # Errors
/// Returns `InvalidParameter` unless `entropy_bits` is 128, 160, 192, 224
/// or 256, and `RandomnessUnavailable` if the OS source fails
pub fn generate_mnemonic(entropy_bits: u32) -> MnemonicResult<String> {
    MnemonicCodec::english().generate_bits(entropy_bits)
}

/// Whether `phrase` is a valid mnemonic over the embedded English wordlist.
#[must_use]
pub fn validate_mnemonic(phrase: &str) -> bool {
    MnemonicCodec::english().validate(phrase)
}

/// Derive the 64-byte seed of `phrase` with an optional `passphrase`.
///
/// # Errors
/// Returns `InvalidMnemonic` if `phrase` is not valid
pub fn mnemonic_to_seed(phrase: &str, passphrase: &str) -> MnemonicResult<Seed> {
    MnemonicCodec::english().to_seed(phrase, passphrase)
}
