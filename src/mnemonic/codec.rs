//! Injected facade over the encoder, validator and seed deriver.

use std::fmt;
use std::sync::Arc;

use tracing::debug;
use zeroize::Zeroizing;

use super::{
    encoder, seed, validator, EntropySize, EntropySource, MnemonicResult, OsEntropy, Seed,
    Wordlist,
};

/// Bundles a wordlist with an entropy source.
///
/// Cheap to clone and safe to share across threads; nothing in it is
/// mutated after construction.
#[derive(Clone)]
pub struct MnemonicCodec {
    wordlist: Arc<Wordlist>,
    source: Arc<dyn EntropySource>,
}

impl MnemonicCodec {
    /// Codec over `wordlist` drawing randomness from `source`
    #[must_use]
    pub fn new(wordlist: Arc<Wordlist>, source: Arc<dyn EntropySource>) -> Self {
        Self { wordlist, source }
    }

    /// Embedded English wordlist with the OS random source
    #[must_use]
    pub fn english() -> Self {
        Self::new(Wordlist::english(), Arc::new(OsEntropy))
    }

    /// The wordlist in use
    #[must_use]
    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// Generate a phrase from fresh entropy of `size`.
    ///
    /// # Errors
    /// Returns `RandomnessUnavailable` if the entropy source fails
    pub fn generate(&self, size: EntropySize) -> MnemonicResult<String> {
        encoder::generate(size, self.source.as_ref(), &self.wordlist)
    }

    /// Generate a phrase from fresh entropy of `bits` bits.
    ///
    /// # Errors
    /// Returns `InvalidParameter` for sizes other than 128, 160, 192, 224
    /// or 256, and `RandomnessUnavailable` if the entropy source fails
    pub fn generate_bits(&self, bits: u32) -> MnemonicResult<String> {
        self.generate(EntropySize::from_bits(bits)?)
    }

    /// Encode caller-supplied entropy.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if `entropy` has an unsupported length
    pub fn encode(&self, entropy: &[u8]) -> MnemonicResult<String> {
        encoder::encode_entropy(entropy, &self.wordlist)
    }

    /// Whether `phrase` is a valid mnemonic
    #[must_use]
    pub fn validate(&self, phrase: &str) -> bool {
        validator::validate(phrase, &self.wordlist)
    }

    /// Check `phrase`, reporting the first failure.
    ///
    /// # Errors
    /// Returns `InvalidMnemonic` if the phrase is malformed
    pub fn check(&self, phrase: &str) -> MnemonicResult<()> {
        validator::check(phrase, &self.wordlist)
    }

    /// Recover the entropy behind a valid `phrase`.
    ///
    /// # Errors
    /// Returns `InvalidMnemonic` if the phrase is malformed
    pub fn to_entropy(&self, phrase: &str) -> MnemonicResult<Zeroizing<Vec<u8>>> {
        validator::to_entropy(phrase, &self.wordlist)
    }

    /// Derive the 64-byte seed of a valid `phrase`.
    ///
    /// The phrase is checked first; no stretching happens for an invalid one.
    ///
    /// # Errors
    /// Returns `InvalidMnemonic` if the phrase is malformed
    pub fn to_seed(&self, phrase: &str, passphrase: &str) -> MnemonicResult<Seed> {
        self.check(phrase)?;
        debug!(with_passphrase = !passphrase.is_empty(), "Deriving seed");
        Ok(seed::derive(phrase, passphrase))
    }
}

impl Default for MnemonicCodec {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for MnemonicCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MnemonicCodec")
            .field("wordlist", &self.wordlist)
            .finish_non_exhaustive()
    }
}
