//! Secure random byte sources.

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::warn;

use super::{MnemonicError, MnemonicResult};

/// Supplier of cryptographically secure random bytes.
pub trait EntropySource: Send + Sync {
    /// Fill `buf` completely with random bytes.
    ///
    /// # Errors
    /// Returns `RandomnessUnavailable` if the source cannot deliver
    fn fill_random(&self, buf: &mut [u8]) -> MnemonicResult<()>;
}

/// Operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_random(&self, buf: &mut [u8]) -> MnemonicResult<()> {
        OsRng.try_fill_bytes(buf).map_err(|e| {
            warn!(error = %e, "OS randomness unavailable");
            MnemonicError::RandomnessUnavailable(e.to_string())
        })
    }
}

/// Deterministic source that repeats a fixed byte pattern.
///
/// Only useful for tests and known-answer checks; never for real keys.
#[derive(Debug, Clone)]
pub struct FixedEntropy {
    pattern: Vec<u8>,
}

impl FixedEntropy {
    /// Source cycling through `pattern`; an empty pattern yields zeros
    #[must_use]
    pub fn new(pattern: impl Into<Vec<u8>>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// Source producing only zero bytes
    #[must_use]
    pub fn zeros() -> Self {
        Self::new(Vec::new())
    }
}

impl EntropySource for FixedEntropy {
    fn fill_random(&self, buf: &mut [u8]) -> MnemonicResult<()> {
        if self.pattern.is_empty() {
            buf.fill(0);
        } else {
            for (dst, src) in buf.iter_mut().zip(self.pattern.iter().cycle()) {
                *dst = *src;
            }
        }
        Ok(())
    }
}
