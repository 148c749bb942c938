//! Phrase + passphrase → 64-byte seed.

use std::fmt;

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

/// PBKDF2 iteration count
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Salt prefix prepended to the passphrase
pub const SALT_PREFIX: &str = "mnemonic";

/// Seed length in bytes
pub const SEED_LEN: usize = 64;

/// A 64-byte seed, wiped on drop
#[derive(Clone, PartialEq, Eq)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Wrap raw seed bytes
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Convert to hex string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<sensitive>")
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for Seed {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Stretch `phrase` and `passphrase` into a seed.
///
/// PBKDF2-HMAC-SHA512 over the UTF-8 bytes of `phrase`, salted with
/// `"mnemonic" || passphrase`, 2048 rounds. Inputs are used as given; no
/// Unicode normalization is applied. Does not check the phrase.
#[must_use]
pub fn derive(phrase: &str, passphrase: &str) -> Seed {
    let mut salt = Zeroizing::new(String::with_capacity(SALT_PREFIX.len() + passphrase.len()));
    salt.push_str(SALT_PREFIX);
    salt.push_str(passphrase);

    let mut seed = Seed([0u8; SEED_LEN]);
    pbkdf2::<Hmac<Sha512>>(phrase.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed.0)
        .expect("HMAC-SHA512 accepts any key length");
    seed
}
