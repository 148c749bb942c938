//! Legal entropy sizes and their word counts.

use serde::{Deserialize, Serialize};

use super::{MnemonicError, MnemonicResult, BITS_PER_WORD};

/// Entropy size of a mnemonic.
///
/// Each size maps to exactly one word count:
/// 128 → 12, 160 → 15, 192 → 18, 224 → 21, 256 → 24.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum EntropySize {
    /// 128 bits, 12 words
    #[default]
    Bits128,
    /// 160 bits, 15 words
    Bits160,
    /// 192 bits, 18 words
    Bits192,
    /// 224 bits, 21 words
    Bits224,
    /// 256 bits, 24 words
    Bits256,
}

impl EntropySize {
    /// All sizes, smallest first
    pub const ALL: [Self; 5] = [
        Self::Bits128,
        Self::Bits160,
        Self::Bits192,
        Self::Bits224,
        Self::Bits256,
    ];

    /// Parse a size given in bits.
    ///
    /// # Errors
    /// Returns `InvalidParameter` unless `bits` is a multiple of 32 in [128, 256]
    pub fn from_bits(bits: u32) -> MnemonicResult<Self> {
        match bits {
            128 => Ok(Self::Bits128),
            160 => Ok(Self::Bits160),
            192 => Ok(Self::Bits192),
            224 => Ok(Self::Bits224),
            256 => Ok(Self::Bits256),
            other => Err(MnemonicError::InvalidParameter(other)),
        }
    }

    /// Size matching an entropy buffer of `len` bytes
    #[must_use]
    pub fn from_byte_len(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.byte_len() == len)
    }

    /// Size matching a phrase of `count` words
    #[must_use]
    pub fn from_word_count(count: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.word_count() == count)
    }

    /// Entropy length in bits
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits128 => 128,
            Self::Bits160 => 160,
            Self::Bits192 => 192,
            Self::Bits224 => 224,
            Self::Bits256 => 256,
        }
    }

    /// Entropy length in bytes
    #[must_use]
    pub const fn byte_len(self) -> usize {
        self.bits() as usize / 8
    }

    /// Checksum length in bits
    #[must_use]
    pub const fn checksum_bits(self) -> usize {
        self.bits() as usize / 32
    }

    /// Number of words in the phrase
    #[must_use]
    pub const fn word_count(self) -> usize {
        (self.bits() as usize + self.checksum_bits()) / BITS_PER_WORD
    }
}

impl TryFrom<u32> for EntropySize {
    type Error = MnemonicError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl From<EntropySize> for u32 {
    fn from(size: EntropySize) -> Self {
        size.bits()
    }
}

impl std::fmt::Display for EntropySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bits", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_counts() {
        let counts: Vec<_> = EntropySize::ALL.iter().map(|s| s.word_count()).collect();
        assert_eq!(counts, vec![12, 15, 18, 21, 24]);
    }

    #[test]
    fn test_checksum_lengths() {
        let lens: Vec<_> = EntropySize::ALL.iter().map(|s| s.checksum_bits()).collect();
        assert_eq!(lens, vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_total_bits_multiple_of_eleven() {
        for size in EntropySize::ALL {
            let total = size.bits() as usize + size.checksum_bits();
            assert_eq!(total % BITS_PER_WORD, 0);
        }
    }

    #[test]
    fn test_rejects_bad_sizes() {
        for bits in [0, 96, 127, 129, 144, 288, 512] {
            assert!(matches!(
                EntropySize::from_bits(bits),
                Err(MnemonicError::InvalidParameter(b)) if b == bits
            ));
        }
    }

    #[test]
    fn test_lookup_by_words_and_bytes() {
        assert_eq!(EntropySize::from_word_count(18), Some(EntropySize::Bits192));
        assert_eq!(EntropySize::from_word_count(13), None);
        assert_eq!(EntropySize::from_byte_len(32), Some(EntropySize::Bits256));
        assert_eq!(EntropySize::from_byte_len(17), None);
    }

    #[test]
    fn test_default_is_128() {
        assert_eq!(EntropySize::default().bits(), 128);
    }

    #[test]
    fn test_serde_as_bits() {
        let json = serde_json::to_string(&EntropySize::Bits224).unwrap();
        assert_eq!(json, "224");
        let parsed: EntropySize = serde_json::from_str("160").unwrap();
        assert_eq!(parsed, EntropySize::Bits160);
        assert!(serde_json::from_str::<EntropySize>("100").is_err());
    }
}
