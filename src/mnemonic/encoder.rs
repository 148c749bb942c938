//! Entropy → checksummed bit sequence → phrase.

use tracing::debug;
use zeroize::Zeroizing;

use super::bits::{checksum_bits, BitBuffer};
use super::{EntropySize, EntropySource, MnemonicError, MnemonicResult, Wordlist, BITS_PER_WORD};

/// Encode `entropy` as a phrase over `wordlist`.
///
/// The checksum (top `bits / 32` bits of SHA-256) is appended to the entropy
/// bits, the result is cut into 11-bit groups, and each group picks a word.
///
/// # Errors
/// Returns `InvalidParameter` if `entropy` is not 16, 20, 24, 28 or 32 bytes
pub fn encode_entropy(entropy: &[u8], wordlist: &Wordlist) -> MnemonicResult<String> {
    let size = EntropySize::from_byte_len(entropy.len()).ok_or_else(|| {
        MnemonicError::InvalidParameter(u32::try_from(entropy.len() * 8).unwrap_or(u32::MAX))
    })?;

    let mut bits = BitBuffer::from_bytes(entropy);
    bits.push_bits(checksum_bits(entropy, size.checksum_bits()), size.checksum_bits());

    let mut phrase = String::with_capacity(size.word_count() * 9);
    for (i, group) in bits.groups(BITS_PER_WORD).enumerate() {
        let word = u16::try_from(group)
            .ok()
            .and_then(|index| wordlist.word(index))
            .ok_or_else(|| MnemonicError::WordlistInvalid(format!("no word at index {group}")))?;
        if i > 0 {
            phrase.push(' ');
        }
        phrase.push_str(word);
    }

    debug!(entropy_bits = size.bits(), words = size.word_count(), "Encoded mnemonic");
    Ok(phrase)
}

/// Draw fresh entropy of `size` from `source` and encode it.
///
/// The entropy buffer is wiped before returning, on success and on error.
///
/// # Errors
/// Returns `RandomnessUnavailable` if `source` fails
pub fn generate(
    size: EntropySize,
    source: &dyn EntropySource,
    wordlist: &Wordlist,
) -> MnemonicResult<String> {
    let mut entropy = Zeroizing::new(vec![0u8; size.byte_len()]);
    source.fill_random(&mut entropy)?;
    encode_entropy(&entropy, wordlist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mnemonic::{FixedEntropy, OsEntropy};

    fn english() -> std::sync::Arc<Wordlist> {
        Wordlist::english()
    }

    #[test]
    fn test_zero_entropy_starts_with_index_zero() {
        let list = english();
        let phrase = generate(EntropySize::Bits128, &FixedEntropy::zeros(), &list).unwrap();
        let words: Vec<_> = phrase.split(' ').collect();
        assert_eq!(words.len(), 12);
        assert_eq!(list.index_of(words[0]), Some(0));
        assert_eq!(
            phrase,
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
        );
    }

    #[test]
    fn test_known_vectors() {
        let list = english();
        let cases: [(&[u8], &str); 4] = [
            (
                &[0x7f; 16],
                "legal winner thank year wave sausage worth useful legal winner thank yellow",
            ),
            (
                &[0x80; 16],
                "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
            ),
            (
                &[0xff; 16],
                "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
            ),
            (
                &[0x00; 32],
                "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
            ),
        ];
        for (entropy, expected) in cases {
            assert_eq!(encode_entropy(entropy, &list).unwrap(), expected);
        }
    }

    #[test]
    fn test_word_counts_per_size() {
        let list = english();
        for size in EntropySize::ALL {
            let phrase = generate(size, &OsEntropy, &list).unwrap();
            assert_eq!(phrase.split(' ').count(), size.word_count());
            assert!(!phrase.ends_with(' '));
        }
    }

    #[test]
    fn test_matches_reference_implementation() {
        let list = english();
        for size in EntropySize::ALL {
            let entropy: Vec<u8> = (0..size.byte_len()).map(|i| (i * 37 + 11) as u8).collect();
            let ours = encode_entropy(&entropy, &list).unwrap();
            let reference = bip39::Mnemonic::from_entropy(&entropy).unwrap().to_string();
            assert_eq!(ours, reference);
        }
    }

    #[test]
    fn test_bad_entropy_length() {
        let list = english();
        let err = encode_entropy(&[0u8; 17], &list).unwrap_err();
        assert!(matches!(err, MnemonicError::InvalidParameter(136)));
    }

    struct FailingSource;

    impl EntropySource for FailingSource {
        fn fill_random(&self, _buf: &mut [u8]) -> MnemonicResult<()> {
            Err(MnemonicError::RandomnessUnavailable("device gone".to_string()))
        }
    }

    #[test]
    fn test_source_failure_propagates() {
        let list = english();
        let err = generate(EntropySize::Bits256, &FailingSource, &list).unwrap_err();
        assert!(matches!(err, MnemonicError::RandomnessUnavailable(_)));
    }
}
