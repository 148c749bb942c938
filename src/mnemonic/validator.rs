//! Phrase → structural, membership and checksum verdict.

use zeroize::Zeroizing;

use super::bits::{checksum_bits, BitBuffer};
use super::{EntropySize, InvalidReason, MnemonicError, MnemonicResult, Wordlist, BITS_PER_WORD};

/// Rebuild the entropy/checksum bit sequence of `phrase`.
fn unpack(phrase: &str, wordlist: &Wordlist) -> Result<(EntropySize, BitBuffer), InvalidReason> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let size = EntropySize::from_word_count(words.len())
        .ok_or(InvalidReason::WordCount(words.len()))?;

    let mut bits = BitBuffer::with_capacity(words.len() * BITS_PER_WORD);
    for (position, word) in words.iter().enumerate() {
        let index = wordlist
            .index_of(word)
            .ok_or(InvalidReason::UnknownWord(position))?;
        bits.push_bits(u32::from(index), BITS_PER_WORD);
    }
    Ok((size, bits))
}

fn verify(phrase: &str, wordlist: &Wordlist) -> Result<Zeroizing<Vec<u8>>, InvalidReason> {
    let (size, bits) = unpack(phrase, wordlist)?;
    let entropy_len = size.bits() as usize;

    let entropy = bits
        .prefix_bytes(entropy_len)
        .ok_or(InvalidReason::WordCount(size.word_count()))?;
    let stored = bits
        .read(entropy_len, size.checksum_bits())
        .ok_or(InvalidReason::Checksum)?;

    if checksum_bits(&entropy, size.checksum_bits()) != stored {
        return Err(InvalidReason::Checksum);
    }
    Ok(entropy)
}

/// Check `phrase` and report why it is invalid.
///
/// Words are split on any whitespace. The word count must be 12, 15, 18,
/// 21 or 24, every word must be in `wordlist` (case-sensitive), and the
/// trailing checksum bits must match the SHA-256 of the entropy bits.
///
/// # Errors
/// Returns `InvalidMnemonic` with the first failed check
pub fn check(phrase: &str, wordlist: &Wordlist) -> MnemonicResult<()> {
    verify(phrase, wordlist)
        .map(drop)
        .map_err(MnemonicError::InvalidMnemonic)
}

/// Whether `phrase` is a well-formed mnemonic over `wordlist`.
#[must_use]
pub fn validate(phrase: &str, wordlist: &Wordlist) -> bool {
    verify(phrase, wordlist).is_ok()
}

/// Recover the entropy bytes encoded by a valid `phrase`.
///
/// # Errors
/// Returns `InvalidMnemonic` if `phrase` fails [`check`]
pub fn to_entropy(phrase: &str, wordlist: &Wordlist) -> MnemonicResult<Zeroizing<Vec<u8>>> {
    verify(phrase, wordlist).map_err(MnemonicError::InvalidMnemonic)
}
