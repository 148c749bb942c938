//! Word dictionary indexed by 11-bit values.
//!
//! A [`Wordlist`] is immutable once built. Every constructor enforces the
//! same schema (exactly 2048 non-empty, unique entries free of whitespace,
//! control and zero-width characters) and
//! fails closed with [`MnemonicError::WordlistInvalid`] on any deviation.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use super::{MnemonicError, MnemonicResult};

/// Number of entries every wordlist must have
pub const WORDLIST_LEN: usize = 2048;

static ENGLISH: Lazy<Arc<Wordlist>> = Lazy::new(|| {
    let list = Wordlist::from_words(bip39::Language::English.word_list().iter().copied())
        .expect("embedded English wordlist is well-formed");
    debug!("Initialized embedded English wordlist");
    Arc::new(list)
});

/// Ordered, deduplicated list of exactly 2048 words
#[derive(Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// The embedded BIP-39 English list, built once per process.
    ///
    /// Concurrent first calls block until the single initialization is done.
    #[must_use]
    pub fn english() -> Arc<Self> {
        Arc::clone(&ENGLISH)
    }

    /// Build a wordlist from its entries in index order.
    ///
    /// # Errors
    /// Returns `WordlistInvalid` if the count is not 2048, or an entry is
    /// empty, contains an invisible character, or repeats an earlier one
    pub fn from_words<I, S>(words: I) -> MnemonicResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != WORDLIST_LEN {
            return Err(MnemonicError::WordlistInvalid(format!(
                "expected {WORDLIST_LEN} words, got {}",
                words.len()
            )));
        }

        let mut index = HashMap::with_capacity(WORDLIST_LEN);
        for (i, word) in words.iter().enumerate() {
            if word.is_empty() {
                return Err(MnemonicError::WordlistInvalid(format!(
                    "entry {i} is empty"
                )));
            }
            if word.chars().any(is_invisible) {
                return Err(MnemonicError::WordlistInvalid(format!(
                    "entry {i} contains whitespace or an invisible character"
                )));
            }
            // i < 2048 always fits in u16
            let position = u16::try_from(i).map_err(|e| MnemonicError::WordlistInvalid(e.to_string()))?;
            if let Some(first) = index.insert(word.clone(), position) {
                return Err(MnemonicError::WordlistInvalid(format!(
                    "entry {i} duplicates entry {first}"
                )));
            }
        }

        Ok(Self { words, index })
    }

    /// Parse a newline-separated resource, one word per line.
    ///
    /// The format is strict: no byte order mark, LF endings, no blank or
    /// padded lines, at most one trailing newline, exactly 2048 lines.
    ///
    /// # Errors
    /// Returns `WordlistInvalid` on any deviation from the format
    pub fn parse(text: &str) -> MnemonicResult<Self> {
        if text.starts_with('\u{feff}') {
            return Err(MnemonicError::WordlistInvalid(
                "resource starts with a byte order mark".to_string(),
            ));
        }
        let body = text.strip_suffix('\n').unwrap_or(text);
        let lines: Vec<&str> = body.split('\n').collect();

        for (i, line) in lines.iter().enumerate() {
            if line.trim() != *line {
                return Err(MnemonicError::WordlistInvalid(format!(
                    "line {} has surrounding whitespace",
                    i + 1
                )));
            }
        }

        Self::from_words(lines)
    }

    /// Load a wordlist resource from disk.
    ///
    /// When `expected_sha256` is given, the SHA-256 of the raw file bytes
    /// must match it (hex, case-insensitive) before parsing starts.
    ///
    /// # Errors
    /// Returns `WordlistInvalid` if the file cannot be read, the digest does
    /// not match, or the content fails [`Wordlist::parse`]
    pub fn load<P: AsRef<Path>>(path: P, expected_sha256: Option<&str>) -> MnemonicResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            MnemonicError::WordlistInvalid(format!("cannot read {}: {e}", path.display()))
        })?;

        let actual = hex::encode(Sha256::digest(&bytes));
        if let Some(expected) = expected_sha256 {
            if !actual.eq_ignore_ascii_case(expected.trim()) {
                warn!(path = %path.display(), expected, actual = %actual, "Wordlist digest mismatch");
                return Err(MnemonicError::WordlistInvalid(format!(
                    "sha256 mismatch for {}",
                    path.display()
                )));
            }
        }

        let text = String::from_utf8(bytes)
            .map_err(|e| MnemonicError::WordlistInvalid(format!("not UTF-8: {e}")))?;
        let wordlist = Self::parse(&text)?;
        info!(path = %path.display(), sha256 = %actual, "Loaded wordlist");
        Ok(wordlist)
    }

    /// Index of `word`; exact, case-sensitive match
    #[must_use]
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    /// Word at `index`, or `None` if out of range
    #[must_use]
    pub fn word(&self, index: u16) -> Option<&str> {
        self.words.get(usize::from(index)).map(String::as_str)
    }

    /// Whether `word` is in the list
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of entries (always 2048)
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// SHA-256 hex digest of the canonical form (words joined by `\n`,
    /// with a trailing newline)
    #[must_use]
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        for word in &self.words {
            hasher.update(word.as_bytes());
            hasher.update(b"\n");
        }
        let digest = hex::encode(hasher.finalize());
        debug!(sha256 = %digest, "Computed wordlist digest");
        digest
    }
}

/// Characters that would make two visually identical words differ
fn is_invisible(c: char) -> bool {
    c.is_control() || c.is_whitespace() || matches!(c, '\u{feff}' | '\u{200b}')
}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wordlist({} words, {}..{})",
            self.words.len(),
            self.words.first().map_or("", String::as_str),
            self.words.last().map_or("", String::as_str)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn synthetic_words() -> Vec<String> {
        (0..WORDLIST_LEN).map(|i| format!("w{i:04}")).collect()
    }

    #[test]
    fn test_english_shape() {
        let list = Wordlist::english();
        assert_eq!(list.len(), WORDLIST_LEN);
        assert_eq!(list.word(0), Some("abandon"));
        assert_eq!(list.word(2047), Some("zoo"));
        assert_eq!(list.index_of("zoo"), Some(2047));
        assert_eq!(list.word(2048), None);
    }

    #[test]
    fn test_english_is_singleton() {
        assert!(Arc::ptr_eq(&Wordlist::english(), &Wordlist::english()));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let list = Wordlist::english();
        assert!(list.contains("abandon"));
        assert!(!list.contains("Abandon"));
        assert!(!list.contains("ABANDON"));
    }

    #[test]
    fn test_wrong_count_rejected() {
        let mut words = synthetic_words();
        words.pop();
        let err = Wordlist::from_words(words).unwrap_err();
        assert!(matches!(err, MnemonicError::WordlistInvalid(_)));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut words = synthetic_words();
        words[100] = words[7].clone();
        let err = Wordlist::from_words(words).unwrap_err();
        assert!(err.to_string().contains("duplicates entry 7"));
    }

    #[test]
    fn test_whitespace_entry_rejected() {
        let mut words = synthetic_words();
        words[3] = "two words".to_string();
        assert!(Wordlist::from_words(words).is_err());
    }

    #[test]
    fn test_parse_strict_format() {
        let text = synthetic_words().join("\n");
        assert!(Wordlist::parse(&text).is_ok());
        assert!(Wordlist::parse(&format!("{text}\n")).is_ok());
        assert!(Wordlist::parse(&format!("{text}\n\n")).is_err());
        assert!(Wordlist::parse(&text.replacen("w0001", " w0001", 1)).is_err());
        assert!(Wordlist::parse(&text.replace('\n', "\r\n")).is_err());
    }

    #[test]
    fn test_bom_rejected() {
        let canonical: String = Wordlist::english().iter().map(|w| format!("{w}\n")).collect();
        assert!(Wordlist::parse(&canonical).is_ok());
        let err = Wordlist::parse(&format!("\u{feff}{canonical}")).unwrap_err();
        assert!(err.to_string().contains("byte order mark"));

        for hidden in ['\u{feff}', '\u{200b}', '\u{0}', '\u{7f}'] {
            let mut words = synthetic_words();
            words[0] = format!("{hidden}w0000");
            assert!(
                matches!(Wordlist::from_words(words), Err(MnemonicError::WordlistInvalid(_))),
                "accepted U+{:04X}",
                u32::from(hidden)
            );
        }
    }

    #[test]
    fn test_digest_matches_file_bytes() {
        let list = Wordlist::english();
        let canonical: String = list.iter().map(|w| format!("{w}\n")).collect();
        assert_eq!(list.digest(), hex::encode(Sha256::digest(canonical.as_bytes())));
    }

    #[test]
    fn test_load_with_checksum() {
        let list = Wordlist::english();
        let canonical: String = list.iter().map(|w| format!("{w}\n")).collect();
        let path = temp_dir().join(format!("seedphrase_test_wordlist_{}.txt", std::process::id()));
        fs::write(&path, &canonical).unwrap();

        let loaded = Wordlist::load(&path, Some(list.digest().to_uppercase().as_str())).unwrap();
        assert_eq!(loaded, *list);

        let wrong = "00".repeat(32);
        assert!(Wordlist::load(&path, Some(wrong.as_str())).is_err());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_dir().join(format!("seedphrase_missing_wordlist_{}.txt", std::process::id()));
        let err = Wordlist::load(path, None).unwrap_err();
        assert!(matches!(err, MnemonicError::WordlistInvalid(_)));
    }
}
