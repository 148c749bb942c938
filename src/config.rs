//! Configuration for building a [`MnemonicCodec`].
//!
//! Stored as JSON, by default at `~/.seedphrase/config.json`:
//!
//! ```json
//! {
//!   "entropy_bits": 256,
//!   "wordlist": { "source": "file", "path": "/etc/words.txt", "sha256": "…" }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mnemonic::{
    EntropySize, MnemonicCodec, MnemonicError, OsEntropy, Wordlist,
};

/// Where the wordlist comes from
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum WordlistSource {
    /// Built-in BIP-39 English list
    #[default]
    Embedded,
    /// Newline-separated file, optionally pinned by SHA-256
    File {
        /// Path to the file
        path: PathBuf,
        /// Expected SHA-256 of the file bytes (hex)
        #[serde(default)]
        sha256: Option<String>,
    },
}

/// Mnemonic configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MnemonicConfig {
    /// Entropy size for newly generated phrases, stored as its bit count
    pub entropy_bits: EntropySize,
    /// Wordlist resource
    pub wordlist: WordlistSource,
}

impl Default for MnemonicConfig {
    fn default() -> Self {
        Self {
            entropy_bits: EntropySize::default(),
            wordlist: WordlistSource::Embedded,
        }
    }
}

impl MnemonicConfig {
    /// Load a config from a JSON file
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is not valid JSON, or
    /// names an unsupported entropy size (reported as `ConfigError::Parse`)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        debug!(path = %path.display(), entropy_bits = config.entropy_bits.bits(), "Loaded config");
        Ok(config)
    }

    /// Load the default config file if it exists, else the defaults
    ///
    /// # Errors
    /// Returns error if the default file exists but is invalid
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Get the default config directory
    #[must_use]
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".seedphrase")
    }

    /// Get the default config path
    #[must_use]
    pub fn default_path() -> PathBuf {
        Self::default_dir().join("config.json")
    }

    /// Load the configured wordlist
    ///
    /// # Errors
    /// Returns `WordlistInvalid` if a file source is unreadable or malformed
    pub fn wordlist(&self) -> Result<Arc<Wordlist>, ConfigError> {
        match &self.wordlist {
            WordlistSource::Embedded => Ok(Wordlist::english()),
            WordlistSource::File { path, sha256 } => {
                Ok(Arc::new(Wordlist::load(path, sha256.as_deref())?))
            }
        }
    }

    /// Build a codec using the OS random source
    ///
    /// # Errors
    /// Returns error if the wordlist cannot be loaded
    pub fn codec(&self) -> Result<MnemonicCodec, ConfigError> {
        Ok(MnemonicCodec::new(self.wordlist()?, Arc::new(OsEntropy)))
    }
}

impl MnemonicCodec {
    /// Build a codec from a config
    ///
    /// # Errors
    /// Returns error if the wordlist cannot be loaded
    pub fn from_config(config: &MnemonicConfig) -> Result<Self, ConfigError> {
        config.codec()
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error
    #[error("cannot read {path}: {message}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        message: String,
    },
    /// Malformed JSON
    #[error("parse error: {0}")]
    Parse(String),
    /// Invalid mnemonic setting
    #[error(transparent)]
    Mnemonic(#[from] MnemonicError),
}
