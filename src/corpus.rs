//! Common-password corpus
//!
//! Loads and queries the known-weak password set. The corpus is loaded once
//! at startup and is read-only afterwards; membership is the only query.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

use crate::normalize::normalize_password;

static COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Common-password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common-password file: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Returns the corpus file path.
///
/// Priority:
/// 1. Environment variable `PWD_COMMON_PASSWORDS_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn get_corpus_path() -> PathBuf {
    std::env::var("PWD_COMMON_PASSWORDS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/common-passwords.txt"))
}

/// Initializes the common-password corpus from the configured file.
///
/// # Environment Variable
///
/// Set `PWD_COMMON_PASSWORDS_PATH` to specify a custom corpus file location.
/// If not set, defaults to `./assets/common-passwords.txt`.
///
/// # Errors
///
/// Returns error if the file does not exist or cannot be read. An empty file
/// is accepted: an empty corpus simply never flags any password as
/// compromised. Evaluation itself never requires initialization to have
/// happened.
pub fn init_common_passwords() -> Result<usize, CorpusError> {
    let path = get_corpus_path();
    init_common_passwords_from_path(&path)
}

/// Initializes the common-password corpus from a specific file path.
///
/// Each line is normalized with the same function used at query time (NFKC,
/// lowercase, trim) before insertion. Idempotent: if the corpus is already
/// loaded, returns the existing entry count without re-reading.
///
/// # Arguments
///
/// * `path` - Path to a plain-text file, one password per line
pub fn init_common_passwords_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<usize, CorpusError> {
    {
        let guard = COMMON_PASSWORDS.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Corpus initialization FAILED: file not found {:?}", path);
        return Err(CorpusError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let set: HashSet<String> = content
        .lines()
        .map(normalize_password)
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = COMMON_PASSWORDS.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Corpus initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns a cloned copy of the loaded corpus.
///
/// Returns `None` if [`init_common_passwords`] has not been called.
pub fn common_passwords() -> Option<HashSet<String>> {
    let guard = COMMON_PASSWORDS.read().unwrap();
    guard.clone()
}

/// Checks whether a password is in the common-password corpus.
///
/// The candidate is normalized before lookup. Returns `false` if the corpus
/// is not initialized or the password is not found.
pub fn is_common_password(password: &str) -> bool {
    let guard = COMMON_PASSWORDS.read().unwrap();
    guard
        .as_ref()
        .map(|set| set.contains(&normalize_password(password)))
        .unwrap_or(false)
}

/// Resets the corpus for testing purposes.
#[cfg(test)]
pub fn reset_corpus_for_testing() {
    let mut guard = COMMON_PASSWORDS.write().unwrap();
    *guard = None;
}
