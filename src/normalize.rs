//! Password normalization used for common-password matching.
//!
//! The normalized form is ONLY used for corpus membership tests. Entropy and
//! character-class detection operate on the original string, since case and
//! whitespace change the entropy of what the user actually typed.

use unicode_normalization::UnicodeNormalization;

/// Normalizes a password for corpus lookup: NFKC, lowercase, then trim of
/// surrounding whitespace.
///
/// The same function must be applied to corpus entries at load time and to
/// candidate passwords at query time, or membership tests silently fail.
/// Idempotent.
pub fn normalize_password(password: &str) -> String {
    password
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}
