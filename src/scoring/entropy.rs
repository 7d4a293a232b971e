//! Entropy estimation from character-class and unique-symbol counts.

use std::collections::HashSet;

use super::tuning::ScoringTuning;

/// Sum of the sizes of the character classes present in the password.
///
/// Classes are ASCII-only: lowercase (26), uppercase (26), digits (10), and
/// everything else (33). Non-ASCII letters therefore land in the fourth
/// class rather than being recognized as letters, which understates entropy
/// for non-Latin scripts. Known limitation, preserved deliberately because
/// changing it changes observable scoring.
pub fn symbol_count(password: &str) -> u32 {
    let mut symbols = 0;

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        symbols += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        symbols += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        symbols += 10;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        symbols += 33;
    }

    symbols
}

/// Number of distinct Unicode code points in the password.
pub fn unique_count(password: &str) -> usize {
    password.chars().collect::<HashSet<char>>().len()
}

/// Effective alphabet size: the class-based estimate, capped at four times
/// the number of distinct code points so that a long password built from a
/// handful of characters cannot claim a full class alphabet. The x4 factor
/// is heuristic slack, not a formal bound.
pub fn symbol_space(password: &str) -> u32 {
    symbol_count(password).min(unique_count(password) as u32 * 4)
}

/// Coarse entropy estimate in bits: code-point length times log2 of the
/// effective alphabet size. Zero when the effective alphabet is empty.
pub fn entropy_bits(password: &str) -> f64 {
    let space = symbol_space(password);
    if space == 0 {
        return 0.0;
    }

    password.chars().count() as f64 * f64::from(space).log2()
}

/// Entropy scaled into `[0, 1]` against the tuned maximum.
pub fn normalized_entropy(password: &str, tuning: &ScoringTuning) -> f64 {
    (entropy_bits(password) / tuning.max_entropy).min(1.0)
}
