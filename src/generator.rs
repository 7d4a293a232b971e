//! Secure password generation.
//!
//! Draws characters from a fixed printable-ASCII alphabet using the
//! operating system's CSPRNG. Generated output is used as an actual vault
//! secret, so a general-purpose PRNG is never an acceptable fallback.

use rand::{TryRngCore, rngs::OsRng};
use thiserror::Error;

/// Fixed generation alphabet: 26 lowercase, 26 uppercase, 10 digits and 26
/// symbols, 88 characters total. Changing this changes the security
/// properties of generated passwords and must be versioned.
pub const GENERATION_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Default generated password length.
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Secure random source unavailable: {0}")]
    RngUnavailable(String),
}

/// Generates a random password of `length` characters drawn from
/// [`GENERATION_ALPHABET`].
///
/// Each position is selected by reducing one uniformly random u32 modulo the
/// alphabet length. 88 does not divide 2^32 evenly, so the lowest-indexed
/// characters are favored by roughly 1 part in 49 million; the reduction is
/// kept as-is rather than switched to rejection sampling so output matches
/// the established distribution.
///
/// # Errors
///
/// Returns [`GeneratorError::RngUnavailable`] if the operating system
/// discloses no secure random source. There is no fallback.
pub fn generate_password(length: usize) -> Result<String, GeneratorError> {
    let alphabet = GENERATION_ALPHABET.as_bytes();
    let mut password = String::with_capacity(length);

    for _ in 0..length {
        let value = OsRng.try_next_u32().map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Password generation FAILED: no secure random source: {}", e);
            GeneratorError::RngUnavailable(e.to_string())
        })?;
        password.push(alphabet[value as usize % alphabet.len()] as char);
    }

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn test_alphabet_has_88_distinct_ascii_chars() {
        assert_eq!(GENERATION_ALPHABET.len(), 88);
        assert!(GENERATION_ALPHABET.is_ascii());

        let distinct: HashSet<char> = GENERATION_ALPHABET.chars().collect();
        assert_eq!(distinct.len(), 88);

        // 26 lowercase, 26 uppercase, 10 digits, 26 symbols
        assert_eq!(
            GENERATION_ALPHABET
                .chars()
                .filter(|c| !c.is_ascii_alphanumeric())
                .count(),
            26
        );
    }

    #[test]
    fn test_generate_default_length() {
        let password = generate_password(DEFAULT_PASSWORD_LENGTH).unwrap();
        assert_eq!(password.chars().count(), 16);
        assert!(password.chars().all(|c| GENERATION_ALPHABET.contains(c)));
    }

    #[test]
    fn test_generate_various_lengths() {
        for length in [0, 1, 8, 32, 128] {
            let password = generate_password(length).unwrap();
            assert_eq!(password.chars().count(), length);
            assert!(password.chars().all(|c| GENERATION_ALPHABET.contains(c)));
        }
    }

    #[test]
    fn test_no_duplicates_over_many_generations() {
        let mut seen = HashSet::with_capacity(10_000);
        for _ in 0..10_000 {
            let password = generate_password(16).unwrap();
            assert!(seen.insert(password), "duplicate 16-char password drawn");
        }
    }

    #[test]
    fn test_character_frequencies_pass_chi_square() {
        // 160k draws across the 88-character alphabet. The known modulo bias
        // (~1 part in 49M) is far below detectability at this sample size.
        let mut counts: HashMap<char, u64> = HashMap::new();
        let samples = 5_000;
        let length = 32;
        for _ in 0..samples {
            for c in generate_password(length).unwrap().chars() {
                *counts.entry(c).or_insert(0) += 1;
            }
        }

        let total = (samples * length) as f64;
        let expected = total / GENERATION_ALPHABET.len() as f64;
        let chi_square: f64 = GENERATION_ALPHABET
            .chars()
            .map(|c| {
                let observed = *counts.get(&c).unwrap_or(&0) as f64;
                (observed - expected).powi(2) / expected
            })
            .sum();

        // 87 degrees of freedom: mean 87, stddev ~13.2. 160 sits beyond
        // five sigma, so a uniform source essentially never trips this.
        assert!(
            chi_square < 160.0,
            "chi-square statistic {} suggests biased output",
            chi_square
        );
    }
}
