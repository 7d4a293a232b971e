//! Structural penalties subtracted from the normalized entropy.

use super::entropy::symbol_count;
use super::tuning::{FULL_CLASS_SPACE, MIN_COMFORTABLE_LENGTH, ScoringTuning};

/// Penalty for narrow character-class usage. Shrinks toward zero as the
/// password's classes approach the full 95-symbol alphabet; capped
/// independently of the length penalty.
pub fn class_penalty(password: &str, tuning: &ScoringTuning) -> f64 {
    let class_share = f64::from(symbol_count(password)) / f64::from(FULL_CLASS_SPACE);
    (tuning.class_weight * (1.0 - class_share)).min(tuning.max_class_penalty)
}

/// Step penalty for short passwords: the full weight below eight code
/// points, nothing at eight or more.
pub fn length_penalty(password: &str, tuning: &ScoringTuning) -> f64 {
    if password.chars().count() < MIN_COMFORTABLE_LENGTH {
        tuning.length_weight.min(tuning.max_length_penalty)
    } else {
        0.0
    }
}
