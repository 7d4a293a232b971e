//! Core result types: strength levels and the evaluation value returned
//! to callers.

/// Strength thresholds applied to the normalized score in `[0, 1]`.
const OKAY_THRESHOLD: f64 = 0.4;
const STRONG_THRESHOLD: f64 = 0.6;
const EXCELLENT_THRESHOLD: f64 = 0.8;

/// Password strength level, ordered from weakest to strongest.
///
/// Only ever produced by [`PasswordStrength::from_score`]; callers are not
/// expected to construct strengths directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    Weak,
    Okay,
    Strong,
    Excellent,
}

impl PasswordStrength {
    /// Maps a normalized score in `[0, 1]` to a strength level.
    ///
    /// Thresholds: `< 0.4` is `Weak`, `< 0.6` is `Okay`, `< 0.8` is
    /// `Strong`, anything else is `Excellent`.
    pub fn from_score(score: f64) -> Self {
        if score < OKAY_THRESHOLD {
            PasswordStrength::Weak
        } else if score < STRONG_THRESHOLD {
            PasswordStrength::Okay
        } else if score < EXCELLENT_THRESHOLD {
            PasswordStrength::Strong
        } else {
            PasswordStrength::Excellent
        }
    }

    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Okay => "Okay",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::Excellent => "Excellent",
        }
    }
}

/// Result of a single password evaluation.
///
/// Constructed fresh on every call to
/// [`evaluate_password_strength`](crate::evaluate_password_strength) and
/// never mutated afterwards.
///
/// Invariant: `strength == Excellent` implies `suggestions` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub strength: PasswordStrength,
    /// Improvement suggestions in derivation order; may be empty.
    pub suggestions: Vec<String>,
}
