//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::corpus;
use crate::scoring::{TUNING, class_penalty, length_penalty, normalized_entropy};
use crate::types::{PasswordEvaluation, PasswordStrength};

const SUGGEST_COMPROMISED: &str = "This password is compromised, consider choosing another.";
const SUGGEST_VARIETY: &str = "Increase character variety.";
const SUGGEST_CLASSES: &str = "Add more character types (e.g. digits, special characters).";
const SUGGEST_LENGTH: &str = "Consider making your password longer.";

/// Normalized-entropy floor below which the variety suggestion is emitted.
const VARIETY_SUGGESTION_THRESHOLD: f64 = 0.6;
/// Penalty magnitude above which the matching suggestion is emitted.
const PENALTY_SUGGESTION_THRESHOLD: f64 = 0.1;

/// Evaluates password strength and returns a strength level plus
/// improvement suggestions.
///
/// Never fails: the empty string and exotic Unicode are valid inputs. An
/// empty password scores zero with no suggestions, since callers suppress
/// display for empty input. Pure apart from reading the common-password
/// corpus, so concurrent calls need no coordination.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A [`PasswordEvaluation`] containing strength and suggestions.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let pwd = password.expose_secret();
    let mut suggestions = Vec::new();

    let score = if pwd.is_empty() {
        0.0
    } else if corpus::is_common_password(pwd) {
        suggestions.push(SUGGEST_COMPROMISED.to_string());
        0.0
    } else {
        let normalized_entropy = normalized_entropy(pwd, &TUNING);
        if normalized_entropy < VARIETY_SUGGESTION_THRESHOLD {
            suggestions.push(SUGGEST_VARIETY.to_string());
        }

        let class_penalty = class_penalty(pwd, &TUNING);
        if class_penalty > PENALTY_SUGGESTION_THRESHOLD {
            suggestions.push(SUGGEST_CLASSES.to_string());
        }

        let length_penalty = length_penalty(pwd, &TUNING);
        if length_penalty > PENALTY_SUGGESTION_THRESHOLD {
            suggestions.push(SUGGEST_LENGTH.to_string());
        }

        (normalized_entropy - class_penalty - length_penalty).clamp(0.0, 1.0)
    };

    let strength = PasswordStrength::from_score(score);

    // Excellent passwords are not second-guessed, even when an intermediate
    // penalty briefly crossed a suggestion threshold.
    if strength == PasswordStrength::Excellent {
        suggestions.clear();
    }

    PasswordEvaluation {
        strength,
        suggestions,
    }
}
