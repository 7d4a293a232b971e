//! Scoring constants, kept together as one versioned block so recalibration
//! never touches the evaluation control flow.

/// Calibration constants for the strength score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringTuning {
    /// Entropy (bits) treated as maximally strong for scoring.
    pub max_entropy: f64,
    /// Weight of the character-class penalty.
    pub class_weight: f64,
    /// Cap on the character-class penalty.
    pub max_class_penalty: f64,
    /// Weight of the short-password penalty.
    pub length_weight: f64,
    /// Cap on the short-password penalty.
    pub max_length_penalty: f64,
}

/// Current calibration. Earlier revisions shipped a max entropy of 60 and a
/// class weight of 0.2; any future change here is a user-visible scoring
/// change and should bump this block as a whole.
pub const TUNING: ScoringTuning = ScoringTuning {
    max_entropy: 80.0,
    class_weight: 0.7,
    max_class_penalty: 0.6,
    length_weight: 0.2,
    max_length_penalty: 0.3,
};

/// Size of the full four-class alphabet (26 + 26 + 10 + 33).
pub const FULL_CLASS_SPACE: u32 = 95;

/// Passwords shorter than this (in code points) incur the length penalty.
pub const MIN_COMFORTABLE_LENGTH: usize = 8;
