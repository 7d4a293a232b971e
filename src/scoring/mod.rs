//! Password scoring internals
//!
//! Each module covers one aspect of the score: the entropy estimate, the
//! structural penalties, and the calibration constants they share.

pub mod entropy;
pub mod penalty;
pub mod tuning;

pub use entropy::normalized_entropy;
pub use penalty::{class_penalty, length_penalty};
pub use tuning::{ScoringTuning, TUNING};
