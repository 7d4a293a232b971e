//! Password strength evaluation and secure password generation
//!
//! This library provides the scoring core behind a password manager's
//! strength meter: an entropy-based evaluator corrected by structural
//! penalties, a common-password corpus check, and a CSPRNG-backed password
//! generator. Both operations are stateless and safe to call concurrently;
//! the only process-wide state is the read-only common-password corpus.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_COMMON_PASSWORDS_PATH`: Custom path to the common-password file
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_engine::{init_common_passwords, evaluate_password_strength, generate_password};
//! use secrecy::SecretString;
//!
//! // Initialize the common-password corpus (call once at startup)
//! init_common_passwords().expect("Failed to load common-password corpus");
//!
//! // Evaluate a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//! println!("Strength: {:?}", evaluation.strength);
//! for suggestion in &evaluation.suggestions {
//!     println!("- {}", suggestion);
//! }
//!
//! // Generate a fresh candidate
//! let candidate = generate_password(16).expect("No secure random source");
//! ```

// Internal modules
mod corpus;
mod evaluator;
mod generator;
mod normalize;
mod scoring;
mod types;

// Public API
pub use corpus::{
    CorpusError, common_passwords, init_common_passwords, init_common_passwords_from_path,
    is_common_password,
};
pub use evaluator::evaluate_password_strength;
pub use generator::{
    DEFAULT_PASSWORD_LENGTH, GENERATION_ALPHABET, GeneratorError, generate_password,
};
pub use normalize::normalize_password;
pub use types::{PasswordEvaluation, PasswordStrength};
