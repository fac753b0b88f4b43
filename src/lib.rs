//! Password strength scoring library
//!
//! This library rates a password with a rule-based heuristic and returns a
//! total score, a strength label and an ordered list of improvement
//! suggestions. It is meant for lightweight interactive feedback, not for
//! authoritative security policy: there is no entropy modeling and no
//! dictionary lookup.
//!
//! Five criteria contribute to the score: length (one point per character,
//! capped at 10), presence of an uppercase letter (+2), of a decimal digit
//! (+2), of a special character from the fixed set `!@#$%^&*()` (+2), and a
//! -5 penalty when the password contains a consecutive digit run such as
//! `12345` or `54321`. Each unmet criterion yields one suggestion.
//!
//! The engine is stateless: evaluation is a pure function of the password's
//! characters, safe to call concurrently and idempotent. Passwords are taken
//! as [`secrecy::SecretString`] and are never stored or logged.
//!
//! # Features
//!
//! - `async` (default): Enables the channel-based evaluation variant with
//!   debounce and cancellation support
//! - `tracing`: Enables logging via tracing crate (labels and scores only,
//!   never password content)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::evaluate_password_strength;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//!
//! println!("Score: {}", evaluation.score.value());
//! println!("Strength: {}", evaluation.strength());
//! for suggestion in &evaluation.suggestions {
//!     println!("- {suggestion}");
//! }
//! ```

// Internal modules
mod evaluator;
mod sections;
mod types;

// Public API
pub use evaluator::{
    ScoreBreakdown, evaluate_password_bytes, evaluate_password_strength, score_password,
    suggest_improvements,
};
pub use types::{InvalidInput, PasswordEvaluation, PasswordScore, PasswordStrength};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
