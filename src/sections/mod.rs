//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength and owns
//! the constants for its criterion.

mod length;
mod sequence;
mod variety;

pub use length::{length_score, length_section};
pub use sequence::{SEQUENCE_PENALTY, has_consecutive_sequence, sequence_section};
pub use variety::{
    VARIETY_BONUS, digit_section, has_digit, has_symbol, has_uppercase, symbol_section,
    uppercase_section,
};

/// Result type for section evaluation functions.
/// - `Some(suggestion)` - Criterion unmet, suggestion to show the user
/// - `None` - Criterion satisfied
pub type SectionResult = Option<String>;
