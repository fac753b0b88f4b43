//! Sequence section - detects known ascending/descending digit runs.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;

/// The digit runs that trigger the penalty, forward and backward,
/// length >= 5. Matching is done on the lower-cased password.
pub const SEQUENCES: [&str; 12] = [
    "012345", "12345", "23456", "34567", "45678", "56789", "98765", "87654", "76543", "65432",
    "54321", "43210",
];

/// Deduction applied when any run from [`SEQUENCES`] is present.
/// Applied at most once, no matter how many runs match.
pub const SEQUENCE_PENALTY: i64 = -5;

/// Returns true when the lower-cased password contains any listed run
/// as a contiguous substring.
pub fn has_consecutive_sequence(pwd: &str) -> bool {
    let lowered = pwd.to_lowercase();
    SEQUENCES.iter().any(|seq| lowered.contains(seq))
}

/// Checks the password for consecutive digit sequences.
///
/// # Returns
/// - `Some(suggestion)` if a known run is present
/// - `None` otherwise
pub fn sequence_section(password: &SecretString) -> SectionResult {
    if has_consecutive_sequence(password.expose_secret()) {
        return Some("Avoid consecutive sequences".to_string());
    }
    None
}
