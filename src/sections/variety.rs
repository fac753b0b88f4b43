//! Character variety sections - uppercase, digit and special character checks.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;

/// The special characters that count toward the score. Only these nine;
/// other punctuation does not qualify.
pub const SYMBOLS: &str = "!@#$%^&*()";

/// Score contribution for each character category that is present.
pub const VARIETY_BONUS: i64 = 2;

pub fn has_uppercase(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_uppercase())
}

pub fn has_digit(pwd: &str) -> bool {
    pwd.chars().any(|c| c.is_ascii_digit())
}

pub fn has_symbol(pwd: &str) -> bool {
    pwd.chars().any(|c| SYMBOLS.contains(c))
}

/// Checks if the password contains at least one uppercase letter.
///
/// # Returns
/// - `Some(suggestion)` if no uppercase letter is present
/// - `None` otherwise
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    if !has_uppercase(password.expose_secret()) {
        return Some("Include at least one uppercase letter".to_string());
    }
    None
}

/// Checks if the password contains at least one decimal digit.
pub fn digit_section(password: &SecretString) -> SectionResult {
    if !has_digit(password.expose_secret()) {
        return Some("Include at least one digit".to_string());
    }
    None
}

/// Checks if the password contains at least one character from [`SYMBOLS`].
pub fn symbol_section(password: &SecretString) -> SectionResult {
    if !has_symbol(password.expose_secret()) {
        return Some("Include at least one special character".to_string());
    }
    None
}
