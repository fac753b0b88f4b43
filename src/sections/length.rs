//! Length section - scores password length and checks the minimum.

use secrecy::{ExposeSecret, SecretString};

use super::SectionResult;

/// Length contributes one point per character, saturating here.
pub const LENGTH_SCORE_CAP: i64 = 10;

/// Passwords shorter than this get the length suggestion. Deliberately
/// independent of [`LENGTH_SCORE_CAP`]: a password can clear this cutoff
/// while still earning partial length points.
pub const MIN_SUGGESTED_LENGTH: usize = 6;

/// Length contribution to the total score: `min(10, character count)`.
pub fn length_score(pwd: &str) -> i64 {
    (pwd.chars().count() as i64).min(LENGTH_SCORE_CAP)
}

/// Checks if the password meets the suggested minimum length.
///
/// # Returns
/// - `Some(suggestion)` if the password is too short
/// - `None` if the password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_SUGGESTED_LENGTH {
        return Some("Use a longer password".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_score_empty() {
        assert_eq!(length_score(""), 0);
    }

    #[test]
    fn test_length_score_below_cap() {
        assert_eq!(length_score("abc"), 3);
        assert_eq!(length_score("abcdefghi"), 9);
    }

    #[test]
    fn test_length_score_saturates_at_cap() {
        assert_eq!(length_score("abcdefghij"), 10);
        assert_eq!(length_score("abcdefghijklmnopqrstuvwxyz"), 10);
    }

    #[test]
    fn test_length_score_counts_chars_not_bytes() {
        // 4 characters, more than 4 bytes
        assert_eq!(length_score("üßéà"), 4);
    }

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Ab1!".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(result, Some("Use a longer password".to_string()));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("abcdef".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(result, None);
    }

    #[test]
    fn test_length_section_empty() {
        let pwd = SecretString::new("".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(result, Some("Use a longer password".to_string()));
    }

    /// The suggestion cutoff (6) and the score cap (10) are independent
    /// thresholds: a 7-character password clears the suggestion but earns
    /// only 7 of 10 possible length points. Locked in on purpose.
    #[test]
    fn test_suggestion_cutoff_independent_of_score_cap() {
        let pwd = SecretString::new("abcdefg".to_string().into());
        assert_eq!(length_section(&pwd), None);
        assert_eq!(length_score("abcdefg"), 7);
        assert!(length_score("abcdefg") < LENGTH_SCORE_CAP);
    }
}
