//! Evaluation result types.

use thiserror::Error;

/// Error returned when the input cannot be treated as a password string.
///
/// This is the only error condition in the crate: it is raised at the
/// validation boundary, before any scoring logic runs.
#[derive(Error, Debug)]
pub enum InvalidInput {
    #[error("password bytes are not valid UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),
}

/// Total heuristic score for a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordScore(i64);

impl PasswordScore {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Strength classification derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Maps a total score to a strength label.
    ///
    /// Threshold ladder, evaluated top-down; first match wins.
    pub fn from_score(score: i64) -> Self {
        if score >= 12 {
            PasswordStrength::VeryStrong
        } else if score >= 8 {
            PasswordStrength::Strong
        } else if score >= 6 {
            PasswordStrength::Moderate
        } else if score >= 4 {
            PasswordStrength::Weak
        } else {
            PasswordStrength::VeryWeak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Moderate => "Moderate",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }
}

impl std::fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating one password.
///
/// Holds the total score and the ordered list of improvement suggestions.
/// The strength label is derived from the score on demand via
/// [`PasswordEvaluation::strength`]. Never contains the password itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub suggestions: Vec<String>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score.value())
    }
}

impl std::fmt::Display for PasswordEvaluation {
    /// Renders the summary block shown to end users:
    /// the strength label followed by one suggestion per line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Password strength: {}\nSuggestions:\n{}",
            self.strength(),
            self.suggestions.join("\n")
        )
    }
}
