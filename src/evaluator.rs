//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    SectionResult, digit_section, has_consecutive_sequence, has_digit, has_symbol, has_uppercase,
    length_score, length_section, sequence_section, symbol_section, uppercase_section,
};
use crate::types::{InvalidInput, PasswordEvaluation, PasswordScore};

/// Delay before an async evaluation runs, so rapid successive calls can be
/// cancelled before doing any work.
#[cfg(feature = "async")]
const EVALUATION_DELAY: std::time::Duration = std::time::Duration::from_millis(300);

/// The five independent score contributions for one password.
///
/// Each field is computed from the password alone; none depends on the
/// others. The strength label is derived from [`ScoreBreakdown::total`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// One point per character, capped at 10.
    pub length: i64,
    /// +2 if any uppercase letter is present.
    pub uppercase: i64,
    /// +2 if any decimal digit is present.
    pub digit: i64,
    /// +2 if any character from the fixed symbol set is present.
    pub symbol: i64,
    /// -5 if the lower-cased password contains a known digit run.
    pub sequence_penalty: i64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i64 {
        self.length + self.uppercase + self.digit + self.symbol + self.sequence_penalty
    }
}

/// Computes the five sub-scores for a password.
///
/// Pure and total: every input string, including the empty string, yields
/// a defined breakdown.
pub fn score_password(pwd: &str) -> ScoreBreakdown {
    use crate::sections::{SEQUENCE_PENALTY, VARIETY_BONUS};

    ScoreBreakdown {
        length: length_score(pwd),
        uppercase: if has_uppercase(pwd) { VARIETY_BONUS } else { 0 },
        digit: if has_digit(pwd) { VARIETY_BONUS } else { 0 },
        symbol: if has_symbol(pwd) { VARIETY_BONUS } else { 0 },
        sequence_penalty: if has_consecutive_sequence(pwd) {
            SEQUENCE_PENALTY
        } else {
            0
        },
    }
}

/// Collects improvement suggestions for every unmet criterion.
///
/// Re-examines the password directly rather than the score, one section per
/// criterion, in fixed priority order: length, uppercase, digit, symbol,
/// sequence avoidance. Returns an empty vector when all criteria are met.
pub fn suggest_improvements(password: &SecretString) -> Vec<String> {
    // Orchestrator: execute sections in priority order
    let sections: [(&str, fn(&SecretString) -> SectionResult); 5] = [
        ("length", length_section),
        ("uppercase", uppercase_section),
        ("digit", digit_section),
        ("symbol", symbol_section),
        ("sequence", sequence_section),
    ];

    let mut suggestions = Vec::new();
    for (_name, section_fn) in sections {
        if let Some(suggestion) = section_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!(section = _name, "criterion unmet");
            suggestions.push(suggestion);
        }
    }
    suggestions
}

/// Evaluates password strength and returns the score with suggestions.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordEvaluation` containing the total score and one suggestion per
/// unmet criterion, in fixed priority order. Stateless and idempotent:
/// repeated calls with the same input yield identical results.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let breakdown = score_password(password.expose_secret());

    let evaluation = PasswordEvaluation {
        score: PasswordScore::new(breakdown.total()),
        suggestions: suggest_improvements(password),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = evaluation.score.value(),
        strength = %evaluation.strength(),
        "password evaluated"
    );

    evaluation
}

/// Evaluates a password supplied as raw bytes.
///
/// Validation boundary for callers that do not yet hold a string: input
/// that is not valid UTF-8 is rejected before any scoring logic runs.
///
/// # Errors
/// Returns [`InvalidInput::NotUtf8`] if `bytes` is not valid UTF-8.
pub fn evaluate_password_bytes(bytes: &[u8]) -> Result<PasswordEvaluation, InvalidInput> {
    let pwd = std::str::from_utf8(bytes)?;
    let password = SecretString::new(pwd.to_string().into());
    Ok(evaluate_password_strength(&password))
}

/// Async version that sends the evaluation result via channel.
///
/// Waits a short delay before evaluating so that a caller reacting to
/// keystrokes can cancel a pending evaluation when the input changes; a
/// cancelled call sends nothing.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(EVALUATION_DELAY) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_tx_delivers_evaluation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = secret("TestPass123!");

        evaluate_password_strength_tx(&pwd, token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation, evaluate_password_strength(&pwd));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tx_cancelled_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = secret("TestPass123!");
        evaluate_password_strength_tx(&pwd, token, tx).await;

        // Sender dropped without sending anything.
        assert!(rx.recv().await.is_none());
    }
}
