//! Scoring engine.
//!
//! # Pipeline
//!
//! ```text
//! answers -> extract -> indices -> suggestions
//!                               -> summary
//! ```
//!
//! [`ScoringEngine::calculate`] is total: any failure is replaced by
//! [`fallback_result`] and reported once to the configured notifier.

use mindtrack_model::{AssessmentAnswers, ModelError, ResultData};
use serde_json::Value;
use tracing::{debug, debug_span, warn};

use crate::error::ScoringError;
use crate::extract::extract;
use crate::indices::compute;
use crate::notify::{FailureNotice, FailureNotifier, TracingNotifier};
use crate::suggestions::{RuleInputs, generate_suggestions};
use crate::summary::generate_summary;

/// Summary shown when scoring fails.
pub const FALLBACK_SUMMARY: &str = "We had trouble analyzing your specific responses, but we've provided some general wellness recommendations that may be helpful.";

/// Suggestions shown when scoring fails.
pub const FALLBACK_SUGGESTIONS: [&str; 4] = [
    "Practice regular mindfulness meditation",
    "Ensure you're getting 7-9 hours of sleep",
    "Stay physically active with regular exercise",
    "Consider talking to a mental health professional",
];

/// Fixed result returned in place of a failed computation.
pub fn fallback_result() -> ResultData {
    ResultData {
        stress_level: 5,
        anxiety_level: 5,
        depression_risk: 4,
        wellness_score: 6,
        suggestions: FALLBACK_SUGGESTIONS.map(str::to_string).to_vec(),
        summary: FALLBACK_SUMMARY.to_string(),
    }
}

/// Stateless scorer parameterized by where failure notices go.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine<N = TracingNotifier> {
    notifier: N,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<N: FailureNotifier> ScoringEngine<N> {
    pub fn with_notifier(notifier: N) -> Self {
        Self { notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Score `answers`, substituting the fallback on failure.
    pub fn calculate(&self, answers: &AssessmentAnswers) -> ResultData {
        self.recover(try_calculate(answers))
    }

    /// Score an arbitrary JSON document.
    ///
    /// A document that is not an object is a malformed shape and yields the
    /// fallback.
    pub fn calculate_json(&self, document: &Value) -> ResultData {
        let scored = match AssessmentAnswers::from_json_value(document) {
            Ok(answers) => try_calculate(&answers),
            Err(ModelError::NotAnObject { found }) => Err(ScoringError::MalformedShape { found }),
            Err(_) => Err(ScoringError::MalformedShape { found: "invalid" }),
        };
        self.recover(scored)
    }

    fn recover(&self, scored: Result<ResultData, ScoringError>) -> ResultData {
        match scored {
            Ok(result) => result,
            Err(error) => {
                warn!(%error, "scoring failed, using fallback result");
                self.notifier.notify(&FailureNotice::scoring_fallback());
                fallback_result()
            }
        }
    }
}

/// Score `answers`, returning the failure instead of falling back.
///
/// # Errors
///
/// Returns [`ScoringError::NonFinite`] when a numeric answer is NaN or
/// infinite.
pub fn try_calculate(answers: &AssessmentAnswers) -> Result<ResultData, ScoringError> {
    let span = debug_span!("score_assessment", answer_count = answers.len());
    let _guard = span.enter();

    let fields = extract(answers)?;
    let indices = compute(&fields);
    let suggestions = generate_suggestions(&RuleInputs { fields, indices });
    let summary = generate_summary(indices.wellness_score);

    debug!(
        stress_level = indices.stress_level,
        anxiety_level = indices.anxiety_level,
        depression_risk = indices.depression_risk,
        wellness_score = indices.wellness_score,
        suggestion_count = suggestions.len(),
        "assessment scored"
    );

    Ok(ResultData {
        stress_level: indices.stress_level,
        anxiety_level: indices.anxiety_level,
        depression_risk: indices.depression_risk,
        wellness_score: indices.wellness_score,
        suggestions,
        summary: summary.to_string(),
    })
}

/// Score `answers` with the default (logging) notifier.
pub fn calculate_results(answers: &AssessmentAnswers) -> ResultData {
    ScoringEngine::new().calculate(answers)
}

/// Score a JSON document with the default (logging) notifier.
pub fn calculate_results_from_json(document: &Value) -> ResultData {
    ScoringEngine::new().calculate_json(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;

    #[test]
    fn fallback_values() {
        let fallback = fallback_result();
        assert_eq!(fallback.stress_level, 5);
        assert_eq!(fallback.anxiety_level, 5);
        assert_eq!(fallback.depression_risk, 4);
        assert_eq!(fallback.wellness_score, 6);
        assert_eq!(fallback.suggestions.len(), 4);
        assert_eq!(fallback.summary, FALLBACK_SUMMARY);
    }

    #[test]
    fn success_does_not_notify() {
        let engine = ScoringEngine::with_notifier(RecordingNotifier::new());
        let result = engine.calculate(&AssessmentAnswers::new());
        assert_eq!(result.wellness_score, 5);
        assert!(engine.notifier().is_empty());
    }

    #[test]
    fn nan_answer_falls_back_and_notifies_once() {
        let engine = ScoringEngine::with_notifier(RecordingNotifier::new());
        let answers = AssessmentAnswers::new().with("mood", f64::NAN);
        assert_eq!(engine.calculate(&answers), fallback_result());
        assert_eq!(
            engine.notifier().take(),
            vec![FailureNotice::scoring_fallback()]
        );
    }
}
