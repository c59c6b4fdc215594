//! Field extraction with neutral defaults.

use mindtrack_model::{AnswerValue, AppetiteLevel, AssessmentAnswers, DEFAULT_APPETITE_SCORE};
use tracing::trace;

use crate::error::ScoringError;

/// Value substituted for a numeric answer that is missing or not a number.
pub const NEUTRAL_ANSWER: f64 = 5.0;

/// Numeric questions that feed the indices, in extraction order.
pub const NUMERIC_FIELDS: [&str; 6] = [
    "mood",
    "sleep",
    "anxiety",
    "energy",
    "interest",
    "concentration",
];

/// Answers reduced to the numbers the scoring rules operate on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractedFields {
    pub mood: f64,
    pub sleep: f64,
    pub anxiety: f64,
    pub energy: f64,
    pub interest: f64,
    pub concentration: f64,
    pub appetite_score: f64,
}

impl Default for ExtractedFields {
    fn default() -> Self {
        Self {
            mood: NEUTRAL_ANSWER,
            sleep: NEUTRAL_ANSWER,
            anxiety: NEUTRAL_ANSWER,
            energy: NEUTRAL_ANSWER,
            interest: NEUTRAL_ANSWER,
            concentration: NEUTRAL_ANSWER,
            appetite_score: DEFAULT_APPETITE_SCORE,
        }
    }
}

/// Extract scoring inputs from raw answers.
///
/// Numbers are taken as given (no range check). Anything else, including a
/// numeric-looking string, becomes [`NEUTRAL_ANSWER`]. The appetite answer
/// goes through the [`AppetiteLevel`] table and defaults to
/// [`DEFAULT_APPETITE_SCORE`].
///
/// # Errors
///
/// Returns [`ScoringError::NonFinite`] when a numeric answer is NaN or
/// infinite.
pub fn extract(answers: &AssessmentAnswers) -> Result<ExtractedFields, ScoringError> {
    Ok(ExtractedFields {
        mood: numeric(answers, "mood")?,
        sleep: numeric(answers, "sleep")?,
        anxiety: numeric(answers, "anxiety")?,
        energy: numeric(answers, "energy")?,
        interest: numeric(answers, "interest")?,
        concentration: numeric(answers, "concentration")?,
        appetite_score: appetite_score(answers),
    })
}

fn numeric(answers: &AssessmentAnswers, field: &'static str) -> Result<f64, ScoringError> {
    match answers.number(field) {
        Some(value) if value.is_finite() => Ok(value),
        Some(_) => Err(ScoringError::NonFinite { field }),
        None => {
            trace!(
                field,
                kind = answers.get(field).map_or("missing", AnswerValue::kind),
                "using neutral default"
            );
            Ok(NEUTRAL_ANSWER)
        }
    }
}

fn appetite_score(answers: &AssessmentAnswers) -> f64 {
    answers
        .text("appetite")
        .and_then(|label| label.parse::<AppetiteLevel>().ok())
        .map_or(DEFAULT_APPETITE_SCORE, |level| level.score())
}
