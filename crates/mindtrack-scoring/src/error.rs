use thiserror::Error;

/// Reasons scoring can fail.
///
/// Missing or wrongly typed answers are never errors; they fall back to
/// neutral defaults during extraction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("malformed answers document: expected an object, found {found}")]
    MalformedShape { found: &'static str },
    #[error("answer for {field} is not a finite number")]
    NonFinite { field: &'static str },
}
