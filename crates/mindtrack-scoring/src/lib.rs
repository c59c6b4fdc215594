//! Rule-based assessment scoring.
//!
//! Turns raw questionnaire answers into four indices (stress, anxiety,
//! depression risk, wellness), up to five suggestions and a summary
//! paragraph. The engine is a pure function of its input; the only side
//! effect is the failure notice emitted when the fallback result is used.
//!
//! ```
//! use mindtrack_model::AssessmentAnswers;
//! use mindtrack_scoring::calculate_results;
//!
//! let answers = AssessmentAnswers::new().with("mood", 8).with("appetite", "Normal");
//! let result = calculate_results(&answers);
//! assert!((1..=10).contains(&result.wellness_score));
//! ```

mod engine;
mod error;
pub mod extract;
pub mod indices;
pub mod notify;
pub mod suggestions;
pub mod summary;

pub use engine::{
    FALLBACK_SUGGESTIONS, FALLBACK_SUMMARY, ScoringEngine, calculate_results,
    calculate_results_from_json, fallback_result, try_calculate,
};
pub use error::ScoringError;
pub use extract::{ExtractedFields, NEUTRAL_ANSWER, NUMERIC_FIELDS};
pub use indices::Indices;
pub use notify::{
    FailureNotice, FailureNotifier, NoticeVariant, RecordingNotifier, SilentNotifier,
    TracingNotifier,
};
pub use suggestions::{
    GENERAL_SUGGESTIONS, PROFESSIONAL_HELP, RuleInputs, SUGGESTION_RULES, SuggestionRule,
    triggered_rules,
};
pub use summary::SummaryBand;
