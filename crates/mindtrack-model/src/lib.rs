//! MindTrack domain types: answers, results, questions and stored records.

pub mod answers;
pub mod appetite;
pub mod error;
pub mod questions;
pub mod records;
pub mod result;

pub use answers::{AnswerValue, AssessmentAnswers};
pub use appetite::{AppetiteLevel, DEFAULT_APPETITE_SCORE};
pub use error::{ModelError, Result};
pub use questions::{Question, QuestionBank, QuestionCategory, QuestionKind};
pub use records::{AssessmentSubmission, CheckIn, DEFAULT_RATING};
pub use result::{MAX_LEVEL, MAX_SUGGESTIONS, MIN_LEVEL, ResultData};
