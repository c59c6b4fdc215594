//! Persisted records: assessment submissions and daily check-ins.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::answers::AssessmentAnswers;
use crate::result::ResultData;

/// Rating used for check-in fields that were never adjusted.
pub const DEFAULT_RATING: u8 = 5;

fn default_rating() -> u8 {
    DEFAULT_RATING
}

/// A completed questionnaire as stored on the device: `{ answers, date }`.
///
/// Generated history entries also carry their scored `results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub answers: AssessmentAnswers,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultData>,
}

impl AssessmentSubmission {
    pub fn new(answers: AssessmentAnswers, date: DateTime<Utc>) -> Self {
        Self {
            answers,
            date,
            results: None,
        }
    }

    #[must_use]
    pub fn with_results(mut self, results: ResultData) -> Self {
        self.results = Some(results);
        self
    }
}

/// A quick daily mood/sleep/energy record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    pub date: DateTime<Utc>,
    #[serde(default = "default_rating")]
    pub mood: u8,
    #[serde(default = "default_rating")]
    pub sleep: u8,
    #[serde(default = "default_rating")]
    pub energy: u8,
    #[serde(default)]
    pub notes: String,
}

impl CheckIn {
    /// A check-in with every rating at the midpoint and no notes.
    pub fn new(date: DateTime<Utc>) -> Self {
        Self {
            date,
            mood: DEFAULT_RATING,
            sleep: DEFAULT_RATING,
            energy: DEFAULT_RATING,
            notes: String::new(),
        }
    }

    /// Calendar day of this check-in in the local time zone.
    pub fn local_day(&self) -> NaiveDate {
        self.date.with_timezone(&Local).date_naive()
    }

    /// Whether this check-in falls on `day` (local calendar date).
    pub fn is_same_day(&self, day: NaiveDate) -> bool {
        self.local_day() == day
    }
}
