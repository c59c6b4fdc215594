//! Dashboard data and chart series.

use chrono::{DateTime, Datelike, Local, Utc};
use mindtrack_model::{AssessmentSubmission, CheckIn};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{HistoryError, Result};
use crate::mock::MockHistory;
use crate::store::HistoryStore;

/// Levels charted for an assessment that carries no results.
pub const DEFAULT_STRESS: u8 = 5;
pub const DEFAULT_ANXIETY: u8 = 4;
pub const DEFAULT_DEPRESSION: u8 = 3;
pub const DEFAULT_WELLNESS: u8 = 6;

/// One point on the assessment trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentPoint {
    pub name: String,
    pub stress: u8,
    pub anxiety: u8,
    pub depression: u8,
    pub wellness: u8,
}

/// One point on the check-in trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckInPoint {
    pub name: String,
    pub mood: u8,
    pub sleep: u8,
    pub energy: u8,
}

/// Records shown on the dashboard, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub assessments: Vec<AssessmentSubmission>,
    pub check_ins: Vec<CheckIn>,
    pub has_data: bool,
}

impl Dashboard {
    /// Combine the stored assessment with generated history.
    ///
    /// The stored assessment, when present, is placed ahead of the mock
    /// assessments. Check-ins come from the mock history; when that is
    /// empty the recorded check-in history is used instead. A stored
    /// assessment that cannot be parsed is logged and skipped.
    pub fn load(store: &HistoryStore, mock: MockHistory) -> Result<Self> {
        let latest = match store.latest_assessment() {
            Ok(latest) => latest,
            Err(error @ HistoryError::Parse { .. }) => {
                warn!(%error, "ignoring unreadable stored assessment");
                None
            }
            Err(error) => return Err(error),
        };

        let has_data = latest.is_some() || !mock.assessments.is_empty();
        let mut assessments = Vec::with_capacity(mock.assessments.len() + 1);
        assessments.extend(latest);
        assessments.extend(mock.assessments);

        let check_ins = if mock.check_ins.is_empty() {
            let mut recorded = store.check_in_history()?;
            recorded.reverse();
            recorded
        } else {
            mock.check_ins
        };

        debug!(
            assessments = assessments.len(),
            check_ins = check_ins.len(),
            has_data,
            "loaded dashboard"
        );
        Ok(Self {
            assessments,
            check_ins,
            has_data,
        })
    }

    pub fn assessment_series(&self) -> Vec<AssessmentPoint> {
        assessment_series(&self.assessments)
    }

    pub fn check_in_series(&self) -> Vec<CheckInPoint> {
        check_in_series(&self.check_ins)
    }
}

/// `M/D` label in the local time zone, without zero padding.
pub fn chart_label(date: DateTime<Utc>) -> String {
    let local = date.with_timezone(&Local);
    format!("{}/{}", local.month(), local.day())
}

/// Chart points for newest-first `assessments`, oldest first.
pub fn assessment_series(assessments: &[AssessmentSubmission]) -> Vec<AssessmentPoint> {
    assessments
        .iter()
        .rev()
        .map(|submission| {
            let results = submission.results.as_ref();
            AssessmentPoint {
                name: chart_label(submission.date),
                stress: results.map_or(DEFAULT_STRESS, |r| r.stress_level),
                anxiety: results.map_or(DEFAULT_ANXIETY, |r| r.anxiety_level),
                depression: results.map_or(DEFAULT_DEPRESSION, |r| r.depression_risk),
                wellness: results.map_or(DEFAULT_WELLNESS, |r| r.wellness_score),
            }
        })
        .collect()
}

/// Chart points for newest-first `check_ins`, oldest first.
pub fn check_in_series(check_ins: &[CheckIn]) -> Vec<CheckInPoint> {
    check_ins
        .iter()
        .rev()
        .map(|check_in| CheckInPoint {
            name: chart_label(check_in.date),
            mood: check_in.mood,
            sleep: check_in.sleep,
            energy: check_in.energy,
        })
        .collect()
}
