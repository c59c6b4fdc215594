//! Generated history used to populate the dashboard.
//!
//! Ten days, from eleven days ago through the day before yesterday, with
//! answers that improve linearly over the period.
//! Every third day carries a scored assessment; every day carries a
//! check-in with a small random wobble.

use chrono::{DateTime, TimeDelta, Utc};
use mindtrack_model::{AppetiteLevel, AssessmentAnswers, AssessmentSubmission, CheckIn};
use mindtrack_scoring::calculate_results;
use mindtrack_scoring::indices::clamp_level;
use rand::Rng;
use tracing::debug;

const OLDEST_OFFSET: i64 = 11;
const NEWEST_OFFSET: i64 = 2;
const ASSESSMENT_INTERVAL: i64 = 3;

/// Appetite answer by improvement stage.
const APPETITE_STAGES: [AppetiteLevel; 5] = [
    AppetiteLevel::Poor,
    AppetiteLevel::BelowAverage,
    AppetiteLevel::Normal,
    AppetiteLevel::Normal,
    AppetiteLevel::AboveAverage,
];

/// Generated assessments and check-ins, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockHistory {
    pub assessments: Vec<AssessmentSubmission>,
    pub check_ins: Vec<CheckIn>,
}

impl MockHistory {
    /// Generate history relative to `now`, drawing check-in noise from `rng`.
    pub fn generate<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Self {
        let mut history = Self::default();

        for offset in (NEWEST_OFFSET..=OLDEST_OFFSET).rev() {
            let date = now - TimeDelta::days(offset);
            let progress = (OLDEST_OFFSET - offset) as f64 / 10.0;

            if offset % ASSESSMENT_INTERVAL == 0 {
                let answers = mock_answers(progress);
                let results = calculate_results(&answers);
                history
                    .assessments
                    .push(AssessmentSubmission::new(answers, date).with_results(results));
            }

            let mut check_in = CheckIn::new(date);
            check_in.mood = clamp_level(4.0 + 3.0 * progress + rng.gen_range(-1.0..1.0));
            check_in.sleep = clamp_level(3.0 + 4.0 * progress + rng.gen_range(-1.0..1.0));
            check_in.energy = clamp_level(3.0 + 5.0 * progress + rng.gen_range(-1.0..1.0));
            history.check_ins.push(check_in);
        }

        history.assessments.reverse();
        history.check_ins.reverse();

        debug!(
            assessments = history.assessments.len(),
            check_ins = history.check_ins.len(),
            "generated mock history"
        );
        history
    }

    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty() && self.check_ins.is_empty()
    }
}

fn mock_answers(progress: f64) -> AssessmentAnswers {
    let stage = ((progress * 5.0).floor() as usize).min(APPETITE_STAGES.len() - 1);
    AssessmentAnswers::new()
        .with("mood", clamp_level(4.0 + 3.0 * progress))
        .with("sleep", clamp_level(3.0 + 4.0 * progress))
        .with("anxiety", clamp_level(8.0 - 4.0 * progress))
        .with("energy", clamp_level(3.0 + 5.0 * progress))
        .with("interest", clamp_level(4.0 + 4.0 * progress))
        .with("concentration", clamp_level(5.0 + 3.0 * progress))
        .with("appetite", APPETITE_STAGES[stage].as_str())
}
