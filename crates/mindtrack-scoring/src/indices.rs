//! Derived health indices.

use mindtrack_model::{MAX_LEVEL, MIN_LEVEL};

use crate::extract::ExtractedFields;

/// The four derived indices, each in `[MIN_LEVEL, MAX_LEVEL]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indices {
    pub stress_level: u8,
    pub anxiety_level: u8,
    pub depression_risk: u8,
    pub wellness_score: u8,
}

/// Round half away from zero, then clamp to the level range.
///
/// Expects a finite input; extraction rejects non-finite answers and sums of
/// finite answers cannot produce NaN.
pub fn clamp_level(value: f64) -> u8 {
    let rounded = value
        .round()
        .clamp(f64::from(MIN_LEVEL), f64::from(MAX_LEVEL));
    rounded as u8
}

pub fn compute(fields: &ExtractedFields) -> Indices {
    let ExtractedFields {
        mood,
        sleep,
        anxiety,
        energy,
        interest,
        concentration,
        appetite_score,
    } = *fields;

    let anxiety_level = clamp_level(anxiety);
    let stress_level = clamp_level(((10.0 - sleep) + anxiety + (10.0 - energy)) / 3.0);
    let depression_risk = clamp_level(
        ((10.0 - mood) + (10.0 - interest) + (10.0 - sleep) + (10.0 - energy)) / 4.0,
    );
    let wellness_score = clamp_level(
        (mood + sleep + energy + interest + concentration + (10.0 - anxiety) + appetite_score)
            / 7.0,
    );

    Indices {
        stress_level,
        anxiety_level,
        depression_risk,
        wellness_score,
    }
}
