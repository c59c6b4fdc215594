//! Categorical appetite scale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Appetite option offered by the questionnaire.
///
/// Both extremes are treated as suboptimal: `Excessive` scores the same
/// midpoint as an unanswered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppetiteLevel {
    #[serde(rename = "Poor")]
    Poor,
    #[serde(rename = "Below average")]
    BelowAverage,
    #[serde(rename = "Normal")]
    Normal,
    #[serde(rename = "Above average")]
    AboveAverage,
    #[serde(rename = "Excessive")]
    Excessive,
}

/// Appetite score used when the answer is missing or unrecognized.
pub const DEFAULT_APPETITE_SCORE: f64 = 5.0;

impl AppetiteLevel {
    /// All levels in questionnaire order.
    pub const ALL: [AppetiteLevel; 5] = [
        AppetiteLevel::Poor,
        AppetiteLevel::BelowAverage,
        AppetiteLevel::Normal,
        AppetiteLevel::AboveAverage,
        AppetiteLevel::Excessive,
    ];

    /// Option labels in questionnaire order.
    pub const LABELS: [&'static str; 5] = [
        "Poor",
        "Below average",
        "Normal",
        "Above average",
        "Excessive",
    ];

    /// Label exactly as shown to the user.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppetiteLevel::Poor => "Poor",
            AppetiteLevel::BelowAverage => "Below average",
            AppetiteLevel::Normal => "Normal",
            AppetiteLevel::AboveAverage => "Above average",
            AppetiteLevel::Excessive => "Excessive",
        }
    }

    /// Numeric contribution to the wellness score.
    pub fn score(&self) -> f64 {
        match self {
            AppetiteLevel::Poor => 2.0,
            AppetiteLevel::BelowAverage => 4.0,
            AppetiteLevel::Normal => 6.0,
            AppetiteLevel::AboveAverage => 8.0,
            AppetiteLevel::Excessive => 5.0,
        }
    }
}

impl fmt::Display for AppetiteLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AppetiteLevel {
    type Err = ModelError;

    /// Exact, case-sensitive match against the option labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Poor" => Ok(AppetiteLevel::Poor),
            "Below average" => Ok(AppetiteLevel::BelowAverage),
            "Normal" => Ok(AppetiteLevel::Normal),
            "Above average" => Ok(AppetiteLevel::AboveAverage),
            "Excessive" => Ok(AppetiteLevel::Excessive),
            _ => Err(ModelError::UnknownAppetite(s.to_string())),
        }
    }
}
