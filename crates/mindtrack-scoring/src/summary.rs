//! Narrative summary selection.

use serde::Serialize;
use std::fmt;

/// Wellness-score band selecting one fixed summary paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryBand {
    /// Wellness score 8-10.
    Thriving,
    /// Wellness score 6-7.
    Good,
    /// Wellness score 4-5.
    Moderate,
    /// Wellness score 1-3.
    Difficult,
}

impl SummaryBand {
    pub fn for_score(wellness_score: u8) -> Self {
        match wellness_score {
            8.. => SummaryBand::Thriving,
            6..=7 => SummaryBand::Good,
            4..=5 => SummaryBand::Moderate,
            _ => SummaryBand::Difficult,
        }
    }

    /// Inclusive score range covered by this band.
    pub fn range(&self) -> (u8, u8) {
        match self {
            SummaryBand::Thriving => (8, 10),
            SummaryBand::Good => (6, 7),
            SummaryBand::Moderate => (4, 5),
            SummaryBand::Difficult => (1, 3),
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            SummaryBand::Thriving => {
                "Your responses suggest you're currently experiencing good mental wellbeing. You appear to be managing stress effectively and maintaining positive emotional health. Continue your current practices while monitoring any changes."
            }
            SummaryBand::Good => {
                "Your mental wellbeing appears to be generally good, though there may be some areas where you could benefit from additional support or self-care. Focus on maintaining balance in your daily routine."
            }
            SummaryBand::Moderate => {
                "Your responses indicate moderate challenges with your mental wellbeing. You may be experiencing stress, mood changes, or difficulties with sleep or energy. Consider implementing the suggested strategies and monitoring your progress."
            }
            SummaryBand::Difficult => {
                "Your responses suggest you may be going through a difficult period with your mental health. Consider reaching out to a mental health professional for support. Remember that many mental health challenges are temporary and treatable with appropriate care."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryBand::Thriving => "thriving",
            SummaryBand::Good => "good",
            SummaryBand::Moderate => "moderate",
            SummaryBand::Difficult => "difficult",
        }
    }
}

impl fmt::Display for SummaryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn generate_summary(wellness_score: u8) -> &'static str {
    SummaryBand::for_score(wellness_score).text()
}
