use serde::{Deserialize, Serialize};

/// Lowest value any derived index can take.
pub const MIN_LEVEL: u8 = 1;
/// Highest value any derived index can take.
pub const MAX_LEVEL: u8 = 10;
/// Maximum number of suggestions in a result.
pub const MAX_SUGGESTIONS: usize = 5;

/// Outcome of scoring one set of assessment answers.
///
/// All four indices lie in `[MIN_LEVEL, MAX_LEVEL]`. Higher stress, anxiety
/// and depression-risk values indicate greater concern; a higher wellness
/// score is better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultData {
    pub stress_level: u8,
    pub anxiety_level: u8,
    pub depression_risk: u8,
    pub wellness_score: u8,
    pub suggestions: Vec<String>,
    pub summary: String,
}

impl ResultData {
    /// The four indices as `(label, value)` pairs, in display order.
    pub fn levels(&self) -> [(&'static str, u8); 4] {
        [
            ("Wellness Score", self.wellness_score),
            ("Stress Level", self.stress_level),
            ("Anxiety Level", self.anxiety_level),
            ("Depression Risk", self.depression_risk),
        ]
    }
}
