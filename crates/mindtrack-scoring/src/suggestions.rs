//! Suggestion rule table.
//!
//! Rules are evaluated in table order. Each rule whose guard holds
//! contributes its two suggestions; the general-wellness pair is appended
//! last and the list is cut to [`MAX_SUGGESTIONS`]. Earlier rules therefore
//! win when many fire, and the general pair is the first to be dropped.
//!
//! Guards for the first five rules read the raw extracted answers. The last
//! two read the derived indices.

use mindtrack_model::MAX_SUGGESTIONS;

use crate::extract::ExtractedFields;
use crate::indices::Indices;

/// Inputs visible to a rule guard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleInputs {
    pub fields: ExtractedFields,
    pub indices: Indices,
}

/// A threshold rule and the suggestions it contributes.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRule {
    /// Stable rule identifier.
    pub id: &'static str,
    /// Human-readable trigger condition.
    pub condition: &'static str,
    guard: fn(&RuleInputs) -> bool,
    pub suggestions: [&'static str; 2],
}

impl SuggestionRule {
    pub fn applies(&self, inputs: &RuleInputs) -> bool {
        (self.guard)(inputs)
    }
}

/// Threshold rules in priority order.
pub static SUGGESTION_RULES: [SuggestionRule; 7] = [
    SuggestionRule {
        id: "sleep",
        condition: "sleep < 5",
        guard: |inputs| inputs.fields.sleep < 5.0,
        suggestions: [
            "Improve your sleep routine by maintaining consistent sleep and wake times",
            "Avoid screens for at least an hour before bedtime",
        ],
    },
    SuggestionRule {
        id: "anxiety",
        condition: "anxiety > 6",
        guard: |inputs| inputs.fields.anxiety > 6.0,
        suggestions: [
            "Try deep breathing exercises when feeling anxious",
            "Consider mindfulness meditation to reduce anxiety",
        ],
    },
    SuggestionRule {
        id: "mood",
        condition: "mood < 5",
        guard: |inputs| inputs.fields.mood < 5.0,
        suggestions: [
            "Spend time outdoors in natural light each day",
            "Connect with friends or family members regularly",
        ],
    },
    SuggestionRule {
        id: "energy",
        condition: "energy < 5",
        guard: |inputs| inputs.fields.energy < 5.0,
        suggestions: [
            "Incorporate short walks throughout your day to boost energy",
            "Ensure you're staying hydrated and eating regular meals",
        ],
    },
    SuggestionRule {
        id: "interest",
        condition: "interest < 5",
        guard: |inputs| inputs.fields.interest < 5.0,
        suggestions: [
            "Schedule time for activities you've previously enjoyed",
            "Set small, achievable goals to rebuild a sense of accomplishment",
        ],
    },
    SuggestionRule {
        id: "depression-risk",
        condition: "depression risk > 7",
        guard: |inputs| inputs.indices.depression_risk > 7,
        suggestions: [
            PROFESSIONAL_HELP,
            "Practice self-compassion and avoid self-criticism",
        ],
    },
    SuggestionRule {
        id: "stress",
        condition: "stress level > 7",
        guard: |inputs| inputs.indices.stress_level > 7,
        suggestions: [
            "Identify specific stress triggers and develop coping strategies",
            "Try progressive muscle relaxation to reduce physical tension",
        ],
    },
];

/// Referral contributed by the depression-risk rule.
pub const PROFESSIONAL_HELP: &str = "Consider reaching out to a mental health professional";

/// Always appended after the threshold rules.
pub const GENERAL_SUGGESTIONS: [&str; 2] = [
    "Maintain a balanced diet rich in vegetables, fruits, and whole grains",
    "Practice gratitude by noting three positive things each day",
];

/// Rules whose guard holds, in priority order.
pub fn triggered_rules(inputs: &RuleInputs) -> Vec<&'static SuggestionRule> {
    SUGGESTION_RULES
        .iter()
        .filter(|rule| rule.applies(inputs))
        .collect()
}

/// Build the ordered, truncated suggestion list.
pub fn generate_suggestions(inputs: &RuleInputs) -> Vec<String> {
    SUGGESTION_RULES
        .iter()
        .filter(|rule| rule.applies(inputs))
        .flat_map(|rule| rule.suggestions)
        .chain(GENERAL_SUGGESTIONS)
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indices::compute;

    fn inputs(fields: ExtractedFields) -> RuleInputs {
        RuleInputs {
            fields,
            indices: compute(&fields),
        }
    }

    #[test]
    fn no_rules_yields_general_pair() {
        let suggestions = generate_suggestions(&inputs(ExtractedFields::default()));
        assert_eq!(suggestions, GENERAL_SUGGESTIONS.map(str::to_string).to_vec());
    }

    #[test]
    fn single_rule_keeps_one_general() {
        let fields = ExtractedFields {
            sleep: 4.0,
            ..ExtractedFields::default()
        };
        let suggestions = generate_suggestions(&inputs(fields));
        assert_eq!(suggestions.len(), 4);
        assert_eq!(suggestions[0], SUGGESTION_RULES[0].suggestions[0]);
        assert_eq!(suggestions[3], GENERAL_SUGGESTIONS[1]);

        let fields = ExtractedFields {
            sleep: 4.0,
            anxiety: 7.0,
            ..ExtractedFields::default()
        };
        let suggestions = generate_suggestions(&inputs(fields));
        assert_eq!(suggestions.len(), 5);
        assert_eq!(suggestions[4], GENERAL_SUGGESTIONS[0]);
    }

    #[test]
    fn thresholds_are_strict() {
        let fields = ExtractedFields {
            sleep: 5.0,
            anxiety: 6.0,
            mood: 5.0,
            energy: 5.0,
            interest: 5.0,
            ..ExtractedFields::default()
        };
        assert!(triggered_rules(&inputs(fields)).is_empty());
    }

    #[test]
    fn rule_ids_are_unique() {
        let mut ids: Vec<_> = SUGGESTION_RULES.iter().map(|rule| rule.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SUGGESTION_RULES.len());
    }
}
