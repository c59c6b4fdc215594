//! Scoring engine behavior on representative answer sets.

use mindtrack_model::{AssessmentAnswers, ResultData};
use mindtrack_scoring::{
    GENERAL_SUGGESTIONS, PROFESSIONAL_HELP, RecordingNotifier, RuleInputs, SUGGESTION_RULES,
    ScoringEngine, ScoringError, SummaryBand, calculate_results, calculate_results_from_json,
    fallback_result, indices, triggered_rules, try_calculate,
};
use serde_json::json;

fn answers(
    mood: i32,
    sleep: i32,
    anxiety: i32,
    energy: i32,
    interest: i32,
    concentration: i32,
    appetite: &str,
) -> AssessmentAnswers {
    AssessmentAnswers::new()
        .with("mood", mood)
        .with("sleep", sleep)
        .with("anxiety", anxiety)
        .with("energy", energy)
        .with("interest", interest)
        .with("concentration", concentration)
        .with("appetite", appetite)
}

fn rule_inputs(answers: &AssessmentAnswers) -> RuleInputs {
    let fields = mindtrack_scoring::extract::extract(answers).unwrap();
    RuleInputs {
        fields,
        indices: indices::compute(&fields),
    }
}

#[test]
fn midpoint_answers() {
    let result = calculate_results(&answers(5, 5, 5, 5, 5, 5, "Normal"));

    assert_eq!(result.anxiety_level, 5);
    // ((10 - 5) + 5 + (10 - 5)) / 3 = 5
    assert_eq!(result.stress_level, 5);
    assert_eq!(result.depression_risk, 5);
    // 36 / 7 = 5.14
    assert_eq!(result.wellness_score, 5);
    assert_eq!(result.suggestions, GENERAL_SUGGESTIONS.to_vec());
    assert_eq!(result.summary, SummaryBand::Moderate.text());
}

#[test]
fn empty_answers_match_midpoint() {
    let empty = calculate_results(&AssessmentAnswers::new());
    let midpoint = calculate_results(&answers(5, 5, 5, 5, 5, 5, "Normal"));
    assert_eq!(empty, midpoint);
}

#[test]
fn positive_answers_land_in_top_band() {
    let result = calculate_results(&answers(9, 9, 1, 9, 9, 9, "Above average"));

    // 62 / 7 = 8.86
    assert_eq!(result.wellness_score, 9);
    assert_eq!(result.stress_level, 1);
    assert_eq!(result.anxiety_level, 1);
    assert_eq!(result.depression_risk, 1);
    assert_eq!(result.summary, SummaryBand::Thriving.text());
    assert_eq!(result.suggestions, GENERAL_SUGGESTIONS.to_vec());
}

#[test]
fn maximal_answers_clamp_to_ten() {
    let result = calculate_results(&answers(10, 10, 0, 10, 10, 10, "Above average"));
    // 68 / 7 = 9.71
    assert_eq!(result.wellness_score, 10);
    assert_eq!(result.anxiety_level, 1);
    assert_eq!(result.summary, SummaryBand::Thriving.text());
}

#[test]
fn distressed_answers_land_in_bottom_band() {
    let input = answers(1, 1, 10, 1, 1, 1, "Poor");
    let result = calculate_results(&input);

    // 7 / 7 = 1
    assert_eq!(result.wellness_score, 1);
    // 36 / 4 = 9
    assert_eq!(result.depression_risk, 9);
    // 28 / 3 = 9.33
    assert_eq!(result.stress_level, 9);
    assert_eq!(result.anxiety_level, 10);
    assert_eq!(result.summary, SummaryBand::Difficult.text());

    // Every threshold rule fires; the first five suggestions win.
    let fired: Vec<_> = triggered_rules(&rule_inputs(&input))
        .iter()
        .map(|rule| rule.id)
        .collect();
    assert_eq!(
        fired,
        vec![
            "sleep",
            "anxiety",
            "mood",
            "energy",
            "interest",
            "depression-risk",
            "stress"
        ]
    );
    assert_eq!(
        result.suggestions,
        vec![
            SUGGESTION_RULES[0].suggestions[0],
            SUGGESTION_RULES[0].suggestions[1],
            SUGGESTION_RULES[1].suggestions[0],
            SUGGESTION_RULES[1].suggestions[1],
            SUGGESTION_RULES[2].suggestions[0],
        ]
    );
}

#[test]
fn extreme_answers_clamp_depression_to_ten() {
    let result = calculate_results(&answers(0, 0, 10, 0, 0, 0, "Poor"));
    assert_eq!(result.depression_risk, 10);
    assert_eq!(result.stress_level, 10);
    assert_eq!(result.wellness_score, 1);
}

#[test]
fn referral_survives_truncation_when_few_rules_fire() {
    let input = AssessmentAnswers::new().with("mood", 0).with("interest", 0);
    let result = calculate_results(&input);

    // (10 + 10 + 5 + 5) / 4 = 7.5
    assert_eq!(result.depression_risk, 8);
    assert_eq!(result.suggestions.len(), 5);
    assert_eq!(result.suggestions[4], PROFESSIONAL_HELP);
}

#[test]
fn each_rule_fires_independently() {
    let cases = [
        ("sleep", AssessmentAnswers::new().with("sleep", 4)),
        ("anxiety", AssessmentAnswers::new().with("anxiety", 7)),
        ("mood", AssessmentAnswers::new().with("mood", 4)),
        ("energy", AssessmentAnswers::new().with("energy", 4)),
        ("interest", AssessmentAnswers::new().with("interest", 4)),
    ];
    for (id, input) in cases {
        let fired: Vec<_> = triggered_rules(&rule_inputs(&input))
            .iter()
            .map(|rule| rule.id)
            .collect();
        assert_eq!(fired, vec![id], "rule {id}");

        let result = calculate_results(&input);
        let rule = SUGGESTION_RULES.iter().find(|rule| rule.id == id).unwrap();
        assert_eq!(&result.suggestions[..2], &rule.suggestions[..]);
        assert_eq!(&result.suggestions[2..], &GENERAL_SUGGESTIONS[..]);
    }
}

#[test]
fn stress_rule_reads_derived_index() {
    // sleep and energy are at threshold so their own rules stay quiet:
    // ((10 - 5) + 10 + (10 - 5)) / 3 = 6.67 -> 7, not above 7.
    let input = AssessmentAnswers::new().with("anxiety", 10);
    let fired: Vec<_> = triggered_rules(&rule_inputs(&input))
        .iter()
        .map(|rule| rule.id)
        .collect();
    assert_eq!(fired, vec!["anxiety"]);

    // ((10 - 3) + 10 + (10 - 4)) / 3 = 7.67 -> 8
    let input = AssessmentAnswers::new()
        .with("anxiety", 10)
        .with("sleep", 3)
        .with("energy", 4);
    let fired: Vec<_> = triggered_rules(&rule_inputs(&input))
        .iter()
        .map(|rule| rule.id)
        .collect();
    assert_eq!(fired, vec!["sleep", "anxiety", "energy", "stress"]);
}

#[test]
fn stressors_text_is_ignored() {
    let with_text = answers(6, 7, 3, 6, 7, 6, "Normal").with("stressors", "exams and rent");
    let without = answers(6, 7, 3, 6, 7, 6, "Normal");
    assert_eq!(calculate_results(&with_text), calculate_results(&without));
}

#[test]
fn json_document_is_scored() {
    let result = calculate_results_from_json(&json!({
        "mood": 9,
        "sleep": 9,
        "anxiety": 1,
        "energy": 9,
        "interest": 9,
        "concentration": 9,
        "appetite": "Above average",
        "stressors": ""
    }));
    assert_eq!(result.wellness_score, 9);
}

#[test]
fn non_object_document_falls_back() {
    let engine = ScoringEngine::with_notifier(RecordingNotifier::new());
    for document in [json!([5, 5, 5]), json!("mood=5"), json!(null), json!(7)] {
        assert_eq!(engine.calculate_json(&document), fallback_result());
    }
    assert_eq!(engine.notifier().len(), 4);
}

#[test]
fn non_finite_answer_is_reported_by_try_calculate() {
    let input = answers(5, 5, 5, 5, 5, 5, "Normal").with("sleep", f64::NEG_INFINITY);
    assert_eq!(
        try_calculate(&input),
        Err(ScoringError::NonFinite { field: "sleep" })
    );
}

#[test]
fn fallback_literals() {
    let expected = ResultData {
        stress_level: 5,
        anxiety_level: 5,
        depression_risk: 4,
        wellness_score: 6,
        suggestions: vec![
            "Practice regular mindfulness meditation".to_string(),
            "Ensure you're getting 7-9 hours of sleep".to_string(),
            "Stay physically active with regular exercise".to_string(),
            "Consider talking to a mental health professional".to_string(),
        ],
        summary: "We had trouble analyzing your specific responses, but we've provided some general wellness recommendations that may be helpful.".to_string(),
    };
    let engine = ScoringEngine::with_notifier(RecordingNotifier::new());
    let result = engine.calculate(&AssessmentAnswers::new().with("concentration", f64::NAN));
    assert_eq!(result, expected);
}

#[test]
fn calls_are_idempotent() {
    let input = answers(3, 8, 6, 2, 4, 7, "Below average");
    let first = calculate_results(&input);
    let second = calculate_results(&input);
    assert_eq!(first, second);
}
