//! Tests for mindtrack-model types.

use mindtrack_model::{
    AnswerValue, AppetiteLevel, AssessmentAnswers, AssessmentSubmission, CheckIn, QuestionBank,
    QuestionKind,
};

#[test]
fn question_bank_has_eight_questions() {
    let bank = QuestionBank::standard();
    assert_eq!(bank.len(), 8);
    let required: Vec<_> = bank.iter().filter(|q| q.required).map(|q| q.id).collect();
    assert_eq!(required.len(), 7);
    assert!(!required.contains(&"stressors"));
}

#[test]
fn appetite_question_offers_all_levels() {
    let bank = QuestionBank::standard();
    let appetite = bank.get("appetite").expect("appetite question");
    let QuestionKind::Radio { options } = appetite.kind else {
        panic!("appetite should be a radio question");
    };
    assert_eq!(options, AppetiteLevel::LABELS.as_slice());
    assert!(appetite.accepts(&AnswerValue::from("Excessive")));
    assert!(!appetite.accepts(&AnswerValue::from("Huge")));
}

#[test]
fn missing_required_reports_in_question_order() {
    let bank = QuestionBank::standard();
    let answers = AssessmentAnswers::new()
        .with("sleep", 6)
        .with("appetite", "Sometimes")
        .with("mood", 11);
    assert_eq!(
        bank.missing_required(&answers),
        vec!["mood", "anxiety", "energy", "appetite", "interest", "concentration"]
    );
}

#[test]
fn submission_round_trips_through_json() {
    let answers = AssessmentAnswers::from_json_str(
        r#"{"mood": 6, "appetite": "Normal", "stressors": "work deadlines"}"#,
    )
    .expect("parse answers");
    let submission = AssessmentSubmission::new(answers, "2024-05-02T10:30:00Z".parse().unwrap());

    let json = serde_json::to_string(&submission).expect("serialize submission");
    let round: AssessmentSubmission = serde_json::from_str(&json).expect("deserialize submission");

    assert_eq!(round, submission);
    assert_eq!(round.answers.text("stressors"), Some("work deadlines"));
}

#[test]
fn check_in_local_day() {
    let check_in = CheckIn::new("2024-05-02T12:00:00Z".parse().unwrap());
    let day = check_in.local_day();
    assert!(check_in.is_same_day(day));
    assert!(!check_in.is_same_day(day.succ_opt().unwrap()));
}
