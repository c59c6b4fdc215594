//! History store round trips against a temporary data directory.

use std::fs;

use chrono::{DateTime, TimeDelta, Utc};
use mindtrack_history::{HistoryError, HistoryStore};
use mindtrack_model::{AssessmentAnswers, AssessmentSubmission, CheckIn};
use mindtrack_scoring::calculate_results;
use tempfile::tempdir;

fn at(timestamp: &str) -> DateTime<Utc> {
    timestamp.parse().unwrap()
}

#[test]
fn open_creates_directory() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("data").join("mindtrack");
    let store = HistoryStore::open(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(store.dir(), nested);
}

#[test]
fn saved_assessment_is_latest() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::open(dir.path()).unwrap();

    let first = AssessmentSubmission::new(
        AssessmentAnswers::new().with("mood", 3),
        at("2024-03-01T09:00:00Z"),
    );
    let answers = AssessmentAnswers::new()
        .with("mood", 8)
        .with("appetite", "Normal")
        .with("stressors", "deadlines");
    let second = AssessmentSubmission::new(answers.clone(), at("2024-03-02T09:00:00Z"))
        .with_results(calculate_results(&answers));

    store.save_assessment(&first).unwrap();
    store.save_assessment(&second).unwrap();

    assert_eq!(store.latest_assessment().unwrap(), Some(second));
}

#[test]
fn stored_submission_layout() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::open(dir.path()).unwrap();
    store
        .save_assessment(&AssessmentSubmission::new(
            AssessmentAnswers::new().with("appetite", "Poor"),
            at("2024-03-01T09:00:00Z"),
        ))
        .unwrap();

    let raw = fs::read_to_string(dir.path().join("assessment.json")).unwrap();
    let document: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(document["answers"]["appetite"], "Poor");
    assert_eq!(document["date"], "2024-03-01T09:00:00Z");
    assert!(document.get("results").is_none());
}

#[test]
fn check_ins_accumulate_in_order() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::open(dir.path()).unwrap();

    let mut monday = CheckIn::new(at("2024-03-04T12:00:00Z"));
    monday.mood = 3;
    let mut tuesday = CheckIn::new(at("2024-03-05T12:00:00Z"));
    tuesday.energy = 8;
    tuesday.notes = "walked to work".to_string();

    store.record_check_in(&monday).unwrap();
    store.record_check_in(&tuesday).unwrap();

    assert_eq!(store.check_in_history().unwrap(), vec![monday, tuesday]);
}

#[test]
fn today_check_in_only_matches_same_day() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::open(dir.path()).unwrap();

    let check_in = CheckIn::new(Utc::now());
    store.record_check_in(&check_in).unwrap();

    let today = check_in.local_day();
    assert_eq!(store.today_check_in(today).unwrap(), Some(check_in.clone()));

    let tomorrow = (check_in.date + TimeDelta::days(1))
        .with_timezone(&chrono::Local)
        .date_naive();
    assert_eq!(store.today_check_in(tomorrow).unwrap(), None);
}

#[test]
fn corrupt_document_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::open(dir.path()).unwrap();
    fs::write(dir.path().join("check_in_history.json"), "{not json").unwrap();

    let error = store.check_in_history().unwrap_err();
    match &error {
        HistoryError::Parse { path, .. } => {
            assert!(path.ends_with("check_in_history.json"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(error.suggestion().is_some());
}

#[test]
fn failed_check_in_keeps_today_record() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::open(dir.path()).unwrap();

    let mut morning = CheckIn::new(Utc::now());
    morning.mood = 4;
    store.record_check_in(&morning).unwrap();
    fs::write(dir.path().join("check_in_history.json"), "not json").unwrap();

    let mut evening = morning.clone();
    evening.mood = 9;
    let error = store.record_check_in(&evening).unwrap_err();
    assert!(matches!(error, HistoryError::Parse { .. }), "{error:?}");

    let today = store.today_check_in(morning.local_day()).unwrap();
    assert_eq!(today.map(|check_in| check_in.mood), Some(4));
}
