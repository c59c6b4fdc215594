use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::{Local, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, info_span, warn};

use mindtrack_cli::input::{build_document, ensure_required_answered, unanswered_required};
use mindtrack_cli::logging::redact_value;
use mindtrack_cli::settings::Settings;
use mindtrack_history::{Dashboard, HistoryStore, MockHistory};
use mindtrack_model::{AssessmentAnswers, AssessmentSubmission, CheckIn, QuestionBank, ResultData};
use mindtrack_scoring::{FailureNotice, FailureNotifier, ScoringEngine};

use crate::cli::{AssessArgs, CheckInArgs, DashboardArgs};
use crate::summary::{
    print_assessment_trend, print_check_in_trend, print_questions, print_result,
};

/// Prints scoring notices to stderr.
struct StderrNotifier;

impl FailureNotifier for StderrNotifier {
    fn notify(&self, notice: &FailureNotice) {
        eprintln!("warning: {}: {}", notice.title, notice.description);
    }
}

fn open_store(settings: &Settings, data_dir: Option<&Path>) -> Result<HistoryStore> {
    let dir = settings
        .resolve_data_dir(data_dir)
        .ok_or_else(|| anyhow!("could not determine a data directory; pass --data-dir"))?;
    HistoryStore::open(&dir).with_context(|| format!("open data directory {}", dir.display()))
}

pub fn run_assess(
    args: &AssessArgs,
    settings: &Settings,
    data_dir: Option<&Path>,
) -> Result<ResultData> {
    let span = info_span!("assess");
    let _guard = span.enter();

    let document = build_document(args.answers.as_deref(), &args.set)?;
    debug!(answers = %redact_value(&document.to_string()), "scoring answers");

    let bank = QuestionBank::standard();
    if args.save {
        ensure_required_answered(&bank, &document).context("assessment not saved")?;
    } else {
        let missing = unanswered_required(&bank, &document);
        if !missing.is_empty() {
            eprintln!(
                "warning: required questions unanswered ({}); neutral defaults are used",
                missing.join(", ")
            );
        }
    }

    let engine = ScoringEngine::with_notifier(StderrNotifier);
    let result = engine.calculate_json(&document);

    if args.save {
        match AssessmentAnswers::from_json_value(&document) {
            Ok(answers) => {
                let store = open_store(settings, data_dir)?;
                let submission =
                    AssessmentSubmission::new(answers, Utc::now()).with_results(result.clone());
                store
                    .save_assessment(&submission)
                    .context("save assessment")?;
                info!(dir = %store.dir().display(), "saved assessment");
            }
            Err(error) => warn!(%error, "answers were not saved"),
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("encode result")?
        );
    } else {
        print_result(&result);
    }
    Ok(result)
}

pub fn run_questions() {
    print_questions(&QuestionBank::standard());
}

pub fn run_check_in(args: &CheckInArgs, settings: &Settings, data_dir: Option<&Path>) -> Result<()> {
    let store = open_store(settings, data_dir)?;
    let today = Local::now().date_naive();

    // Unchanged fields carry over from an earlier check-in today.
    let mut check_in = match store.today_check_in(today)? {
        Some(existing) => {
            info!("updating today's check-in");
            existing
        }
        None => CheckIn::new(Utc::now()),
    };
    check_in.date = Utc::now();
    if let Some(mood) = args.mood {
        check_in.mood = mood;
    }
    if let Some(sleep) = args.sleep {
        check_in.sleep = sleep;
    }
    if let Some(energy) = args.energy {
        check_in.energy = energy;
    }
    if let Some(notes) = &args.notes {
        check_in.notes.clone_from(notes);
    }
    debug!(notes = %redact_value(&check_in.notes), "check-in notes");

    store.record_check_in(&check_in).context("record check-in")?;
    println!("Check-in recorded");
    println!("Your daily check-in has been saved successfully.");
    println!(
        "Mood {}/10, sleep {}/10, energy {}/10",
        check_in.mood, check_in.sleep, check_in.energy
    );
    Ok(())
}

pub fn run_dashboard(
    args: &DashboardArgs,
    settings: &Settings,
    data_dir: Option<&Path>,
) -> Result<()> {
    let store = open_store(settings, data_dir)?;

    let mock = if args.no_mock || !settings.dashboard.mock_history {
        MockHistory::default()
    } else {
        let mut rng = match args.seed.or(settings.dashboard.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        MockHistory::generate(Utc::now(), &mut rng)
    };

    let dashboard = Dashboard::load(&store, mock).context("load dashboard")?;
    if !dashboard.has_data {
        println!("No data available");
        println!("Complete an assessment to see your wellbeing trends: mindtrack assess --save");
        return Ok(());
    }

    print_assessment_trend(&dashboard.assessment_series());
    let check_ins = dashboard.check_in_series();
    if !check_ins.is_empty() {
        println!();
        print_check_in_trend(&check_ins);
    }
    Ok(())
}
