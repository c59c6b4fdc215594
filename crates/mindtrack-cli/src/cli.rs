//! CLI argument definitions for MindTrack.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mindtrack",
    version,
    about = "MindTrack - self-assessment scoring and daily wellbeing check-ins",
    long_about = "Score a mental-wellbeing questionnaire, record daily check-ins and\n\
                  review trends.\n\n\
                  Results are indicative only and are not a diagnosis."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow answer values and notes to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Directory holding stored assessments and check-ins.
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a set of assessment answers.
    Assess(AssessArgs),

    /// List the assessment questions.
    Questions,

    /// Record today's mood, sleep and energy.
    CheckIn(CheckInArgs),

    /// Show assessment and check-in trends.
    Dashboard(DashboardArgs),
}

#[derive(Parser)]
pub struct AssessArgs {
    /// JSON answer document (`-` for stdin).
    #[arg(long = "answers", value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Set a single answer, e.g. `--set mood=7 --set "appetite=Below average"`.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Store the submission as the latest assessment.
    #[arg(long = "save")]
    pub save: bool,

    /// Print the result record as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CheckInArgs {
    /// Mood rating.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub mood: Option<u8>,

    /// Sleep quality rating.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub sleep: Option<u8>,

    /// Energy rating.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub energy: Option<u8>,

    /// Free-text notes.
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Parser)]
pub struct DashboardArgs {
    /// Seed for generated history (overrides the settings file).
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Leave out generated history.
    #[arg(long = "no-mock")]
    pub no_mock: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_in_ratings_are_bounded() {
        assert!(Cli::try_parse_from(["mindtrack", "check-in", "--mood", "11"]).is_err());
        let cli = Cli::try_parse_from(["mindtrack", "check-in", "--mood", "7"]).unwrap();
        let Command::CheckIn(args) = cli.command else {
            panic!("expected check-in");
        };
        assert_eq!(args.mood, Some(7));
        assert_eq!(args.sleep, None);
    }

    #[test]
    fn repeated_set_flags_collect() {
        let cli = Cli::try_parse_from([
            "mindtrack",
            "--data-dir",
            "/tmp/mt",
            "assess",
            "--set",
            "mood=4",
            "--set",
            "appetite=Poor",
            "--save",
        ])
        .unwrap();
        let Command::Assess(args) = cli.command else {
            panic!("expected assess");
        };
        assert_eq!(args.set, vec!["mood=4", "appetite=Poor"]);
        assert!(args.save);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/mt")));
    }
}
