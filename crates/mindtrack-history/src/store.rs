//! JSON document store in a local data directory.
//!
//! Layout:
//! - `assessment.json`: the latest [`AssessmentSubmission`]
//! - `today_check_in.json`: the most recent [`CheckIn`]
//! - `check_in_history.json`: every [`CheckIn`], oldest first
//!
//! A missing file reads as "no data".

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use mindtrack_model::{AssessmentSubmission, CheckIn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{HistoryError, Result};

pub const ASSESSMENT_FILE: &str = "assessment.json";
pub const TODAY_CHECK_IN_FILE: &str = "today_check_in.json";
pub const CHECK_IN_HISTORY_FILE: &str = "check_in_history.json";

/// Handle to a data directory.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    dir: PathBuf,
}

impl HistoryStore {
    /// Open (creating if needed) the store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| HistoryError::Io {
            operation: "create directory",
            path: dir.clone(),
            source: e,
        })?;
        debug!(dir = %dir.display(), "opened history store");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Replace the stored submission.
    pub fn save_assessment(&self, submission: &AssessmentSubmission) -> Result<()> {
        self.write_json(ASSESSMENT_FILE, "assessment", submission)
    }

    pub fn latest_assessment(&self) -> Result<Option<AssessmentSubmission>> {
        self.read_json(ASSESSMENT_FILE)
    }

    /// Append `check_in` to the history and store it as today's record.
    ///
    /// The history is written first. When reading or writing it fails, the
    /// stored record for today is left untouched.
    pub fn record_check_in(&self, check_in: &CheckIn) -> Result<()> {
        let mut history = self.check_in_history()?;
        history.push(check_in.clone());
        self.write_json(CHECK_IN_HISTORY_FILE, "check-in history", &history)?;
        self.write_json(TODAY_CHECK_IN_FILE, "check-in", check_in)?;

        info!(
            mood = check_in.mood,
            sleep = check_in.sleep,
            energy = check_in.energy,
            total = history.len(),
            "recorded check-in"
        );
        Ok(())
    }

    /// The stored check-in, if it was made on `today` (local date).
    pub fn today_check_in(&self, today: NaiveDate) -> Result<Option<CheckIn>> {
        let check_in: Option<CheckIn> = self.read_json(TODAY_CHECK_IN_FILE)?;
        Ok(check_in.filter(|check_in| check_in.is_same_day(today)))
    }

    /// Every recorded check-in, oldest first.
    pub fn check_in_history(&self) -> Result<Vec<CheckIn>> {
        Ok(self.read_json(CHECK_IN_HISTORY_FILE)?.unwrap_or_default())
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>> {
        let path = self.path(file);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(HistoryError::Io {
                    operation: "read",
                    path,
                    source: e,
                });
            }
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| HistoryError::Parse { path, source })
    }

    /// Write `value` via temp file + rename.
    fn write_json<T: Serialize + ?Sized>(
        &self,
        file: &str,
        record: &'static str,
        value: &T,
    ) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value)
            .map_err(|source| HistoryError::Serialize { record, source })?;

        let path = self.path(file);
        let temp_path = path.with_extension("json.tmp");

        let mut handle = File::create(&temp_path).map_err(|e| HistoryError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        handle.write_all(&bytes).map_err(|e| HistoryError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;
        handle.sync_all().map_err(|e| HistoryError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &path).map_err(|e| HistoryError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.clone(),
            source: e,
        })?;

        debug!(path = %path.display(), bytes = bytes.len(), "saved {record}");
        Ok(())
    }
}
