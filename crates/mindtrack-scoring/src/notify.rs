//! Failure notification side channel.
//!
//! When scoring falls back to the default result the caller's user should be
//! told, but the fallback record itself carries no error. Callers plug in a
//! [`FailureNotifier`] to surface the notice however their front end does
//! (log line, stderr message, toast).

use std::sync::Mutex;

use serde::Serialize;
use tracing::warn;

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// A non-fatal, user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureNotice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl FailureNotice {
    /// Notice raised when scoring falls back to default values.
    pub fn scoring_fallback() -> Self {
        Self {
            title: "Error analyzing results".to_string(),
            description:
                "There was a problem processing your responses. Default values will be shown."
                    .to_string(),
            variant: NoticeVariant::Destructive,
        }
    }
}

/// Receives failure notices from the scoring engine.
pub trait FailureNotifier: Send + Sync {
    fn notify(&self, notice: &FailureNotice);
}

/// Logs notices at `warn` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl FailureNotifier for TracingNotifier {
    fn notify(&self, notice: &FailureNotice) {
        warn!(
            title = %notice.title,
            variant = ?notice.variant,
            "{}",
            notice.description
        );
    }
}

/// Drops every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl FailureNotifier for SilentNotifier {
    fn notify(&self, _notice: &FailureNotice) {}
}

/// Keeps notices for later inspection.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<FailureNotice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return every notice received so far.
    pub fn take(&self) -> Vec<FailureNotice> {
        match self.notices.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        self.notices.lock().map_or(0, |guard| guard.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FailureNotifier for RecordingNotifier {
    fn notify(&self, notice: &FailureNotice) {
        match self.notices.lock() {
            Ok(mut guard) => guard.push(notice.clone()),
            Err(poisoned) => poisoned.into_inner().push(notice.clone()),
        }
    }
}

impl<N: FailureNotifier + ?Sized> FailureNotifier for &N {
    fn notify(&self, notice: &FailureNotice) {
        (**self).notify(notice);
    }
}
