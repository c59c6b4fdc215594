//! Local history for MindTrack.
//!
//! - [`HistoryStore`]: JSON documents in a data directory
//! - [`MockHistory`]: generated trend data
//! - [`Dashboard`]: chart series built from both

pub mod dashboard;
pub mod error;
pub mod mock;
pub mod store;

pub use dashboard::{
    AssessmentPoint, CheckInPoint, Dashboard, assessment_series, chart_label, check_in_series,
};
pub use error::{HistoryError, Result};
pub use mock::MockHistory;
pub use store::HistoryStore;
