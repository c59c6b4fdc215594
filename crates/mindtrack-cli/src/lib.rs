//! CLI library components for MindTrack.

pub mod input;
pub mod logging;
pub mod settings;
