//! User settings loaded from `settings.toml`.
//!
//! Settings live in the platform config directory:
//! - macOS: ~/Library/Application Support/app.mindtrack.MindTrack/
//! - Windows: %APPDATA%/mindtrack/MindTrack/config/
//! - Linux: ~/.config/mindtrack/
//!
//! ```toml
//! [storage]
//! data_dir = "/home/me/.local/share/mindtrack"
//!
//! [dashboard]
//! seed = 42
//! mock_history = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "app";
const APP_ORG: &str = "mindtrack";
const APP_NAME: &str = "MindTrack";
const CONFIG_FILENAME: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Overrides the platform data directory.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Fixed seed for generated history; random when unset.
    pub seed: Option<u64>,
    /// Include generated history on the dashboard.
    pub mock_history: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            seed: None,
            mock_history: true,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
}

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Platform data directory used when no override is configured.
pub fn default_data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

impl Settings {
    /// Data directory: `flag`, then `[storage] data_dir`, then the platform default.
    pub fn resolve_data_dir(&self, flag: Option<&Path>) -> Option<PathBuf> {
        flag.map(Path::to_path_buf)
            .or_else(|| self.storage.data_dir.clone())
            .or_else(default_data_dir)
    }
}

/// Load settings from the platform config directory.
///
/// Returns default settings if the file is missing or unreadable, or if
/// the platform directory cannot be determined.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Settings::default();
    };
    load_settings_from(&path)
}

/// Load settings from `path`, falling back to defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No settings file found at {}, using defaults", path.display());
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Settings::default()
        }
    }
}
