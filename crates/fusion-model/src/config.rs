//! Application configuration.
//!
//! The original deployment hardcoded the shared reference directory and the
//! log filename as globals. Both components now take this structure at
//! construction instead, so tests can point them at temporary directories.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default name of the spreadsheet log, created in the working directory.
pub const DEFAULT_LOG_FILE: &str = "suivi_litiges.xlsx";

/// Configuration shared by the loader and the appender.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base directory holding the reference list files.
    pub reference_dir: PathBuf,
    /// Path of the spreadsheet log.
    pub log_path: PathBuf,
    /// Site name stamped into every record.
    pub site: String,
    /// Contact shown alongside missing-file warnings.
    pub contact: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reference_dir: PathBuf::from("data"),
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            site: "Fusion".to_string(),
            contact: "support.fusion@example.fr".to_string(),
        }
    }
}
