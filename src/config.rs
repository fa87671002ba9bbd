//! # Configuration Module
//!
//! Handles data directory setup and the default catalog location for
//! MoodSync. The catalog lives in the platform-standard data directory:
//! - Linux: `~/.local/share/moodsync/`
//! - macOS: `~/Library/Application Support/moodsync/`
//! - Windows: `%APPDATA%\moodsync\`
//!
//! Every CLI command accepts an explicit override (`--data-file`, or the
//! `MOODSYNC_DATA_FILE` environment variable), which is how tests point the
//! store at a temporary directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Returns the platform-appropriate catalog file path.
///
/// Locates the standard data directory for the current platform and creates
/// the `moodsync` subdirectory if it doesn't exist. The catalog file is
/// named `songs.csv`.
///
/// # Errors
///
/// Fails when the system data directory cannot be determined or the
/// subdirectory cannot be created (permissions, read-only filesystem).
pub fn get_data_file_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join("songs.csv"))
}

/// Returns the MoodSync data directory itself, creating it if necessary.
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine system data directory. Please ensure your platform supports standard data directories."
        )
    })?;

    let moodsync_dir = data_dir.join("moodsync");
    fs::create_dir_all(&moodsync_dir).with_context(|| {
        format!(
            "Failed to create MoodSync data directory at {}. Please check file permissions.",
            moodsync_dir.display()
        )
    })?;

    Ok(moodsync_dir)
}

/// Configuration for runtime behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Path to the catalog CSV file
    pub data_file: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            // Same fallback the original deployment used: the working directory.
            data_file: get_data_file_path().unwrap_or_else(|_| PathBuf::from("songs.csv")),
        }
    }
}

#[allow(dead_code)]
impl RuntimeConfig {
    /// Create a new runtime configuration with the platform default path
    pub fn new() -> Result<Self> {
        Ok(Self {
            data_file: get_data_file_path()?,
        })
    }

    /// Create configuration with an explicit catalog path
    #[must_use]
    pub fn with_data_file(data_file: PathBuf) -> Self {
        Self { data_file }
    }
}
