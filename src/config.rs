//! Configuration types for Tapwire

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Result, TapwireError};

/// Default URL substring that starts a capture session
pub const DEFAULT_START_MARKER: &str = "https://prodapi.metweb.ie/observations/dublin/today";

/// Default URL substring that stops a capture session
pub const DEFAULT_STOP_MARKER: &str = "https://maps.google.com/maps-api-v3/api/js/59/8/map.js";

/// Default directory the log file is written to
pub const DEFAULT_OUTPUT_DIR: &str = "network_logs";

/// Default log file name
pub const DEFAULT_OUTPUT_FILENAME: &str = "network_log2.json";

/// Capture filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// URL substring that begins a session (substring containment, not prefix)
    #[serde(default = "default_start_marker")]
    pub start_marker: String,
    /// URL substring that ends a session
    #[serde(default = "default_stop_marker")]
    pub stop_marker: String,
    /// Directory the log file is written to, created on demand
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Log file name within `output_dir`
    #[serde(default = "default_output_filename")]
    pub output_filename: String,
}

fn default_start_marker() -> String {
    DEFAULT_START_MARKER.to_string()
}

fn default_stop_marker() -> String {
    DEFAULT_STOP_MARKER.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_output_filename() -> String {
    DEFAULT_OUTPUT_FILENAME.to_string()
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            start_marker: default_start_marker(),
            stop_marker: default_stop_marker(),
            output_dir: default_output_dir(),
            output_filename: default_output_filename(),
        }
    }
}

impl CaptureConfig {
    /// Load configuration from TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TapwireError::Config(format!("Failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| TapwireError::Config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns error if configuration is invalid
    pub fn validate(&self) -> Result<()> {
        if self.start_marker.is_empty() {
            return Err(TapwireError::Config(
                "start_marker cannot be empty".to_string(),
            ));
        }

        if self.stop_marker.is_empty() {
            return Err(TapwireError::Config(
                "stop_marker cannot be empty".to_string(),
            ));
        }

        validate_filename(&self.output_filename)?;

        // output_dir is not required to exist; persist creates it on demand.

        Ok(())
    }

    /// Full path of the log file (`output_dir` joined with `output_filename`)
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_filename)
    }
}

/// Validate a log file name
///
/// # Errors
///
/// Returns error if the name is empty, hidden, or escapes the output directory
fn validate_filename(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(TapwireError::Config(
            "output_filename cannot be empty".to_string(),
        ));
    }

    if name.len() > 255 {
        return Err(TapwireError::Config(format!(
            "output_filename too long: {} > 255",
            name.len()
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(TapwireError::Config(
            "output_filename cannot contain path separators".to_string(),
        ));
    }

    if name.starts_with('.') {
        return Err(TapwireError::Config(
            "output_filename cannot start with dot".to_string(),
        ));
    }

    if name.contains('\0') {
        return Err(TapwireError::Config(
            "output_filename cannot contain null bytes".to_string(),
        ));
    }

    if name.contains("..") {
        return Err(TapwireError::Config(
            "output_filename cannot contain '..'".to_string(),
        ));
    }

    Ok(())
}
