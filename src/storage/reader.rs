//! Log file reader

use std::fs;
use std::path::Path;

use crate::capture::LogEntry;
use crate::Result;

/// Load a persisted log file back into entries
///
/// # Errors
///
/// Returns error if the file cannot be read or is not a valid log
pub fn read_log(path: &Path) -> Result<Vec<LogEntry>> {
    let content = fs::read_to_string(path)?;
    let entries = serde_json::from_str(&content)?;
    Ok(entries)
}
