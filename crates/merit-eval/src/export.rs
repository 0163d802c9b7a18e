//! JSON export of experiment reports.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EvalError, EvalResult};
use crate::report::ExperimentReport;

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Whether to pretty-print JSON output.
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Serialize a report to a JSON string.
pub fn to_json(report: &ExperimentReport, config: &ExportConfig) -> EvalResult<String> {
    if config.pretty {
        serde_json::to_string_pretty(report).map_err(EvalError::from)
    } else {
        serde_json::to_string(report).map_err(EvalError::from)
    }
}

/// Write a report to a JSON file.
pub fn to_file(report: &ExperimentReport, path: &Path, config: &ExportConfig) -> EvalResult<()> {
    let json = to_json(report, config)?;
    std::fs::write(path, json)
        .map_err(|e| EvalError::Io(format!("failed to write {}: {}", path.display(), e)))
}
