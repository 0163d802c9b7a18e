//! Reproducibility capture: versions and CLI snapshot.

use serde::{Deserialize, Serialize};

/// Information for reproducing a sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReproducibilityInfo {
    /// merit version used.
    pub merit_version: String,
    /// CLI arguments used for this sweep.
    pub cli_args: Vec<String>,
    /// Schema version of the output format.
    pub schema_version: String,
}

impl ReproducibilityInfo {
    /// Capture the current context.
    pub fn capture(cli_args: &[String]) -> Self {
        Self {
            merit_version: env!("CARGO_PKG_VERSION").to_string(),
            cli_args: cli_args.to_vec(),
            schema_version: crate::SCHEMA_VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_records_args_and_version() {
        let args = vec!["merit".into(), "sweep".into(), "--config".into(), "exp.json".into()];
        let info = ReproducibilityInfo::capture(&args);
        assert!(!info.merit_version.is_empty());
        assert_eq!(info.cli_args.len(), 4);
        assert_eq!(info.schema_version, crate::SCHEMA_VERSION);
    }
}
