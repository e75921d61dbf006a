use std::path::PathBuf;

use roster_model::RosterReport;
use roster_validate::ValidationConfig;
use serde::Serialize;

/// Result of checking one file: a verdict, or the structural error that
/// prevented one.
#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<RosterReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileResult {
    pub fn checked(path: PathBuf, report: RosterReport) -> Self {
        Self {
            path,
            report: Some(report),
            error: None,
        }
    }

    pub fn failed(path: PathBuf, error: String) -> Self {
        Self {
            path,
            report: None,
            error: Some(error),
        }
    }

    /// True only for a roster that was read and passed every rule.
    pub fn is_valid(&self) -> bool {
        self.report.as_ref().is_some_and(|report| report.valid)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub config: ValidationConfig,
    pub files: Vec<FileResult>,
}

impl BatchResult {
    pub fn valid_count(&self) -> usize {
        self.files.iter().filter(|file| file.is_valid()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.files
            .iter()
            .filter(|file| file.report.as_ref().is_some_and(|report| !report.valid))
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.files.iter().filter(|file| file.error.is_some()).count()
    }

    /// Any file that is not a valid roster.
    pub fn has_failures(&self) -> bool {
        self.files.iter().any(|file| !file.is_valid())
    }

    /// Process exit code: 0 when every roster is valid, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_failures())
    }
}
