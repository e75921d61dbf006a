//! Structural errors raised while loading, parsing, or resolving a roster.
//!
//! These never describe business-rule failures. A roster that parses but
//! breaks a rule is reported through its validation messages instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that prevent a roster from being validated at all.
#[derive(Debug, Error)]
pub enum RosterError {
    // === File System Errors ===
    /// Roster file not found.
    #[error("roster file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the roster file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Roster file exceeds the size limit.
    #[error("roster file {path} is {size} bytes, exceeding the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Roster file uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Roster file is not valid UTF-8.
    #[error("roster file {path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },

    // === PSV Parsing Errors ===
    /// A record has a different field count than the header.
    #[error("line {line}: expected {expected} fields, found {found}")]
    Parse { line: u64, expected: u64, found: u64 },

    /// Any other failure reported by the delimited reader.
    #[error("failed to parse roster: {message}")]
    Csv { message: String },

    // === Column Errors ===
    /// The roster has no header row.
    #[error("roster has no header row")]
    MissingHeader,

    /// A required column label is absent from the header row.
    #[error("column '{label}' not found in roster header")]
    MissingColumn { label: String },
}

impl RosterError {
    /// Shorthand for a missing column error.
    pub fn missing_column(label: impl Into<String>) -> Self {
        Self::MissingColumn {
            label: label.into(),
        }
    }
}

/// Result type for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RosterError::FileNotFound {
            path: PathBuf::from("/path/to/roster.psv"),
        };
        assert_eq!(err.to_string(), "roster file not found: /path/to/roster.psv");
    }

    #[test]
    fn test_parse_error_display() {
        let err = RosterError::Parse {
            line: 2,
            expected: 2,
            found: 1,
        };
        assert_eq!(err.to_string(), "line 2: expected 2 fields, found 1");
    }

    #[test]
    fn test_missing_column_display() {
        let err = RosterError::missing_column("Token4");
        assert_eq!(err.to_string(), "column 'Token4' not found in roster header");
    }
}
