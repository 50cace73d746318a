//! Error handling module for mview

use thiserror::Error;

/// Main error type for mview operations
#[derive(Error, Debug)]
pub enum MviewError {
    /// No input paths were given on the command line
    #[error("missing media files")]
    MissingMediaFiles,

    /// The prober exited non-zero or wrote to its error stream
    #[error("exit code {}: {}", display_code(.code), .stderr)]
    ProbeFailed { code: Option<i32>, stderr: String },

    /// The prober did not finish within the configured bound
    #[error("probing {path} timed out after {timeout:?}")]
    ProbeTimeout {
        path: String,
        timeout: std::time::Duration,
    },

    /// The prober process could not be started
    #[error("failed to run {program}: {source}")]
    ProbeSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The prober's standard output was not the expected JSON document
    #[error("invalid probe output: {0}")]
    InvalidProbeOutput(#[from] serde_json::Error),

    /// A field required for display is absent from the probe result
    #[error("probe result is missing field `{field}`")]
    MissingField { field: String },

    /// A numeric field could not be parsed
    #[error("invalid value for `{field}`: {value:?}")]
    InvalidNumber { field: String, value: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}

impl MviewError {
    /// Build a [`MviewError::MissingField`]
    pub fn missing(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }

    /// Build a [`MviewError::InvalidNumber`]
    pub fn invalid_number(field: &str, value: &str) -> Self {
        Self::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Result type alias for mview operations
pub type MviewResult<T> = std::result::Result<T, MviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_media_files_message() {
        assert_eq!(MviewError::MissingMediaFiles.to_string(), "missing media files");
    }

    #[test]
    fn test_probe_failed_message() {
        let err = MviewError::ProbeFailed {
            code: Some(1),
            stderr: "No such file or directory".to_string(),
        };
        assert_eq!(err.to_string(), "exit code 1: No such file or directory");

        let killed = MviewError::ProbeFailed {
            code: None,
            stderr: String::new(),
        };
        assert_eq!(killed.to_string(), "exit code none: ");
    }
}
