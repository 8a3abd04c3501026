use std::path::Path;

use thiserror::Error;

/// Domain-specific errors for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Not a KQL query: {query:?} ({reason})")]
    NotKql { query: String, reason: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage operation failed: {message}")]
    Storage { message: String },
}

impl CliError {
    pub fn not_kql(query: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NotKql {
            query: query.into(),
            reason: reason.into(),
        }
    }

    /// I/O failure on `path`, keeping the path in the message.
    pub fn storage_at(path: &Path, err: std::io::Error) -> Self {
        Self::Storage {
            message: format!("{}: {}", path.display(), io_message(&err)),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

fn io_message(err: &std::io::Error) -> String {
    match err.kind() {
        std::io::ErrorKind::NotFound => "File not found".to_string(),
        std::io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
        _ => err.to_string(),
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput {
            message: format!("JSON error: {}", err),
        }
    }
}

impl From<serde_yml::Error> for CliError {
    fn from(err: serde_yml::Error) -> Self {
        Self::InvalidInput {
            message: format!("YAML error: {}", err),
        }
    }
}
