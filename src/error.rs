use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while sending a prompt and reporting the response.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing configuration: {0} environment variable is required")]
    MissingConfig(String),

    #[error("Invalid configuration: {0} environment variable is set but is not valid unicode")]
    NonUnicodeConfig(String),

    #[error("Prompt file {} could not be read: {source}", .path.display())]
    PromptFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn missing_config(var: impl Into<String>) -> Self {
        Error::MissingConfig(var.into())
    }

    pub fn non_unicode_config(var: impl Into<String>) -> Self {
        Error::NonUnicodeConfig(var.into())
    }

    pub fn prompt_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::PromptFile {
            path: path.into(),
            source,
        }
    }

    /// Whether this error was raised before any network activity.
    pub fn is_startup(&self) -> bool {
        matches!(
            self,
            Error::MissingConfig(_) | Error::NonUnicodeConfig(_) | Error::PromptFile { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
