use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::template::TemplateError;

/// Library-wide error type for scaffolder operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required environment variable is absent or empty.
    #[error("Environment variable {0} cannot be empty.")]
    MissingEnvironmentVariable(String),

    /// Configuration value is present but unusable.
    #[error("{0}")]
    Configuration(String),

    /// A template document failed validation.
    #[error("Invalid template {}: {source}", .path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },

    /// Pull request template without a branch to open the PR from.
    #[error("Branch parameter is required for pull requests (template '{title}')")]
    MissingBranch { title: String },

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    Git { command: String, details: String },

    /// GitHub REST API request failed.
    #[error("GitHub API error{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    GitHubApi { message: String, status: Option<u16> },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

}
