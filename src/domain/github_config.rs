//! GitHub connection settings sourced from the environment.

use std::fmt;

use url::Url;

use crate::domain::AppError;

pub const DEFAULT_BRANCH_ENV: &str = "DEFAULT_BRANCH";
pub const ORGANIZATION_NAME_ENV: &str = "ORGANIZATION_NAME";
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const GITHUB_API_URL_ENV: &str = "GITHUB_API_URL";

const DEFAULT_API_URL: &str = "https://api.github.com";

/// Immutable for the duration of a run.
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubConfiguration {
    pub token: String,
    pub organization: String,
    pub default_branch: String,
    pub api_url: Url,
}

impl fmt::Debug for GitHubConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubConfiguration")
            .field("token", &"[REDACTED]")
            .field("organization", &self.organization)
            .field("default_branch", &self.default_branch)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl GitHubConfiguration {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| AppError::MissingEnvironmentVariable(name.to_string()))
        };

        let default_branch = required(DEFAULT_BRANCH_ENV)?;
        let organization = required(ORGANIZATION_NAME_ENV)?;
        let token = required(GITHUB_TOKEN_ENV)?;

        let raw_url = lookup(GITHUB_API_URL_ENV)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&raw_url).map_err(|e| {
            AppError::config_error(format!("{GITHUB_API_URL_ENV} '{raw_url}' is not a valid URL: {e}"))
        })?;

        Ok(Self { token, organization, default_branch, api_url })
    }
}
