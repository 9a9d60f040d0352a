use crate::domain::AppError;

/// Repository freshly created under the configured organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRepository {
    /// URL git pushes to.
    pub push_url: String,
    /// Browser URL.
    pub html_url: String,
}

/// Pull request to open from `head` into `base`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestDraft<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub base: &'a str,
    pub head: &'a str,
}

/// GitHub operations scoped to the configured organization.
pub trait GitHub {
    /// Create `name` under the organization and make the configured default branch its default.
    fn create_repository(&self, name: &str) -> Result<CreatedRepository, AppError>;

    /// Grant `username` admin access to `repo`.
    fn add_collaborator(&self, repo: &str, username: &str) -> Result<(), AppError>;

    /// Returns the issue's web URL.
    fn create_issue(&self, repo: &str, title: &str, body: &str) -> Result<String, AppError>;

    /// Returns the pull request's web URL.
    fn create_pull_request(&self, repo: &str, draft: &PullRequestDraft<'_>)
    -> Result<String, AppError>;

    fn archive_repository(&self, repo: &str) -> Result<(), AppError>;

    fn delete_repository(&self, repo: &str) -> Result<(), AppError>;
}
