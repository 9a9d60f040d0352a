mod git;
mod github;
mod project_filesystem;

pub use git::{Git, GitOutcome, RepositoryKind};
pub use github::{CreatedRepository, GitHub, PullRequestDraft};
pub use project_filesystem::{ProjectFilesystem, TemplateFile};
