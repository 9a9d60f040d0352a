//! interview-scaffolder: provision per-candidate interview repositories on GitHub.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{GitCommandAdapter, HttpGitHubClient, LocalProjectFilesystem};
use app::AppContext;
use app::commands::{CandidateArgs, CommandContext, archive_repo, create_repo, delete_repo};

pub use app::commands::{CreateRepoOutcome, ProvisionedRepository, SkippedBranch};
pub use domain::{AppError, GitHubConfiguration, ScaffoldLayout};

/// Provision the interview repository for `username` from the current directory.
pub fn create(username: &str) -> Result<CreateRepoOutcome, AppError> {
    let configuration = GitHubConfiguration::from_env()?;
    let layout = ScaffoldLayout::new(std::env::current_dir()?);
    let git = GitCommandAdapter::new(&layout);
    let github = HttpGitHubClient::new(&configuration)?;
    let app = AppContext::new(layout, git, github, LocalProjectFilesystem::new());

    let mut ctx = CommandContext::new(configuration, candidate(username));
    create_repo::execute(&app, &mut ctx)
}

/// Archive the interview repository of `username`.
pub fn archive(username: &str) -> Result<(), AppError> {
    let configuration = GitHubConfiguration::from_env()?;
    let github = HttpGitHubClient::new(&configuration)?;

    let mut ctx = CommandContext::new(configuration, candidate(username));
    archive_repo::execute(&github, &mut ctx)?;
    println!("✅ Archived {}/{}", ctx.configuration().organization, username);
    Ok(())
}

/// Delete the interview repository of `username`.
pub fn delete(username: &str) -> Result<(), AppError> {
    let configuration = GitHubConfiguration::from_env()?;
    let github = HttpGitHubClient::new(&configuration)?;

    let mut ctx = CommandContext::new(configuration, candidate(username));
    delete_repo::execute(&github, &mut ctx)?;
    println!("✅ Deleted {}/{}", ctx.configuration().organization, username);
    Ok(())
}

fn candidate(username: &str) -> CandidateArgs {
    CandidateArgs { username: username.to_string() }
}
