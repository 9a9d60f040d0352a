pub mod archive_repo;
mod branch_guard;
pub mod create_repo;
pub mod delete_repo;
mod step;

pub use branch_guard::DefaultBranchGuard;
pub use create_repo::{CreateRepoOutcome, ProvisionedRepository, SkippedBranch};
pub use step::{CommandContext, StepObserver, StepParams, TracingObserver};

/// Arguments shared by every candidate-scoped command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateArgs {
    /// GitHub username of the candidate; also the repository name.
    pub username: String,
}
