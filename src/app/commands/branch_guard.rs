use tracing::error;

use crate::domain::AppError;
use crate::ports::{Git, GitOutcome, RepositoryKind};

/// Keeps the main working tree off stale exercise branches.
///
/// While alive, the guard may move the main working tree onto exercise
/// branches; dropping it always checks out the default branch again, whether
/// the scope ended normally or through an early return.
pub struct DefaultBranchGuard<'a, G: Git + ?Sized> {
    git: &'a G,
    default_branch: &'a str,
}

impl<'a, G: Git + ?Sized> DefaultBranchGuard<'a, G> {
    pub fn new(git: &'a G, default_branch: &'a str) -> Self {
        Self { git, default_branch }
    }

    /// Check out `branch` on the main working tree.
    pub fn switch_to(&self, branch: &str) -> Result<(), AppError> {
        let args = ["checkout", branch];
        self.git.execute(&args, RepositoryKind::Main).into_result(&args)?;
        Ok(())
    }
}

impl<G: Git + ?Sized> Drop for DefaultBranchGuard<'_, G> {
    fn drop(&mut self) {
        let outcome = self.git.execute(&["checkout", self.default_branch], RepositoryKind::Main);
        if let GitOutcome::Failure { stderr } = outcome {
            error!(
                branch = self.default_branch,
                "Could not return the main working tree to the default branch: {stderr}"
            );
        }
    }
}
