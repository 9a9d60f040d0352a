use crate::domain::AppError;

/// Which local working tree a git command runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryKind {
    /// The scaffolder's own checkout.
    Main,
    /// Disposable checkout used to assemble and push branches.
    Scratch,
}

/// Result of one git invocation. A non-zero exit is data, never a panic or `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitOutcome {
    Success { stdout: String },
    Failure { stderr: String },
}

impl GitOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, GitOutcome::Failure { .. })
    }

    /// Treat a failed invocation of `git <args>` as fatal.
    pub fn into_result(self, args: &[&str]) -> Result<String, AppError> {
        match self {
            GitOutcome::Success { stdout } => Ok(stdout),
            GitOutcome::Failure { stderr } => {
                Err(AppError::Git { command: format!("git {}", args.join(" ")), details: stderr })
            }
        }
    }
}

pub trait Git {
    /// Execute an arbitrary git subcommand in the given working tree.
    fn execute(&self, args: &[&str], repository: RepositoryKind) -> GitOutcome;
}
