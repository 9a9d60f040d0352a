use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::warn;

use crate::domain::ScaffoldLayout;
use crate::ports::{Git, GitOutcome, RepositoryKind};

/// Runs the `git` binary in one of the two local working trees.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    main_root: PathBuf,
    scratch_root: PathBuf,
}

impl GitCommandAdapter {
    pub fn new(layout: &ScaffoldLayout) -> Self {
        Self { main_root: layout.root().to_path_buf(), scratch_root: layout.scratch() }
    }

    fn working_dir(&self, repository: RepositoryKind) -> &Path {
        match repository {
            RepositoryKind::Main => &self.main_root,
            RepositoryKind::Scratch => &self.scratch_root,
        }
    }
}

impl Git for GitCommandAdapter {
    fn execute(&self, args: &[&str], repository: RepositoryKind) -> GitOutcome {
        let command_line = format!("git {}", args.join(" "));

        let output = match Command::new("git")
            .args(args)
            .current_dir(self.working_dir(repository))
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                let stderr = format!("Failed to execute git: {}", e);
                warn!(command = %command_line, ?repository, "{stderr}");
                return GitOutcome::Failure { stderr };
            }
        };

        if output.status.success() {
            return GitOutcome::Success {
                stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            };
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stderr = if stderr.is_empty() { "Unknown error".to_string() } else { stderr };
        warn!(command = %command_line, ?repository, "Git error: {stderr}");
        GitOutcome::Failure { stderr }
    }
}
