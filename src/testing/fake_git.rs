use std::sync::Mutex;

use crate::ports::{Git, GitOutcome, RepositoryKind};

/// Records every git invocation; succeeds with empty output unless told otherwise.
#[derive(Default)]
pub struct FakeGit {
    pub commands: Mutex<Vec<(RepositoryKind, String)>>,
    failures: Mutex<Vec<(RepositoryKind, String)>>,
    responses: Mutex<Vec<(RepositoryKind, String, String)>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any command whose argument line starts with `prefix`.
    pub fn fail_on(&self, prefix: &str, repository: RepositoryKind) {
        self.failures.lock().unwrap().push((repository, prefix.to_string()));
    }

    /// Answer commands starting with `prefix` with `stdout`.
    pub fn respond(&self, prefix: &str, repository: RepositoryKind, stdout: &str) {
        self.responses.lock().unwrap().push((repository, prefix.to_string(), stdout.to_string()));
    }

    pub fn commands_in(&self, repository: RepositoryKind) -> Vec<String> {
        self.commands
            .lock()
            .unwrap()
            .iter()
            .filter(|(repo, _)| *repo == repository)
            .map(|(_, line)| line.clone())
            .collect()
    }
}

impl Git for FakeGit {
    fn execute(&self, args: &[&str], repository: RepositoryKind) -> GitOutcome {
        let line = args.join(" ");
        self.commands.lock().unwrap().push((repository, line.clone()));

        let fails = self
            .failures
            .lock()
            .unwrap()
            .iter()
            .any(|(repo, prefix)| *repo == repository && line.starts_with(prefix.as_str()));
        if fails {
            return GitOutcome::Failure { stderr: format!("fake failure: git {line}") };
        }

        let stdout = self
            .responses
            .lock()
            .unwrap()
            .iter()
            .find(|(repo, prefix, _)| *repo == repository && line.starts_with(prefix.as_str()))
            .map(|(_, _, stdout)| stdout.clone())
            .unwrap_or_default();

        GitOutcome::Success { stdout }
    }
}
