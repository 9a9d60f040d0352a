mod fake_git;
mod fake_github;

use std::cell::RefCell;
use std::time::Duration;

use url::Url;

use crate::app::commands::StepObserver;
use crate::domain::GitHubConfiguration;

pub use fake_git::FakeGit;
pub use fake_github::{FakeGitHub, RecordedPullRequest};

pub fn test_configuration() -> GitHubConfiguration {
    GitHubConfiguration {
        token: "test-token".into(),
        organization: "acme".into(),
        default_branch: "main".into(),
        api_url: Url::parse("https://api.github.com").unwrap(),
    }
}

/// Keeps step observations for assertions.
#[derive(Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<(&'static str, usize, String)>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<(&'static str, usize, String)> {
        self.events.borrow().clone()
    }

    pub fn started_names(&self) -> Vec<(usize, String)> {
        self.events
            .borrow()
            .iter()
            .filter(|(kind, _, _)| *kind == "started")
            .map(|(_, step, name)| (*step, name.clone()))
            .collect()
    }
}

impl StepObserver for RecordingObserver {
    fn started(&self, step: usize, name: &str) {
        self.events.borrow_mut().push(("started", step, name.to_string()));
    }

    fn finished(&self, step: usize, name: &str, _elapsed: Duration) {
        self.events.borrow_mut().push(("finished", step, name.to_string()));
    }
}
