use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CreatedRepository, GitHub, PullRequestDraft};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPullRequest {
    pub repo: String,
    pub title: String,
    pub body: String,
    pub base: String,
    pub head: String,
}

/// In-memory GitHub that records every call.
#[derive(Default)]
pub struct FakeGitHub {
    pub repositories: Mutex<Vec<String>>,
    pub issues: Mutex<Vec<(String, String, String)>>,
    pub pull_requests: Mutex<Vec<RecordedPullRequest>>,
    pub collaborators: Mutex<Vec<(String, String)>>,
    pub archived: Mutex<Vec<String>>,
    pub deleted: Mutex<Vec<String>>,
    pub fail_repository_creation: Mutex<bool>,
    pub fail_pull_requests: Mutex<bool>,
    /// Reject every issue once this many have been created.
    pub fail_issues_after: Mutex<Option<usize>>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue_titles(&self) -> Vec<String> {
        self.issues.lock().unwrap().iter().map(|(_, title, _)| title.clone()).collect()
    }

    pub fn pull_request_heads(&self) -> Vec<String> {
        self.pull_requests.lock().unwrap().iter().map(|pr| pr.head.clone()).collect()
    }
}

impl GitHub for FakeGitHub {
    fn create_repository(&self, name: &str) -> Result<CreatedRepository, AppError> {
        if *self.fail_repository_creation.lock().unwrap() {
            return Err(AppError::GitHubApi {
                message: "name already exists on this account".into(),
                status: Some(422),
            });
        }
        self.repositories.lock().unwrap().push(name.to_string());
        Ok(CreatedRepository {
            push_url: format!("git@github.com:acme/{name}.git"),
            html_url: format!("https://github.com/acme/{name}"),
        })
    }

    fn add_collaborator(&self, repo: &str, username: &str) -> Result<(), AppError> {
        self.collaborators.lock().unwrap().push((repo.to_string(), username.to_string()));
        Ok(())
    }

    fn create_issue(&self, repo: &str, title: &str, body: &str) -> Result<String, AppError> {
        let mut issues = self.issues.lock().unwrap();
        if *self.fail_issues_after.lock().unwrap() == Some(issues.len()) {
            return Err(AppError::GitHubApi { message: "Issues are disabled".into(), status: Some(410) });
        }
        issues.push((repo.to_string(), title.to_string(), body.to_string()));
        Ok(format!("https://github.com/acme/{repo}/issues/{}", issues.len()))
    }

    fn create_pull_request(
        &self,
        repo: &str,
        draft: &PullRequestDraft<'_>,
    ) -> Result<String, AppError> {
        if *self.fail_pull_requests.lock().unwrap() {
            return Err(AppError::GitHubApi { message: "Validation Failed".into(), status: Some(422) });
        }
        let mut pulls = self.pull_requests.lock().unwrap();
        pulls.push(RecordedPullRequest {
            repo: repo.to_string(),
            title: draft.title.to_string(),
            body: draft.body.to_string(),
            base: draft.base.to_string(),
            head: draft.head.to_string(),
        });
        Ok(format!("https://github.com/acme/{repo}/pull/{}", pulls.len()))
    }

    fn archive_repository(&self, repo: &str) -> Result<(), AppError> {
        self.archived.lock().unwrap().push(repo.to_string());
        Ok(())
    }

    fn delete_repository(&self, repo: &str) -> Result<(), AppError> {
        self.deleted.lock().unwrap().push(repo.to_string());
        Ok(())
    }
}
