//! GitHub REST client implementation using reqwest.

use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GitHubConfiguration};
use crate::ports::{CreatedRepository, GitHub, PullRequestDraft};

const USER_AGENT: &str = "Interviewing Repo Scaffolding";
const GITHUB_JSON: &str = "application/vnd.github+json";
const X_GITHUB_API_VERSION: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const DEFAULT_STATUS_MESSAGE: &str = "GitHub API request failed";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP transport for the GitHub REST API, scoped to one organization.
///
/// Every call performs a single request; failures are surfaced as
/// [`AppError::GitHubApi`] without retrying.
#[derive(Clone)]
pub struct HttpGitHubClient {
    token: String,
    organization: String,
    default_branch: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpGitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGitHubClient")
            .field("api_url", &self.api_url)
            .field("organization", &self.organization)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpGitHubClient {
    pub fn new(config: &GitHubConfiguration) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::GitHubApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self {
            token: config.token.clone(),
            organization: config.organization.clone(),
            default_branch: config.default_branch.clone(),
            api_url: config.api_url.clone(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        let raw = format!("{}/{}", self.api_url.as_str().trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|e| AppError::config_error(format!("Invalid GitHub URL {raw}: {e}")))
    }

    fn repo_path(&self, repo: &str) -> String {
        format!("repos/{}/{}", self.organization, repo)
    }

    fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String, AppError> {
        let mut request = self
            .client
            .request(method, self.endpoint(path)?)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_JSON)
            .header(X_GITHUB_API_VERSION, API_VERSION);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().map_err(|e| AppError::GitHubApi {
            message: format!("HTTP request failed: {}", e),
            status: None,
        })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            return Ok(body_text);
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::GitHubApi { message, status: Some(status.as_u16()) })
    }
}

fn parse_response<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| AppError::GitHubApi {
        message: format!("Failed to parse response: {}", e),
        status: None,
    })
}

/// `message` plus the first entry of `errors`, as GitHub reports validation failures.
fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    let message = parsed.get("message")?.as_str()?;

    let detail = parsed
        .get("errors")
        .and_then(|errors| errors.get(0))
        .and_then(|error| error.get("message"))
        .and_then(|detail| detail.as_str());

    Some(match detail {
        Some(detail) => format!("{message} ({detail})"),
        None => message.to_string(),
    })
}

#[derive(Debug, Serialize)]
struct CreateRepositoryRequest<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdateRepositoryRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    default_branch: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    archived: Option<bool>,
}

#[derive(Debug, Serialize)]
struct CollaboratorRequest<'a> {
    permission: &'a str,
}

#[derive(Debug, Serialize)]
struct IssueRequest<'a> {
    title: &'a str,
    body: &'a str,
}

#[derive(Debug, Serialize)]
struct PullRequestRequest<'a> {
    title: &'a str,
    body: &'a str,
    base: &'a str,
    head: &'a str,
}

#[derive(Debug, Deserialize)]
struct RepositoryResponse {
    ssh_url: String,
    html_url: String,
}

#[derive(Debug, Deserialize)]
struct HtmlUrlResponse {
    html_url: String,
}

impl GitHub for HttpGitHubClient {
    fn create_repository(&self, name: &str) -> Result<CreatedRepository, AppError> {
        let path = format!("orgs/{}/repos", self.organization);
        self.send(Method::POST, &path, Some(&CreateRepositoryRequest { name }))?;

        let update = UpdateRepositoryRequest {
            default_branch: Some(self.default_branch.as_str()),
            archived: None,
        };
        let body = self.send(Method::PATCH, &self.repo_path(name), Some(&update))?;
        let repository: RepositoryResponse = parse_response(&body)?;

        Ok(CreatedRepository { push_url: repository.ssh_url, html_url: repository.html_url })
    }

    fn add_collaborator(&self, repo: &str, username: &str) -> Result<(), AppError> {
        let path = format!("{}/collaborators/{}", self.repo_path(repo), username);
        self.send(Method::PUT, &path, Some(&CollaboratorRequest { permission: "admin" }))?;
        Ok(())
    }

    fn create_issue(&self, repo: &str, title: &str, body: &str) -> Result<String, AppError> {
        let path = format!("{}/issues", self.repo_path(repo));
        let response = self.send(Method::POST, &path, Some(&IssueRequest { title, body }))?;
        Ok(parse_response::<HtmlUrlResponse>(&response)?.html_url)
    }

    fn create_pull_request(
        &self,
        repo: &str,
        draft: &PullRequestDraft<'_>,
    ) -> Result<String, AppError> {
        let path = format!("{}/pulls", self.repo_path(repo));
        let request = PullRequestRequest {
            title: draft.title,
            body: draft.body,
            base: draft.base,
            head: draft.head,
        };
        let response = self.send(Method::POST, &path, Some(&request))?;
        Ok(parse_response::<HtmlUrlResponse>(&response)?.html_url)
    }

    fn archive_repository(&self, repo: &str) -> Result<(), AppError> {
        let update = UpdateRepositoryRequest { default_branch: None, archived: Some(true) };
        self.send(Method::PATCH, &self.repo_path(repo), Some(&update))?;
        Ok(())
    }

    fn delete_repository(&self, repo: &str) -> Result<(), AppError> {
        self.send::<()>(Method::DELETE, &self.repo_path(repo), None)?;
        Ok(())
    }
}
