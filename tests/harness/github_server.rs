//! mockito stand-in for the GitHub REST API.

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;

pub(crate) const ORGANIZATION: &str = "acme";

pub(crate) struct GitHubServer {
    server: ServerGuard,
}

impl GitHubServer {
    pub(crate) fn new() -> Self {
        Self { server: Server::new() }
    }

    pub(crate) fn url(&self) -> String {
        self.server.url()
    }

    /// `POST /orgs/acme/repos` followed by the default-branch `PATCH`,
    /// answering with `push_url` as the repository's `ssh_url`.
    pub(crate) fn expect_repository(&mut self, name: &str, push_url: &str) -> (Mock, Mock) {
        let repository = json!({
            "name": name,
            "ssh_url": push_url,
            "html_url": format!("https://github.com/{ORGANIZATION}/{name}"),
        })
        .to_string();

        let create = self
            .server
            .mock("POST", format!("/orgs/{ORGANIZATION}/repos").as_str())
            .match_header("authorization", "Bearer test-token")
            .match_body(Matcher::PartialJson(json!({ "name": name })))
            .with_status(201)
            .with_body(&repository)
            .create();
        let update = self
            .server
            .mock("PATCH", format!("/repos/{ORGANIZATION}/{name}").as_str())
            .match_body(Matcher::PartialJson(json!({ "default_branch": "main" })))
            .with_status(200)
            .with_body(&repository)
            .create();
        (create, update)
    }

    pub(crate) fn reject_repository(&mut self, message: &str) -> Mock {
        self.server
            .mock("POST", format!("/orgs/{ORGANIZATION}/repos").as_str())
            .with_status(422)
            .with_body(json!({ "message": message }).to_string())
            .create()
    }

    pub(crate) fn expect_issue(&mut self, repo: &str, title: &str, number: u32) -> Mock {
        self.server
            .mock("POST", format!("/repos/{ORGANIZATION}/{repo}/issues").as_str())
            .match_body(Matcher::PartialJson(json!({ "title": title })))
            .with_status(201)
            .with_body(
                json!({
                    "html_url": format!("https://github.com/{ORGANIZATION}/{repo}/issues/{number}")
                })
                .to_string(),
            )
            .create()
    }

    pub(crate) fn expect_pull_request(&mut self, repo: &str, head: &str, number: u32) -> Mock {
        self.server
            .mock("POST", format!("/repos/{ORGANIZATION}/{repo}/pulls").as_str())
            .match_body(Matcher::PartialJson(json!({ "head": head, "base": "main" })))
            .with_status(201)
            .with_body(
                json!({
                    "html_url": format!("https://github.com/{ORGANIZATION}/{repo}/pull/{number}")
                })
                .to_string(),
            )
            .create()
    }

    pub(crate) fn expect_collaborator(&mut self, repo: &str, username: &str) -> Mock {
        self.server
            .mock(
                "PUT",
                format!("/repos/{ORGANIZATION}/{repo}/collaborators/{username}").as_str(),
            )
            .match_body(Matcher::PartialJson(json!({ "permission": "admin" })))
            .with_status(201)
            .with_body("{}")
            .create()
    }

    pub(crate) fn expect_archive(&mut self, repo: &str) -> Mock {
        self.server
            .mock("PATCH", format!("/repos/{ORGANIZATION}/{repo}").as_str())
            .match_body(Matcher::PartialJson(json!({ "archived": true })))
            .with_status(200)
            .with_body(json!({ "name": repo, "archived": true }).to_string())
            .create()
    }

    pub(crate) fn expect_delete(&mut self, repo: &str) -> Mock {
        self.server
            .mock("DELETE", format!("/repos/{ORGANIZATION}/{repo}").as_str())
            .with_status(204)
            .create()
    }

    /// Repository creation that must never happen.
    pub(crate) fn forbid_repository_creation(&mut self) -> Mock {
        self.server
            .mock("POST", format!("/orgs/{ORGANIZATION}/repos").as_str())
            .with_status(201)
            .expect(0)
            .create()
    }
}
