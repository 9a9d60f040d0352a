pub mod git_command;
pub mod github_http;
pub mod local_filesystem;

pub use git_command::GitCommandAdapter;
pub use github_http::HttpGitHubClient;
pub use local_filesystem::LocalProjectFilesystem;
