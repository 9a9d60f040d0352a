pub mod error;
pub mod github_config;
pub mod layout;
pub mod template;

pub use error::AppError;
pub use github_config::GitHubConfiguration;
pub use layout::ScaffoldLayout;
pub use template::{
    IssueTemplate, PullRequestTemplate, Template, TemplateDocument, TemplateError, TemplateType,
    parse_template, partition_templates,
};
