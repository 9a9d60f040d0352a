//! Interview templates: front matter parsing and issue / pull request classification.
//!
//! A template document is a YAML front matter block delimited by `---` lines,
//! followed by a free-text body:
//!
//! ```text
//! ---
//! title: Add pagination
//! type: pull_request
//! branch: feature/pagination
//! ---
//! Body of the pull request.
//! ```

use std::fmt;

use serde::Serialize;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::domain::AppError;

const DELIMITER: &str = "---";

/// Validation failure for a single template document.
///
/// Checks run in a fixed order (title, content, type); the first failing
/// check determines the variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Title not filled.")]
    MissingTitle,

    /// The body is empty or whitespace only.
    #[error("Content not filled.")]
    MissingContent,

    #[error("Invalid or empty template type{}.", .0.as_deref().map(|t| format!(" '{t}'")).unwrap_or_default())]
    InvalidType(Option<String>),

    #[error("Front matter is not a YAML mapping: {0}")]
    InvalidMetadata(String),

    #[error("Front matter opened with '---' is never closed")]
    UnterminatedMetadata,

    #[error("Template is not valid UTF-8")]
    InvalidEncoding,
}

/// Discriminator carried in the `type` front matter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateType {
    Issue,
    PullRequest,
}

impl TemplateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Issue => "issue",
            TemplateType::PullRequest => "pull_request",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "issue" => Some(TemplateType::Issue),
            "pull_request" => Some(TemplateType::PullRequest),
            _ => None,
        }
    }
}

/// A parsed template document.
///
/// `branch` is carried through unvalidated; [`Template::try_from`] enforces
/// that pull request templates name one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDocument {
    pub title: String,
    pub template_type: TemplateType,
    pub branch: Option<String>,
    pub content: String,
}

/// Parse one template document.
pub fn parse_template(document: &str) -> Result<TemplateDocument, TemplateError> {
    let document = document.strip_prefix('\u{feff}').unwrap_or(document);
    let (metadata, content) = split_front_matter(document)?;
    let metadata = match metadata {
        Some(block) => parse_metadata(block)?,
        None => Mapping::new(),
    };

    let title = field_text(&metadata, "title").ok_or(TemplateError::MissingTitle)?;

    if content.trim().is_empty() {
        return Err(TemplateError::MissingContent);
    }

    let template_type = match metadata.get("type") {
        Some(Value::String(tag)) => TemplateType::from_tag(tag)
            .ok_or_else(|| TemplateError::InvalidType(Some(tag.clone())))?,
        Some(other) => return Err(TemplateError::InvalidType(scalar_text(other))),
        None => return Err(TemplateError::InvalidType(None)),
    };

    Ok(TemplateDocument {
        title,
        template_type,
        branch: field_text(&metadata, "branch"),
        content: content.to_string(),
    })
}

/// Split a document into its front matter block (if any) and body.
fn split_front_matter(document: &str) -> Result<(Option<&str>, &str), TemplateError> {
    let Some(rest) = strip_delimiter_line(document) else {
        return Ok((None, document));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            return Ok((Some(&rest[..offset]), &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(TemplateError::UnterminatedMetadata)
}

fn strip_delimiter_line(document: &str) -> Option<&str> {
    let first_line_len = document.find('\n')? + 1;
    let first_line = document[..first_line_len].trim_end_matches(['\r', '\n']);
    (first_line == DELIMITER).then(|| &document[first_line_len..])
}

fn parse_metadata(block: &str) -> Result<Mapping, TemplateError> {
    let value: Value = serde_yaml::from_str(block)
        .map_err(|e| TemplateError::InvalidMetadata(e.to_string()))?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(TemplateError::InvalidMetadata(format!("found {}", kind_name(&other)))),
    }
}

fn field_text(metadata: &Mapping, key: &str) -> Option<String> {
    metadata.get(key).and_then(scalar_text).filter(|text| !text.is_empty())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[derive(Serialize)]
struct CanonicalFrontMatter<'a> {
    title: &'a str,
    #[serde(rename = "type")]
    template_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<&'a str>,
}

/// Renders the canonical document form accepted by [`parse_template`].
impl fmt::Display for TemplateDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let front_matter = serde_yaml::to_string(&CanonicalFrontMatter {
            title: &self.title,
            template_type: self.template_type.as_str(),
            branch: self.branch.as_deref(),
        })
        .map_err(|_| fmt::Error)?;

        write!(f, "{DELIMITER}\n{front_matter}{DELIMITER}\n{}", self.content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTemplate {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestTemplate {
    pub title: String,
    pub branch: String,
    pub content: String,
}

/// A classified template: exactly one GitHub issue or one pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    Issue(IssueTemplate),
    PullRequest(PullRequestTemplate),
}

impl TryFrom<TemplateDocument> for Template {
    type Error = AppError;

    fn try_from(document: TemplateDocument) -> Result<Self, Self::Error> {
        let TemplateDocument { title, template_type, branch, content } = document;

        match template_type {
            TemplateType::Issue => Ok(Template::Issue(IssueTemplate { title, content })),
            TemplateType::PullRequest => match branch {
                Some(branch) => {
                    Ok(Template::PullRequest(PullRequestTemplate { title, branch, content }))
                }
                None => Err(AppError::MissingBranch { title }),
            },
        }
    }
}

/// Split templates into issues and pull requests, preserving enumeration order.
pub fn partition_templates(
    templates: Vec<Template>,
) -> (Vec<IssueTemplate>, Vec<PullRequestTemplate>) {
    let mut issues = Vec::new();
    let mut pulls = Vec::new();

    for template in templates {
        match template {
            Template::Issue(issue) => issues.push(issue),
            Template::PullRequest(pull) => pulls.push(pull),
        }
    }

    (issues, pulls)
}
