//! `create`: provision an interview repository for one candidate.
//!
//! Steps run strictly in order through [`CommandContext::execute_step`]:
//!
//! 1. refuse to run on a dirty main working tree
//! 2. stage the project source in the build folder
//! 3. create the remote repository
//! 4. push the staged snapshot as the default branch
//! 5. load and classify templates
//! 6. open one issue per issue template
//! 7. push one branch and open one pull request per pull request template
//! 8. invite the candidate
//!
//! Nothing already created remotely is rolled back when a later step fails.

use tracing::{info, warn};

use crate::app::AppContext;
use crate::app::commands::{CandidateArgs, CommandContext, DefaultBranchGuard, StepObserver};
use crate::domain::{
    AppError, IssueTemplate, PullRequestTemplate, Template, parse_template, partition_templates,
};
use crate::ports::{Git, GitHub, GitOutcome, ProjectFilesystem, PullRequestDraft, RepositoryKind};

const REMOTE: &str = "origin";
const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// How a `create` run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateRepoOutcome {
    Provisioned(ProvisionedRepository),
    /// The main working tree had uncommitted changes (or could not be inspected);
    /// nothing was created.
    DirtyWorkingTree,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedRepository {
    pub html_url: String,
    pub issue_urls: Vec<String>,
    pub pull_request_urls: Vec<String>,
    pub skipped_branches: Vec<SkippedBranch>,
}

/// Pull request template whose branch could not be pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBranch {
    pub branch: String,
    pub title: String,
    pub reason: String,
}

#[derive(Debug, Default)]
struct BranchPushReport {
    pull_request_urls: Vec<String>,
    skipped: Vec<SkippedBranch>,
}

pub fn execute<G, H, F, O>(
    app: &AppContext<G, H, F>,
    ctx: &mut CommandContext<CandidateArgs, O>,
) -> Result<CreateRepoOutcome, AppError>
where
    G: Git,
    H: GitHub,
    F: ProjectFilesystem,
    O: StepObserver,
{
    let layout = app.layout();
    let username = ctx.args().username.clone();
    let repo_with_org = format!("{}/{}", ctx.configuration().organization, username);
    let default_branch = ctx.configuration().default_branch.clone();

    let diff = ctx.execute_step("Checking local repository", |_| {
        Ok(app.git().execute(&["diff", "HEAD"], RepositoryKind::Main))
    })?;

    let dirty = match &diff {
        GitOutcome::Failure { .. } => true,
        GitOutcome::Success { stdout } => !stdout.is_empty(),
    };
    if dirty {
        return Ok(CreateRepoOutcome::DirtyWorkingTree);
    }

    ctx.execute_step("Moving source to build folder", |_| {
        let fs = app.filesystem();
        fs.create_dir_all(&layout.build())?;
        fs.reset_dir(&layout.scratch())?;
        fs.copy_dir(&layout.source(), &layout.scratch())
    })?;

    let created = ctx.execute_step(&format!("Creating repository {repo_with_org}"), |params| {
        app.github().create_repository(&params.args.username)
    })?;

    ctx.execute_step(
        &format!("Pushing current branch to {repo_with_org}/{default_branch}"),
        |params| {
            push_initial_snapshot(app.git(), &created.push_url, &params.configuration.default_branch)
        },
    )?;

    let templates = ctx.execute_step("Loading templates", |_| load_templates(app))?;
    let (issues, pulls) = partition_templates(templates);

    let issue_urls =
        ctx.execute_step(&format!("Creating {} issues from templates", issues.len()), |params| {
            create_issues(app.github(), &params.args.username, &issues)
        })?;

    let report =
        ctx.execute_step(&format!("Pushing {} PR branches to {REMOTE}", pulls.len()), |params| {
            push_pull_request_branches(
                app,
                &created.push_url,
                &params.args.username,
                &params.configuration.default_branch,
                &pulls,
            )
        })?;

    ctx.execute_step(&format!("Inviting {username} to repo"), |params| {
        app.github().add_collaborator(&params.args.username, &params.args.username)
    })?;

    info!("Done! See repo at {}", created.html_url);

    Ok(CreateRepoOutcome::Provisioned(ProvisionedRepository {
        html_url: created.html_url,
        issue_urls,
        pull_request_urls: report.pull_request_urls,
        skipped_branches: report.skipped,
    }))
}

fn run_git(git: &impl Git, args: &[&str], repository: RepositoryKind) -> Result<String, AppError> {
    git.execute(args, repository).into_result(args)
}

fn push_initial_snapshot(
    git: &impl Git,
    push_url: &str,
    default_branch: &str,
) -> Result<(), AppError> {
    let initial_branch = format!("--initial-branch={default_branch}");
    let refspec = format!("{default_branch}:{default_branch}");

    let commands: [&[&str]; 5] = [
        &["init", initial_branch.as_str()],
        &["remote", "add", REMOTE, push_url],
        &["add", "-A"],
        &["commit", "-m", INITIAL_COMMIT_MESSAGE],
        &["push", REMOTE, refspec.as_str()],
    ];

    for args in commands {
        run_git(git, args, RepositoryKind::Scratch)?;
    }

    Ok(())
}

fn load_templates<G: Git, H: GitHub, F: ProjectFilesystem>(
    app: &AppContext<G, H, F>,
) -> Result<Vec<Template>, AppError> {
    app.filesystem()
        .read_template_files(&app.layout().templates())?
        .into_iter()
        .map(|file| {
            let document = parse_template(&file.content)
                .map_err(|source| AppError::Template { path: file.path.clone(), source })?;
            Template::try_from(document)
        })
        .collect()
}

fn create_issues(
    github: &impl GitHub,
    repo: &str,
    issues: &[IssueTemplate],
) -> Result<Vec<String>, AppError> {
    let mut urls = Vec::with_capacity(issues.len());
    for issue in issues {
        let url = github.create_issue(repo, &issue.title, &issue.content)?;
        info!("{} [{}]", url, issue.title);
        urls.push(url);
    }
    Ok(urls)
}

/// Push every exercise branch and open its pull request.
///
/// A failing git command skips that template and moves on; a GitHub API
/// failure aborts the loop. Either way the main working tree ends on the
/// default branch.
fn push_pull_request_branches<G: Git, H: GitHub, F: ProjectFilesystem>(
    app: &AppContext<G, H, F>,
    push_url: &str,
    repo: &str,
    default_branch: &str,
    pulls: &[PullRequestTemplate],
) -> Result<BranchPushReport, AppError> {
    let guard = DefaultBranchGuard::new(app.git(), default_branch);
    let mut report = BranchPushReport::default();

    for pull in pulls {
        info!("{} [{}]", pull.branch, pull.title);

        match push_exercise_branch(app, &guard, push_url, pull) {
            Ok(()) => {}
            Err(AppError::Git { command, details }) => {
                warn!(branch = %pull.branch, "Skipping pull request: '{command}' failed: {details}");
                report.skipped.push(SkippedBranch {
                    branch: pull.branch.clone(),
                    title: pull.title.clone(),
                    reason: format!("{command}: {details}"),
                });
                continue;
            }
            Err(e) => return Err(e),
        }

        let draft = PullRequestDraft {
            title: &pull.title,
            body: &pull.content,
            base: default_branch,
            head: &pull.branch,
        };
        report.pull_request_urls.push(app.github().create_pull_request(repo, &draft)?);
    }

    Ok(report)
}

fn push_exercise_branch<G: Git, H: GitHub, F: ProjectFilesystem>(
    app: &AppContext<G, H, F>,
    guard: &DefaultBranchGuard<'_, G>,
    push_url: &str,
    pull: &PullRequestTemplate,
) -> Result<(), AppError> {
    let layout = app.layout();
    let git = app.git();

    app.filesystem().reset_dir(&layout.scratch())?;
    run_git(git, &["clone", push_url, "."], RepositoryKind::Scratch)?;
    run_git(git, &["checkout", "-b", &pull.branch], RepositoryKind::Scratch)?;

    // The exercise content lives on the same-named branch of the main tree.
    guard.switch_to(&pull.branch)?;
    app.filesystem().copy_dir(&layout.source(), &layout.scratch())?;

    run_git(git, &["add", "-A"], RepositoryKind::Scratch)?;
    run_git(git, &["commit", "-m", &pull.title], RepositoryKind::Scratch)?;
    run_git(git, &["push", "-u", REMOTE, &pull.branch], RepositoryKind::Scratch)?;

    Ok(())
}
