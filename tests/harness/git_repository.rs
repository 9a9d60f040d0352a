use std::path::Path;

/// Run `git` in `dir` and return trimmed stdout, failing the test on a non-zero exit.
pub(crate) fn git(dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to spawn git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub(crate) fn configure_user(repo_dir: &Path) {
    git(repo_dir, &["config", "user.email", "test@example.com"]);
    git(repo_dir, &["config", "user.name", "Test User"]);
}

pub(crate) fn init_bare_repo(path: &Path) {
    std::fs::create_dir_all(path).expect("create bare repo dir");
    git(path, &["init", "--bare", "--initial-branch=main"]);
}

pub(crate) fn commit_all(repo_dir: &Path, message: &str) {
    git(repo_dir, &["add", "-A"]);
    git(repo_dir, &["commit", "-m", message]);
}

/// Branch names present in a (bare) repository.
pub(crate) fn branches(repo_dir: &Path) -> Vec<String> {
    git(repo_dir, &["for-each-ref", "--format=%(refname:short)", "refs/heads"])
        .lines()
        .map(str::to_string)
        .collect()
}

/// Content of `path` at `rev` in `repo_dir`.
pub(crate) fn show(repo_dir: &Path, rev: &str, path: &str) -> String {
    git(repo_dir, &["show", &format!("{rev}:{path}")])
}
