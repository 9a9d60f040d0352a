//! CLI Adapter.

use clap::{Parser, Subcommand};

use crate::app::commands::CreateRepoOutcome;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "interview-scaffolder")]
#[command(version)]
#[command(
    about = "Provision per-candidate interview repositories on GitHub",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create and seed the interview repository for a candidate
    #[clap(visible_alias = "c")]
    Create {
        /// GitHub username of the candidate
        github_username: String,
    },
    /// Archive a candidate's interview repository
    Archive {
        /// GitHub username of the candidate
        github_username: String,
    },
    /// Delete a candidate's interview repository
    Delete {
        /// GitHub username of the candidate
        github_username: String,
    },
}

/// Parse arguments, run the selected command, and exit non-zero on failure.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<bool, AppError> = match cli.command {
        Commands::Create { github_username } => run_create(&github_username),
        Commands::Archive { github_username } => crate::archive(&github_username).map(|_| true),
        Commands::Delete { github_username } => crate::delete(&github_username).map(|_| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `false` when the run was refused without creating anything.
fn run_create(username: &str) -> Result<bool, AppError> {
    match crate::create(username)? {
        CreateRepoOutcome::Provisioned(repository) => {
            for skipped in &repository.skipped_branches {
                eprintln!(
                    "⚠️  Skipped branch '{}' ({}): {}",
                    skipped.branch, skipped.title, skipped.reason
                );
            }
            println!("✅ Done! See repo at {}", repository.html_url);
            Ok(true)
        }
        CreateRepoOutcome::DirtyWorkingTree => {
            eprintln!("Working tree is dirty. Clean working tree and try again.");
            Ok(false)
        }
    }
}
