//! `archive`: archive an existing candidate repository.

use tracing::info;

use crate::app::commands::{CandidateArgs, CommandContext, StepObserver};
use crate::domain::AppError;
use crate::ports::GitHub;

pub fn execute<O: StepObserver>(
    github: &impl GitHub,
    ctx: &mut CommandContext<CandidateArgs, O>,
) -> Result<(), AppError> {
    let name = format!(
        "Archiving repository {}/{}",
        ctx.configuration().organization,
        ctx.args().username
    );

    ctx.execute_step(&name, |params| github.archive_repository(&params.args.username))?;

    info!("Done; repo archived!");
    Ok(())
}
