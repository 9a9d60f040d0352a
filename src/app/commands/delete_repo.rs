//! `delete`: remove a candidate repository, e.g. after a partially failed `create`.

use tracing::info;

use crate::app::commands::{CandidateArgs, CommandContext, StepObserver};
use crate::domain::AppError;
use crate::ports::GitHub;

pub fn execute<O: StepObserver>(
    github: &impl GitHub,
    ctx: &mut CommandContext<CandidateArgs, O>,
) -> Result<(), AppError> {
    let name = format!(
        "Deleting repository {}/{}",
        ctx.configuration().organization,
        ctx.args().username
    );

    ctx.execute_step(&name, |params| github.delete_repository(&params.args.username))?;

    info!("Done; repo deleted!");
    Ok(())
}
