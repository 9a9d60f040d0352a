//! Sequential step executor shared by every command.
//!
//! Each step is numbered, narrated and timed. A failing step propagates its
//! error to the caller unchanged and does not advance the counter, so no
//! later step runs.

use std::time::{Duration, Instant};

use tracing::info;

use crate::domain::{AppError, GitHubConfiguration};

/// Shared inputs handed to every step body.
#[derive(Debug)]
pub struct StepParams<'a, A> {
    pub configuration: &'a GitHubConfiguration,
    pub args: &'a A,
}

/// Receives the started/finished observations of each step.
pub trait StepObserver {
    fn started(&self, step: usize, name: &str);
    fn finished(&self, step: usize, name: &str, elapsed: Duration);
}

/// Narrates steps through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl StepObserver for TracingObserver {
    fn started(&self, step: usize, name: &str) {
        info!(step, "[{step}] {name}: Started.");
    }

    fn finished(&self, step: usize, name: &str, elapsed: Duration) {
        info!(step, elapsed_ms = elapsed.as_millis() as u64, "[{step}] {name}: Finished.");
    }
}

/// Per-invocation state of one command run.
#[derive(Debug)]
pub struct CommandContext<A, O = TracingObserver> {
    configuration: GitHubConfiguration,
    args: A,
    step_number: usize,
    observer: O,
}

impl<A> CommandContext<A> {
    pub fn new(configuration: GitHubConfiguration, args: A) -> Self {
        Self::with_observer(configuration, args, TracingObserver)
    }
}

impl<A, O: StepObserver> CommandContext<A, O> {
    pub fn with_observer(configuration: GitHubConfiguration, args: A, observer: O) -> Self {
        Self { configuration, args, step_number: 1, observer }
    }

    pub fn configuration(&self) -> &GitHubConfiguration {
        &self.configuration
    }

    pub fn args(&self) -> &A {
        &self.args
    }

    /// Number the next step will be reported under.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Run `body` as the next numbered step and return its output unchanged.
    pub fn execute_step<T>(
        &mut self,
        name: &str,
        body: impl FnOnce(StepParams<'_, A>) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let step = self.step_number;
        self.observer.started(step, name);
        let started_at = Instant::now();

        let output = body(StepParams { configuration: &self.configuration, args: &self.args })?;

        self.observer.finished(step, name, started_at.elapsed());
        self.step_number += 1;

        Ok(output)
    }
}
