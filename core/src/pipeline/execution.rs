// seriate/src/pipeline/execution.rs

//! Contains the `Pipeline::run*` methods: the fail-fast and settle-all loops,
//! failure flattening and output arity normalization.

use crate::core::control::{RunMode, RunOutput};
use crate::core::step::StepDef;
use crate::error::{Failure, RunResult};
use crate::pipeline::definition::Pipeline;
use crate::pipeline::hooks::RunOptions;
use std::fmt;
use tracing::{event, instrument, span, Instrument, Level};

impl<T, E> Pipeline<T, E>
where
  T: Clone + Send + 'static,
  E: fmt::Display + fmt::Debug + Send + 'static,
{
  /// Runs every step in fail-fast mode with the default hooks.
  pub async fn run(&self, input: T) -> RunResult<T, E> {
    self.run_with(input, RunOptions::default()).await
  }

  /// Runs every step in settle-all mode with the default hooks.
  pub async fn run_settled(&self, input: T) -> RunResult<T, E> {
    self.run_with(input, RunOptions::settle_all()).await
  }

  /// Runs the steps in order, starting from `input`.
  ///
  /// In fail-fast mode the first failing step ends the run and its failure is
  /// returned unmodified. In settle-all mode every step runs; collected failures
  /// are returned once all steps were attempted, as `Failure::Single` when there
  /// is exactly one and as `Failure::Many` otherwise.
  ///
  /// On success, one recorded result comes back as `RunOutput::Single`, several
  /// as `RunOutput::Many`, and none (empty pipeline) as `RunOutput::Empty`.
  #[instrument(
    name = "Pipeline::run_with",
    skip_all,
    fields(
      carry_type = %std::any::type_name::<T>(),
      num_steps = self.steps.len(),
      mode = %options.mode,
    ),
    err(Display)
  )]
  pub async fn run_with(&self, input: T, options: RunOptions<T, E>) -> RunResult<T, E> {
    event!(Level::DEBUG, "Pipeline execution starting.");

    let output = match options.mode {
      RunMode::FailFast => self.run_fail_fast(input, &options).await?,
      RunMode::SettleAll => self.run_settle_all(input, &options).await?,
    };

    event!(Level::DEBUG, results = output.len(), "Pipeline execution completed successfully.");
    Ok(output)
  }

  async fn run_fail_fast(&self, input: T, options: &RunOptions<T, E>) -> RunResult<T, E> {
    let mut carry = input;
    let mut results = Vec::with_capacity(self.steps.len());

    for step_def in &self.steps {
      let raw = match call_step(step_def, carry.clone(), RunMode::FailFast).await {
        Ok(raw) => raw,
        Err(failure) => {
          event!(
            Level::ERROR,
            step_name = %step_def.name,
            step_index = step_def.index,
            error = %failure,
            "Step failed; aborting run."
          );
          return Err(failure);
        }
      };

      let stored = match &options.transform_result {
        Some(transform) => {
          event!(Level::TRACE, step_name = %step_def.name, "Applying result transform.");
          transform(raw, step_def)
        }
        None => raw,
      };

      carry = (options.derive_next_input)(carry, Ok(&stored));
      results.push(stored);
    }

    Ok(RunOutput::from_results(results))
  }

  async fn run_settle_all(&self, input: T, options: &RunOptions<T, E>) -> RunResult<T, E> {
    let mut carry = input;
    let mut results = Vec::new();
    let mut failures: Vec<E> = Vec::new();

    for step_def in &self.steps {
      let observed = call_step(step_def, carry.clone(), RunMode::SettleAll).await;
      carry = (options.derive_next_input)(carry, observed.as_ref());

      match observed {
        Ok(value) => results.push(value),
        Err(Failure::Single(err)) => {
          event!(
            Level::WARN,
            step_name = %step_def.name,
            step_index = step_def.index,
            error = %err,
            "Step failed; continuing."
          );
          failures.push(err);
        }
        Err(Failure::Many(errs)) => {
          event!(
            Level::WARN,
            step_name = %step_def.name,
            step_index = step_def.index,
            sub_failures = errs.len(),
            "Step failed with several errors; continuing."
          );
          failures.extend(errs);
        }
      }
    }

    if let Some(failure) = Failure::from_collected(failures) {
      event!(Level::DEBUG, failures = failure.len(), succeeded = results.len(), "Settled run had failures.");
      return Err(failure);
    }
    Ok(RunOutput::from_results(results))
  }
}

/// Awaits one step inside its own span.
async fn call_step<T, E>(step_def: &StepDef<T, E>, input: T, mode: RunMode) -> Result<T, Failure<E>>
where
  T: Send + 'static,
  E: Send + 'static,
{
  let step_span = span!(
    Level::INFO,
    "pipeline_step_execution",
    step_name = step_def.name.as_str(),
    step_index = step_def.index,
    mode = mode.as_str()
  );
  async {
    event!(Level::DEBUG, "Processing step.");
    let outcome = step_def.step.call(input).await;
    event!(Level::DEBUG, succeeded = outcome.is_ok(), "Step finished.");
    outcome
  }
  .instrument(step_span)
  .await
}
