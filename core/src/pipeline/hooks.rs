// seriate/src/pipeline/hooks.rs

//! Per-run settings: the run mode and the two hooks a caller may plug into a run.
//!
//! - `derive_next_input` computes the next step's input from the previous carry
//!   and what the current step produced. Default: the step's success value
//!   becomes the next input.
//! - `transform_result` rewrites a successful step's output before it is
//!   recorded (fail-fast runs only). Default: identity.

use crate::core::control::RunMode;
use crate::core::step::StepDef;
use crate::error::Failure;
use std::fmt;
use std::sync::Arc;

/// Hook computing the next carry from the previous carry and the observed step outcome.
///
/// Fail-fast runs always pass `Ok(&stored_result)`. Settle-all runs pass the
/// step's raw success value or its failure.
pub type DeriveNextInput<T, E> = Arc<dyn Fn(T, Result<&T, &Failure<E>>) -> T + Send + Sync>;

/// Hook applied to a successful step's output before it is recorded (fail-fast only).
pub type TransformResult<T, E> = Arc<dyn Fn(T, &StepDef<T, E>) -> T + Send + Sync>;

/// Settings for one pipeline run.
pub struct RunOptions<T, E>
where
  T: Clone + Send + 'static,
  E: Send + 'static,
{
  pub(crate) mode: RunMode,
  pub(crate) derive_next_input: DeriveNextInput<T, E>,
  pub(crate) transform_result: Option<TransformResult<T, E>>,
}

impl<T, E> RunOptions<T, E>
where
  T: Clone + Send + 'static,
  E: Send + 'static,
{
  /// Defaults with settle-all mode.
  pub fn settle_all() -> Self {
    Self::default().mode(RunMode::SettleAll)
  }

  /// Defaults with fail-fast mode. Same as `RunOptions::default()`.
  pub fn fail_fast() -> Self {
    Self::default()
  }

  pub fn mode(mut self, mode: RunMode) -> Self {
    self.mode = mode;
    self
  }

  pub fn run_mode(&self) -> RunMode {
    self.mode
  }

  /// Replaces the carry derivation.
  pub fn derive_next_input<F>(mut self, derive_fn: F) -> Self
  where
    F: Fn(T, Result<&T, &Failure<E>>) -> T + Send + Sync + 'static,
  {
    self.derive_next_input = Arc::new(derive_fn);
    self
  }

  /// Sets the result transform. Ignored by settle-all runs.
  pub fn transform_result<F>(mut self, transform_fn: F) -> Self
  where
    F: Fn(T, &StepDef<T, E>) -> T + Send + Sync + 'static,
  {
    self.transform_result = Some(Arc::new(transform_fn));
    self
  }
}

/// The success value replaces the carry; a failure leaves the previous carry in place.
pub fn pass_result_through<T: Clone, E>(carry: T, observed: Result<&T, &Failure<E>>) -> T {
  match observed {
    Ok(result) => result.clone(),
    Err(_) => carry,
  }
}

impl<T, E> Default for RunOptions<T, E>
where
  T: Clone + Send + 'static,
  E: Send + 'static,
{
  fn default() -> Self {
    Self {
      mode: RunMode::FailFast,
      derive_next_input: Arc::new(pass_result_through::<T, E>),
      transform_result: None,
    }
  }
}

impl<T, E> Clone for RunOptions<T, E>
where
  T: Clone + Send + 'static,
  E: Send + 'static,
{
  fn clone(&self) -> Self {
    Self {
      mode: self.mode,
      derive_next_input: Arc::clone(&self.derive_next_input),
      transform_result: self.transform_result.clone(),
    }
  }
}

impl<T, E> fmt::Debug for RunOptions<T, E>
where
  T: Clone + Send + 'static,
  E: Send + 'static,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RunOptions")
      .field("mode", &self.mode)
      .field("transform_result_present", &self.transform_result.is_some())
      .finish()
  }
}
