// seriate/src/pipeline/definition.rs

//! Contains the `Pipeline<T, E>` struct definition and its construction.

use crate::core::step::{Step, StepDef};
use crate::error::StepResult;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tracing::{event, Level};

/// An ordered, immutable sequence of steps run one after another.
///
/// `T` is the carry type: each step receives a `T` and produces a `T`.
/// `E` is the error type carried by `Failure<E>`.
///
/// The step list is fixed once the pipeline is built. `run*` methods take
/// `&self`, so one pipeline can be shared (e.g. behind an `Arc`) and run any
/// number of times; every run keeps its own accumulators.
pub struct Pipeline<T, E>
where
  T: Clone + Send + 'static,
  E: Send + 'static,
{
  pub(crate) steps: Vec<StepDef<T, E>>,
}

impl<T, E> Pipeline<T, E>
where
  T: Clone + Send + 'static,
  E: Send + 'static,
{
  /// Creates a pipeline from named steps, in the order given.
  pub fn new<S: Into<String>>(steps: Vec<(S, Arc<dyn Step<T, E>>)>) -> Self {
    let steps: Vec<StepDef<T, E>> = steps
      .into_iter()
      .enumerate()
      .map(|(index, (name, step))| StepDef::new(index, name, step))
      .collect();
    event!(Level::DEBUG, num_steps = steps.len(), "Pipeline created.");
    Self { steps }
  }

  /// A pipeline with no steps. Running it always succeeds with `RunOutput::Empty`.
  pub fn empty() -> Self {
    Self { steps: Vec::new() }
  }

  /// Appends a closure step.
  pub fn step<F, Fut>(self, name: impl Into<String>, step_fn: F) -> Self
  where
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = StepResult<T, E>> + Send + 'static,
  {
    self.step_impl(name, step_fn)
  }

  /// Appends any `Step` implementation.
  pub fn step_impl(mut self, name: impl Into<String>, step: impl Step<T, E> + 'static) -> Self {
    let index = self.steps.len();
    let name: String = name.into();
    event!(Level::TRACE, step_name = %name, step_index = index, "Step appended.");
    self.steps.push(StepDef::new(index, name, Arc::new(step)));
    self
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }
}

impl<T, E> Default for Pipeline<T, E>
where
  T: Clone + Send + 'static,
  E: Send + 'static,
{
  fn default() -> Self {
    Self::empty()
  }
}

impl<T, E> fmt::Debug for Pipeline<T, E>
where
  T: Clone + Send + 'static,
  E: Send + 'static,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Pipeline").field("steps", &self.steps).finish()
  }
}
