// seriate/src/core/step.rs

//! Defines the `Step` trait and the `StepDef` wrapper that places a step in a pipeline.

use crate::error::StepResult;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

/// One unit of asynchronous work: consumes the carry value and yields a new
/// value or a `Failure<E>`.
///
/// Any `Fn(T) -> impl Future<Output = StepResult<T, E>>` closure is a `Step`.
/// Implement the trait directly for steps that hold their own configuration
/// or clients.
#[async_trait]
pub trait Step<T, E>: Send + Sync
where
  T: Send + 'static,
  E: Send + 'static,
{
  async fn call(&self, input: T) -> StepResult<T, E>;
}

#[async_trait]
impl<T, E, F, Fut> Step<T, E> for F
where
  T: Send + 'static,
  E: Send + 'static,
  F: Fn(T) -> Fut + Send + Sync + 'static,
  Fut: Future<Output = StepResult<T, E>> + Send + 'static,
{
  async fn call(&self, input: T) -> StepResult<T, E> {
    (self)(input).await
  }
}

/// A step as placed in a pipeline: its position, a display name and the step
/// itself.
///
/// This is the step reference handed to `transform_result` hooks. Its index and
/// name are fixed when the pipeline is built.
pub struct StepDef<T, E>
where
  T: Send + 'static,
  E: Send + 'static,
{
  pub(crate) index: usize,
  pub(crate) name: String,
  pub(crate) step: Arc<dyn Step<T, E>>,
}

impl<T, E> StepDef<T, E>
where
  T: Send + 'static,
  E: Send + 'static,
{
  pub(crate) fn new(index: usize, name: impl Into<String>, step: Arc<dyn Step<T, E>>) -> Self {
    Self {
      index,
      name: name.into(),
      step,
    }
  }

  /// Zero-based position in the pipeline.
  pub fn index(&self) -> usize {
    self.index
  }

  pub fn name(&self) -> &str {
    &self.name
  }
}

impl<T, E> Clone for StepDef<T, E>
where
  T: Send + 'static,
  E: Send + 'static,
{
  fn clone(&self) -> Self {
    Self {
      index: self.index,
      name: self.name.clone(),
      step: Arc::clone(&self.step),
    }
  }
}

// The step itself is a trait object without Debug; show its placement only.
impl<T, E> std::fmt::Debug for StepDef<T, E>
where
  T: Send + 'static,
  E: Send + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StepDef")
      .field("index", &self.index)
      .field("name", &self.name)
      .finish()
  }
}
