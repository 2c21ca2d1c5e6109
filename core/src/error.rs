// seriate/src/error.rs

//! The tagged failure type returned by steps and by pipeline runs.

use std::fmt::Display;
use thiserror::Error;

/// A failure reported by a step, or by a whole pipeline run.
///
/// Steps pick the shape explicitly: `Single` for one error, `Many` when a step
/// wants to report several sub-failures at once. In settle-all runs a `Many`
/// is flattened one level into the run's collected failures; in fail-fast runs
/// it is returned as-is.
///
/// A run that collected more than one failure returns them as `Many`, in step
/// order. A run that collected exactly one returns it as `Single`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure<E> {
  #[error("{0}")]
  Single(E),

  #[error("{} step failures: [{}]", .0.len(), join_display(.0))]
  Many(Vec<E>),
}

impl<E> Failure<E> {
  /// Number of individual errors carried.
  pub fn len(&self) -> usize {
    match self {
      Failure::Single(_) => 1,
      Failure::Many(errs) => errs.len(),
    }
  }

  /// True only for an empty `Many`.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Whether this is the aggregate (`Many`) shape.
  pub fn is_aggregate(&self) -> bool {
    matches!(self, Failure::Many(_))
  }

  pub fn iter(&self) -> std::slice::Iter<'_, E> {
    match self {
      Failure::Single(err) => std::slice::from_ref(err).iter(),
      Failure::Many(errs) => errs.iter(),
    }
  }

  /// Flattens into the individual errors, preserving order.
  pub fn into_vec(self) -> Vec<E> {
    match self {
      Failure::Single(err) => vec![err],
      Failure::Many(errs) => errs,
    }
  }

  /// Maps every contained error, keeping the shape.
  pub fn map<F, U>(self, mut f: F) -> Failure<U>
  where
    F: FnMut(E) -> U,
  {
    match self {
      Failure::Single(err) => Failure::Single(f(err)),
      Failure::Many(errs) => Failure::Many(errs.into_iter().map(f).collect()),
    }
  }

  /// Builds the run-level failure from the errors a settle-all run collected.
  /// Returns `None` when nothing failed.
  pub(crate) fn from_collected(mut errs: Vec<E>) -> Option<Self> {
    match errs.len() {
      0 => None,
      1 => errs.pop().map(Failure::Single),
      _ => Some(Failure::Many(errs)),
    }
  }
}

// Lets steps use `?` on their own `Result<_, E>`.
impl<E> From<E> for Failure<E> {
  fn from(err: E) -> Self {
    Failure::Single(err)
  }
}

impl<E> IntoIterator for Failure<E> {
  type Item = E;
  type IntoIter = std::vec::IntoIter<E>;

  fn into_iter(self) -> Self::IntoIter {
    self.into_vec().into_iter()
  }
}

fn join_display<E: Display>(errs: &[E]) -> String {
  errs.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// What a single step returns.
pub type StepResult<T, E> = std::result::Result<T, Failure<E>>;

/// What a pipeline run returns.
pub type RunResult<T, E> = std::result::Result<crate::core::control::RunOutput<T>, Failure<E>>;

/// Failure type for steps that report errors through `anyhow`.
pub type AnyhowFailure = Failure<anyhow::Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn collected_failures_unwrap_single_and_keep_order() {
    assert_eq!(Failure::<&str>::from_collected(vec![]), None);
    assert_eq!(Failure::from_collected(vec!["a"]), Some(Failure::Single("a")));
    assert_eq!(
      Failure::from_collected(vec!["a", "b", "c"]),
      Some(Failure::Many(vec!["a", "b", "c"]))
    );
  }

  #[test]
  fn display_lists_every_failure() {
    let single: Failure<&str> = Failure::Single("boom");
    assert_eq!(single.to_string(), "boom");

    let many: Failure<&str> = Failure::Many(vec!["a", "b"]);
    assert_eq!(many.to_string(), "2 step failures: [a; b]");
  }

  #[test]
  fn question_mark_wraps_into_single() {
    fn step() -> StepResult<i32, String> {
      let parsed: Result<i32, String> = Err("bad input".to_string());
      Ok(parsed?)
    }
    assert_eq!(step(), Err(Failure::Single("bad input".to_string())));
  }

  #[test]
  fn map_and_into_vec_preserve_shape_and_order() {
    let many = Failure::Many(vec![1, 2, 3]).map(|n| n * 10);
    assert!(many.is_aggregate());
    assert_eq!(many.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
    assert_eq!(many.into_vec(), vec![10, 20, 30]);

    let single = Failure::Single(7).map(|n| n + 1);
    assert_eq!(single.len(), 1);
    assert_eq!(single.into_iter().collect::<Vec<_>>(), vec![8]);
  }
}
