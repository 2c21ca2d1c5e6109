// seriate/src/core/control.rs

//! Defines how a run treats step failures and the shape of a successful run's output.

use std::fmt;
use std::str::FromStr;

/// How a run reacts to a failing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
  /// Stop at the first failing step and return its failure verbatim.
  #[default]
  FailFast,
  /// Run every step, collect every failure, report them once all steps were attempted.
  SettleAll,
}

impl RunMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      RunMode::FailFast => "fail-fast",
      RunMode::SettleAll => "settle-all",
    }
  }
}

impl fmt::Display for RunMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Returned when parsing an unknown run mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown run mode '{0}' (expected 'fail-fast' or 'settle-all')")]
pub struct ParseRunModeError(pub String);

impl FromStr for RunMode {
  type Err = ParseRunModeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "fail-fast" | "fail_fast" | "failfast" => Ok(RunMode::FailFast),
      "settle-all" | "settle_all" | "settleall" => Ok(RunMode::SettleAll),
      _ => Err(ParseRunModeError(s.to_string())),
    }
  }
}

/// Output of a successful run.
///
/// A run with exactly one recorded result hands it back as `Single` rather
/// than a one-element list; a pipeline with no steps yields `Empty`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutput<T> {
  Empty,
  Single(T),
  Many(Vec<T>),
}

impl<T> RunOutput<T> {
  pub(crate) fn from_results(mut results: Vec<T>) -> Self {
    match results.len() {
      0 => RunOutput::Empty,
      1 => results.pop().map_or(RunOutput::Empty, RunOutput::Single),
      _ => RunOutput::Many(results),
    }
  }

  pub fn len(&self) -> usize {
    match self {
      RunOutput::Empty => 0,
      RunOutput::Single(_) => 1,
      RunOutput::Many(values) => values.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    matches!(self, RunOutput::Empty)
  }

  /// The value of a `Single` output.
  pub fn single(self) -> Option<T> {
    match self {
      RunOutput::Single(value) => Some(value),
      _ => None,
    }
  }

  /// All results in step order, regardless of arity.
  pub fn into_vec(self) -> Vec<T> {
    match self {
      RunOutput::Empty => Vec::new(),
      RunOutput::Single(value) => vec![value],
      RunOutput::Many(values) => values,
    }
  }
}
