// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use parking_lot::Mutex;
use seriate::{Failure, Pipeline, RunOptions, StepResult};
use std::future::Future;
use std::pin::Pin;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)] // Clone, PartialEq, Eq for assertions
pub enum TestError {
  #[error("Test step failed: {0}")]
  Step(String),

  #[error("Test validation failed: {0}")]
  Validation(String),
}

pub fn step_err(msg: &str) -> TestError {
  TestError::Step(msg.to_string())
}

pub type TestPipeline = Pipeline<i64, TestError>;
pub type TestOptions = RunOptions<i64, TestError>;

pub type StepFuture = Pin<Box<dyn Future<Output = StepResult<i64, TestError>> + Send>>;

// --- Shared call log ---
/// Records which steps ran and what input each one saw.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<(String, i64)>>>);

impl CallLog {
  pub fn record(&self, step_name: &str, input: i64) {
    self.0.lock().push((step_name.to_string(), input));
  }

  pub fn names(&self) -> Vec<String> {
    self.0.lock().iter().map(|(name, _)| name.clone()).collect()
  }

  pub fn inputs(&self) -> Vec<i64> {
    self.0.lock().iter().map(|(_, input)| *input).collect()
  }
}

// --- Common Step Creators ---
pub fn add_step(
  log: &CallLog,
  step_name: &'static str,
  amount: i64,
) -> impl Fn(i64) -> StepFuture + Send + Sync + 'static {
  let log = log.clone();
  move |input: i64| {
    let log = log.clone();
    let fut: StepFuture = Box::pin(async move {
      log.record(step_name, input);
      STEP_EXEC_COUNTER.fetch_add(1, Ordering::SeqCst);
      tracing::debug!(target: "test_steps", step = step_name, input, "add step executed");
      Ok(input + amount)
    });
    fut
  }
}

pub fn failing_step(
  log: &CallLog,
  step_name: &'static str,
  error_message: &'static str,
) -> impl Fn(i64) -> StepFuture + Send + Sync + 'static {
  let log = log.clone();
  move |input: i64| {
    let log = log.clone();
    let fut: StepFuture = Box::pin(async move {
      log.record(step_name, input);
      STEP_EXEC_COUNTER.fetch_add(1, Ordering::SeqCst);
      tracing::warn!(target: "test_steps", step = step_name, "failing with: '{}'", error_message);
      Err(Failure::Single(step_err(error_message)))
    });
    fut
  }
}

/// Fails with several errors at once.
pub fn multi_failing_step(
  log: &CallLog,
  step_name: &'static str,
  error_messages: &'static [&'static str],
) -> impl Fn(i64) -> StepFuture + Send + Sync + 'static {
  let log = log.clone();
  move |input: i64| {
    let log = log.clone();
    let fut: StepFuture = Box::pin(async move {
      log.record(step_name, input);
      STEP_EXEC_COUNTER.fetch_add(1, Ordering::SeqCst);
      Err(Failure::Many(error_messages.iter().map(|m| step_err(m)).collect()))
    });
    fut
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Atomic counters for checking execution counts ---
pub static STEP_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));
pub static TRANSFORM_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));
pub static DERIVE_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  STEP_EXEC_COUNTER.store(0, Ordering::SeqCst);
  TRANSFORM_EXEC_COUNTER.store(0, Ordering::SeqCst);
  DERIVE_EXEC_COUNTER.store(0, Ordering::SeqCst);
}

pub fn count(counter: &Lazy<Arc<AtomicUsize>>) -> usize {
  counter.load(Ordering::SeqCst)
}
