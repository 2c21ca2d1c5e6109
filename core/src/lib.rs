// src/lib.rs

//! Seriate: a sequential, asynchronous step executor.
//!
//! A `Pipeline<T, E>` holds an ordered list of steps. Each step takes the
//! current carry value `T` and asynchronously returns a new `T` or a
//! `Failure<E>`. A run walks the steps strictly one at a time and either:
//!  - stops at the first failure and returns it verbatim (fail-fast, the default), or
//!  - runs every step, collects every failure and reports them together (settle-all).
//!
//! Per run, callers can also choose how the next step's input is derived
//! (`derive_next_input`) and how successful results are rewritten before being
//! recorded (`transform_result`, fail-fast only).
//!
//! Output arity is normalized: one result comes back as `RunOutput::Single`,
//! several as `RunOutput::Many`. Likewise a single collected failure is
//! `Failure::Single` and several are `Failure::Many`.

pub mod core;
pub mod error;
pub mod pipeline;

// --- Re-exports for the Public API ---

pub use crate::core::control::{ParseRunModeError, RunMode, RunOutput};
pub use crate::core::step::{Step, StepDef};

pub use crate::pipeline::definition::Pipeline;
pub use crate::pipeline::hooks::{pass_result_through, DeriveNextInput, RunOptions, TransformResult};

pub use crate::error::{AnyhowFailure, Failure, RunResult, StepResult};

// Re-exported so `Step` implementations don't need their own async-trait dependency.
pub use async_trait::async_trait;

/*
    Core Workflow:
    1. Pick a carry type `T` and an error type `E` for your process.
    2. Build a `Pipeline<T, E>` with `.step("name", |input| async move { ... })`
       (or `.step_impl("name", MyStep)` for a type implementing `Step<T, E>`).
    3. Run it:
       - `pipeline.run(input).await` for fail-fast with default hooks,
       - `pipeline.run_settled(input).await` for settle-all,
       - `pipeline.run_with(input, RunOptions::settle_all().derive_next_input(...)).await`
         for full control.
    4. Match on `RunOutput` for results and on `Failure` for errors.
*/
