// seriate/src/pipeline/mod.rs

//! Defines the `Pipeline<T, E>` struct, its construction, per-run options and execution logic.

pub mod definition;
pub mod execution;
pub mod hooks;

// Re-export the main Pipeline struct
pub use definition::Pipeline;
pub use hooks::RunOptions;
