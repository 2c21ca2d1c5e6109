pub mod control;
pub mod step;

// Re-export key types for easier access from other modules (and lib.rs)
pub use control::{RunMode, RunOutput};
pub use step::{Step, StepDef};
