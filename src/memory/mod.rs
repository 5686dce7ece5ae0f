//! Page replacement simulation.
//!
//! A run keeps a fixed number of frames resident and serves a reference
//! sequence one access at a time, asking an eviction policy what to drop
//! whenever a miss finds the frames full.
//!
//! # Components
//! - [`FrameSet`] - The resident pages, in slot order
//! - [`replacer`] - Eviction policy implementations
//! - [`Simulator`] / [`run_simulation`] - The step driver
//! - [`Summary`] / [`StepRecord`] - Per-step trace and aggregate counts

mod frame_set;
pub mod replacer;
mod simulator;
mod summary;

pub use frame_set::FrameSet;
pub use simulator::{run_simulation, Simulator};
pub use summary::{round_ratio, AccessStatus, StepRecord, Summary, SummaryBuilder};
