//! pagesim - a page replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                   Contract (api/)                        │   │
//! │  │      JSON request → validate/coerce → render response    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │         Simulation (memory/)  [Runtime Selectable]      │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Eviction Policies: FIFO | LIFO | Optimal |     │   │   │
//! │  │   │              AI-Based (frequency lookahead)     │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      Simulator + FrameSet + Summary                      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Page, SlotId, Error, config)
//! - [`memory`] - Frame set, eviction policies, simulator and summary
//! - [`api`] - Request coercion and JSON rendering for transports
//!
//! # Quick Start
//! ```
//! use pagesim::{pages, run_simulation};
//!
//! let reference = pages([7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3]);
//! let summary = run_simulation(&reference, 3, "LIFO").unwrap();
//!
//! assert_eq!(summary.hits + summary.faults, reference.len());
//! ```

pub mod api;
pub mod common;
pub mod memory;

// Re-export commonly used items at crate root for convenience
pub use common::{pages, Error, Page, Result, SlotId};

pub use memory::replacer::{EvictionPolicy, PolicyKind};
pub use memory::{run_simulation, AccessStatus, FrameSet, Simulator, StepRecord, Summary};
