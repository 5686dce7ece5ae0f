//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers (Page, SlotId)

pub mod config;
pub mod error;
mod page;
mod slot_id;

pub use error::{Error, Result};
pub use page::{pages, Page};
pub use slot_id::SlotId;
