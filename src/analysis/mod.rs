//! Growth analysis.
//!
//! Responsibilities:
//!
//! - resolve quarter labels, order records chronologically, compute gaps (`derive`)
//! - aggregate mean / extremes / latest into a `GrowthSummary` (`summary`)

pub mod derive;
pub mod summary;

pub use derive::*;
pub use summary::*;
