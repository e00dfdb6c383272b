//! `mrr-growth` library crate.
//!
//! The binary (`mrr`) is a thin wrapper around this library so that:
//!
//! - each pipeline stage is testable without spawning processes
//! - the analysis can be driven from other tools with an explicit config

pub mod analysis;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod plot;
pub mod report;
