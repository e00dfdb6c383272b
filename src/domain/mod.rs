//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the closed quarter domain (`Quarter`)
//! - input and derived records (`GrowthRecord`, `DerivedRecord`)
//! - aggregate outputs (`GrowthSummary`, `SummaryRow`)
//! - run configuration and its defaults (`AnalysisConfig`)

pub mod types;

pub use types::*;
