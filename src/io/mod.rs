//! Input/output helpers.
//!
//! - CSV ingest + validation (`ingest`)
//! - output directory + summary CSV (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
