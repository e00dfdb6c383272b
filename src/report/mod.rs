//! Reporting utilities: the terminal digest.
//!
//! Formatting lives in one place so output changes stay localized and easy to
//! pin with golden tests. The summary table itself is written by `io::export`.

pub mod format;

pub use format::*;
