//! Quarter resolution, chronological ordering and gap-to-target.

use tracing::debug;

use crate::domain::{DerivedRecord, GrowthRecord, Quarter};
use crate::error::{AppError, ErrorKind};

/// Resolve quarter labels, compute `gap_to_target` and sort chronologically.
///
/// The sort is stable, so duplicate quarters keep their source order.
pub fn derive_records(records: &[GrowthRecord], target: f64) -> Result<Vec<DerivedRecord>, AppError> {
    let mut derived = Vec::with_capacity(records.len());
    for (input_index, record) in records.iter().enumerate() {
        let quarter = Quarter::from_label(&record.quarter_label).ok_or_else(|| {
            AppError::new(
                ErrorKind::UnknownQuarterLabel,
                format!(
                    "'{}' at line {} (expected one of Q1, Q2, Q3, Q4)",
                    record.quarter_label, record.line
                ),
            )
        })?;

        derived.push(DerivedRecord {
            quarter,
            growth: record.growth,
            gap_to_target: record.growth - target,
            input_index,
        });
    }

    derived.sort_by_key(|r| r.quarter.ordinal());

    for r in &derived {
        debug!(quarter = %r.quarter, growth = r.growth, gap = r.gap_to_target, "derived record");
    }

    Ok(derived)
}
