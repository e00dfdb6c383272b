//! Aggregate statistics over the chronologically ordered records.

use std::cmp::Ordering;

use tracing::info;

use crate::domain::{DerivedRecord, GrowthSummary, QuarterValue};
use crate::error::{AppError, ErrorKind};

/// Compute mean, extremes and latest value.
///
/// `records` must already be in chronological order: `latest` is positional.
/// Ties for min/max resolve to the earliest row of the source file.
pub fn summarize(records: &[DerivedRecord], target: f64) -> Result<GrowthSummary, AppError> {
    let (Some(latest), Some(min), Some(max)) = (
        records.last(),
        select_extreme(records, Ordering::Less),
        select_extreme(records, Ordering::Greater),
    ) else {
        return Err(AppError::new(
            ErrorKind::EmptyDataset,
            "No rows to analyze (the input table has a header but no data).",
        ));
    };

    let n = records.len();
    let average_growth = records.iter().map(|r| r.growth).sum::<f64>() / n as f64;

    let summary = GrowthSummary {
        average_growth,
        average_gap: average_growth - target,
        min: quarter_value(min),
        max: quarter_value(max),
        latest: quarter_value(latest),
        target,
        n_records: n,
    };

    info!(
        n,
        average = summary.average_growth,
        min = %summary.min.quarter,
        max = %summary.max.quarter,
        latest = %summary.latest.quarter,
        "computed growth summary"
    );
    Ok(summary)
}

/// Pick the record whose growth compares as `prefer` against all others.
fn select_extreme(records: &[DerivedRecord], prefer: Ordering) -> Option<&DerivedRecord> {
    records.iter().reduce(|best, r| {
        match r.growth.partial_cmp(&best.growth).unwrap_or(Ordering::Equal) {
            o if o == prefer => r,
            Ordering::Equal if r.input_index < best.input_index => r,
            _ => best,
        }
    })
}

fn quarter_value(r: &DerivedRecord) -> QuarterValue {
    QuarterValue {
        quarter: r.quarter,
        value: r.growth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::derive_records;
    use crate::domain::{GrowthRecord, Quarter};

    fn derived(data: &[(&str, f64)]) -> Vec<DerivedRecord> {
        let rows: Vec<GrowthRecord> = data
            .iter()
            .enumerate()
            .map(|(i, (label, growth))| GrowthRecord {
                line: i + 2,
                quarter_label: label.to_string(),
                growth: *growth,
            })
            .collect();
        derive_records(&rows, 15.0).unwrap()
    }

    #[test]
    fn unsorted_four_quarter_scenario() {
        let records = derived(&[("Q2", 10.0), ("Q1", 5.0), ("Q4", 20.0), ("Q3", 12.0)]);
        let s = summarize(&records, 15.0).unwrap();

        assert!((s.average_growth - 11.75).abs() < 1e-12);
        assert!((s.average_gap - (-3.25)).abs() < 1e-12);
        assert_eq!((s.min.quarter, s.min.value), (Quarter::Q1, 5.0));
        assert_eq!((s.max.quarter, s.max.value), (Quarter::Q4, 20.0));
        assert_eq!((s.latest.quarter, s.latest.value), (Quarter::Q4, 20.0));
        assert_eq!(s.n_records, 4);
    }

    #[test]
    fn latest_is_highest_ordinal_not_last_input_row() {
        let records = derived(&[("Q3", 9.0), ("Q1", 4.0), ("Q2", 6.0)]);
        let s = summarize(&records, 15.0).unwrap();
        assert_eq!((s.latest.quarter, s.latest.value), (Quarter::Q3, 9.0));
    }

    #[test]
    fn single_row_is_min_max_and_latest() {
        let records = derived(&[("Q2", 13.4)]);
        let s = summarize(&records, 15.0).unwrap();
        assert_eq!(s.average_growth, 13.4);
        for qv in [s.min, s.max, s.latest] {
            assert_eq!((qv.quarter, qv.value), (Quarter::Q2, 13.4));
        }
    }

    #[test]
    fn min_tie_resolves_to_first_in_input_order() {
        // Q3 comes first in the file but after Q1 chronologically.
        let records = derived(&[("Q3", 5.0), ("Q2", 9.0), ("Q1", 5.0), ("Q4", 11.0)]);
        let s = summarize(&records, 15.0).unwrap();
        assert_eq!((s.min.quarter, s.min.value), (Quarter::Q3, 5.0));
    }

    #[test]
    fn max_tie_resolves_to_first_in_input_order() {
        let records = derived(&[("Q4", 18.0), ("Q1", 3.0), ("Q2", 18.0)]);
        let s = summarize(&records, 15.0).unwrap();
        assert_eq!((s.max.quarter, s.max.value), (Quarter::Q4, 18.0));
    }

    #[test]
    fn extremes_are_stable_under_reordering() {
        let a = summarize(&derived(&[("Q1", 5.0), ("Q2", 10.0), ("Q3", 12.0), ("Q4", 20.0)]), 15.0).unwrap();
        let b = summarize(&derived(&[("Q4", 20.0), ("Q3", 12.0), ("Q2", 10.0), ("Q1", 5.0)]), 15.0).unwrap();
        assert_eq!(a.min, b.min);
        assert_eq!(a.max, b.max);
        assert_eq!(a.latest, b.latest);
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = summarize(&[], 15.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyDataset);
    }
}
