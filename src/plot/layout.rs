//! Chart geometry shared by both charts.
//!
//! Quarters are placed on a numeric x axis at `1..=n` (chronological order) so
//! that bars, markers and reference lines can share one coordinate system.
//! Tick labels are mapped back to quarter names by `category_label`.

use crate::domain::DerivedRecord;

/// Half-width of a gap bar in x units.
pub const BAR_HALF_WIDTH: f64 = 0.35;

/// X position of the `index`-th category.
pub fn category_x(index: usize) -> f64 {
    (index + 1) as f64
}

/// X range covering `n` categories with half a slot of padding on each side.
pub fn category_range(n: usize) -> (f64, f64) {
    (0.5, n.max(1) as f64 + 0.5)
}

/// Tick label for x value `v`: the quarter name at integer positions, else empty.
pub fn category_label(labels: &[String], v: f64) -> String {
    let slot = v.round();
    if (v - slot).abs() > 1e-6 || slot < 1.0 {
        return String::new();
    }
    labels.get(slot as usize - 1).cloned().unwrap_or_default()
}

pub fn category_labels(records: &[DerivedRecord]) -> Vec<String> {
    records.iter().map(|r| r.quarter.to_string()).collect()
}

/// Y range containing every value and the reference line, padded by 10%.
pub fn value_range(values: impl IntoIterator<Item = f64>, reference: f64) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((reference, reference), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let span = hi - lo;
    let pad = if span < 1e-9 { 1.0 } else { span * 0.1 };
    (lo - pad, hi + pad)
}

/// `(x, growth)` points in chronological order.
pub fn growth_points(records: &[DerivedRecord]) -> Vec<(f64, f64)> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| (category_x(i), r.growth))
        .collect()
}

/// `(x, gap_to_target)` points in chronological order.
pub fn gap_points(records: &[DerivedRecord]) -> Vec<(f64, f64)> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| (category_x(i), r.gap_to_target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Quarter;

    fn labels() -> Vec<String> {
        Quarter::ALL.iter().map(|q| q.to_string()).collect()
    }

    #[test]
    fn labels_only_at_integer_slots() {
        let labels = labels();
        assert_eq!(category_label(&labels, 1.0), "Q1");
        assert_eq!(category_label(&labels, 4.0000000001), "Q4");
        assert_eq!(category_label(&labels, 2.5), "");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, 5.0), "");
    }

    #[test]
    fn value_range_includes_reference_line() {
        let (lo, hi) = value_range([5.0, 10.0, 12.0], 15.0);
        assert!(lo < 5.0 && hi > 15.0);
        assert!((lo - 4.0).abs() < 1e-12);
        assert!((hi - 16.0).abs() < 1e-12);
    }

    #[test]
    fn value_range_pads_degenerate_span() {
        assert_eq!(value_range([0.0], 0.0), (-1.0, 1.0));
    }

    #[test]
    fn category_range_frames_every_slot() {
        assert_eq!(category_range(4), (0.5, 4.5));
        assert_eq!(category_range(1), (0.5, 1.5));
    }

    #[test]
    fn points_follow_record_order() {
        let records = vec![
            DerivedRecord { quarter: Quarter::Q1, growth: 5.0, gap_to_target: -10.0, input_index: 1 },
            DerivedRecord { quarter: Quarter::Q2, growth: 10.0, gap_to_target: -5.0, input_index: 0 },
        ];
        assert_eq!(growth_points(&records), vec![(1.0, 5.0), (2.0, 10.0)]);
        assert_eq!(gap_points(&records), vec![(1.0, -10.0), (2.0, -5.0)]);
        assert_eq!(category_labels(&records), vec!["Q1", "Q2"]);
    }
}
