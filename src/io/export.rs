//! Output directory handling and the one-row summary CSV.
//!
//! The summary is meant to be easy to consume in spreadsheets or downstream
//! scripts. Column order follows `SummaryRow`; values are already rounded.

use std::fs::{File, create_dir_all};
use std::path::Path;

use tracing::info;

use crate::domain::SummaryRow;
use crate::error::{AppError, ErrorKind};

/// Create the output directory (and parents) if missing. Idempotent.
pub fn ensure_output_dir(dir: &Path) -> Result<(), AppError> {
    create_dir_all(dir).map_err(|e| {
        AppError::new(
            ErrorKind::Output,
            format!("Failed to create output directory '{}': {e}", dir.display()),
        )
    })
}

/// Write the summary as a header plus a single row.
pub fn write_summary_csv(path: &Path, row: &SummaryRow) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            ErrorKind::Output,
            format!("Failed to create summary CSV '{}': {e}", path.display()),
        )
    })?;

    let mut writer = csv::Writer::from_writer(file);
    writer
        .serialize(row)
        .map_err(|e| AppError::new(ErrorKind::Output, format!("Failed to write summary CSV row: {e}")))?;
    writer
        .flush()
        .map_err(|e| AppError::new(ErrorKind::Output, format!("Failed to flush summary CSV: {e}")))?;

    info!(path = %path.display(), "wrote summary table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Quarter;

    fn sample_row() -> SummaryRow {
        SummaryRow {
            average_growth: 11.75,
            average_gap_to_target: -3.25,
            min_quarter: Quarter::Q1,
            min_value: 5.0,
            max_quarter: Quarter::Q4,
            max_value: 20.0,
            latest_quarter: Quarter::Q4,
            latest_value: 20.0,
            industry_target: 15.0,
        }
    }

    #[test]
    fn summary_csv_has_stable_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        write_summary_csv(&path, &sample_row()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "average_growth,average_gap_to_target,min_quarter,min_value,max_quarter,max_value,latest_quarter,latest_value,industry_target\n\
             11.75,-3.25,Q1,5.0,Q4,20.0,Q4,20.0,15.0\n"
        );
    }

    #[test]
    fn rewriting_produces_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");
        write_summary_csv(&path, &sample_row()).unwrap();
        let first = std::fs::read(&path).unwrap();
        write_summary_csv(&path, &sample_row()).unwrap();
        assert_eq!(first, std::fs::read(&path).unwrap());
    }

    #[test]
    fn output_dir_creation_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("charts");
        ensure_output_dir(&nested).unwrap();
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
