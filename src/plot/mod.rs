//! Chart rendering.
//!
//! - category/value geometry (`layout`)
//! - PNG drawing with Plotters (`charts`)
//! - the embedded text font (`font`)

use std::path::PathBuf;

use tracing::info;

use crate::domain::{AnalysisConfig, DerivedRecord};
use crate::error::{AppError, ErrorKind};

pub mod charts;
pub mod font;
pub mod layout;

/// Paths of the rendered chart images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPaths {
    pub trend: PathBuf,
    pub gap: PathBuf,
}

/// Render both charts into `config.output_dir`.
///
/// `records` must be in chronological order; it defines the x-axis categories.
/// The output directory must already exist.
pub fn render_charts(records: &[DerivedRecord], config: &AnalysisConfig) -> Result<ChartPaths, AppError> {
    font::register_chart_font()?;

    let paths = ChartPaths {
        trend: config.trend_chart_path(),
        gap: config.gap_chart_path(),
    };

    charts::draw_trend_chart(&paths.trend, records, config).map_err(|e| {
        AppError::new(
            ErrorKind::Output,
            format!("Failed to render chart '{}': {e}", paths.trend.display()),
        )
    })?;
    info!(path = %paths.trend.display(), "wrote growth trend chart");

    charts::draw_gap_chart(&paths.gap, records, config).map_err(|e| {
        AppError::new(
            ErrorKind::Output,
            format!("Failed to render chart '{}': {e}", paths.gap.display()),
        )
    })?;
    info!(path = %paths.gap.display(), "wrote gap chart");

    Ok(paths)
}
