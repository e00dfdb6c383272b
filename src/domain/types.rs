//! Shared domain types.
//!
//! Records flow through the pipeline in three shapes:
//!
//! - `GrowthRecord`: a raw CSV row (label still a string, source order)
//! - `DerivedRecord`: a validated quarter plus its gap to target
//! - `GrowthSummary` / `SummaryRow`: the aggregate, unrounded and stored

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::{AppError, ErrorKind};

/// Industry benchmark for quarterly MRR growth (percent).
pub const INDUSTRY_TARGET: f64 = 15.0;

pub const DEFAULT_INPUT_PATH: &str = "data/mrr_2024.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "charts";
/// Period label used in chart titles and the digest header.
pub const DEFAULT_PERIOD: &str = "2024";

/// 6.4in x 4.8in at 160 dpi.
pub const DEFAULT_CHART_WIDTH: u32 = 1024;
pub const DEFAULT_CHART_HEIGHT: u32 = 768;

pub const SUMMARY_FILE_NAME: &str = "summary.csv";
pub const TREND_CHART_FILE_NAME: &str = "mrr_growth_trend_vs_target.png";
pub const GAP_CHART_FILE_NAME: &str = "gap_to_target_by_quarter.png";

/// Fiscal quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// Chronological rank within the fiscal year (1-4).
    pub fn ordinal(self) -> u8 {
        match self {
            Quarter::Q1 => 1,
            Quarter::Q2 => 2,
            Quarter::Q3 => 3,
            Quarter::Q4 => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }

    /// Resolve a CSV label (exactly `Q1`..`Q4`). `None` for anything else.
    pub fn from_label(label: &str) -> Option<Quarter> {
        Quarter::ALL.into_iter().find(|q| q.label() == label)
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One input row, as found in the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthRecord {
    /// 1-based CSV line number (header is line 1).
    pub line: usize,
    pub quarter_label: String,
    pub growth: f64,
}

/// A validated record extended with its ordinal position and gap to target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedRecord {
    pub quarter: Quarter,
    pub growth: f64,
    /// `growth - target`, unrounded.
    pub gap_to_target: f64,
    /// Position in the source file (0-based); used for tie-breaking.
    pub input_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterValue {
    pub quarter: Quarter,
    pub value: f64,
}

/// Aggregate statistics over a run (full precision).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthSummary {
    pub average_growth: f64,
    pub average_gap: f64,
    pub min: QuarterValue,
    pub max: QuarterValue,
    pub latest: QuarterValue,
    pub target: f64,
    pub n_records: usize,
}

/// Flat, stored projection of a `GrowthSummary`.
///
/// Field order is the column order of `summary.csv`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub average_growth: f64,
    pub average_gap_to_target: f64,
    pub min_quarter: Quarter,
    pub min_value: f64,
    pub max_quarter: Quarter,
    pub max_value: f64,
    pub latest_quarter: Quarter,
    pub latest_value: f64,
    pub industry_target: f64,
}

impl From<&GrowthSummary> for SummaryRow {
    fn from(s: &GrowthSummary) -> Self {
        Self {
            average_growth: round2(s.average_growth),
            average_gap_to_target: round2(s.average_gap),
            min_quarter: s.min.quarter,
            min_value: round2(s.min.value),
            max_quarter: s.max.quarter,
            max_value: round2(s.max.value),
            latest_quarter: s.latest.quarter,
            latest_value: round2(s.latest.value),
            industry_target: s.target,
        }
    }
}

/// Round to 2 decimal places.
///
/// Goes through `{:.2}` so the stored value always equals what the digest
/// prints (correctly rounded on the exact binary value: 2.675 -> 2.67).
pub fn round2(v: f64) -> f64 {
    format!("{v:.2}").parse().unwrap_or(v)
}

/// Run configuration passed into the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub target: f64,
    pub period: String,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            target: INDUSTRY_TARGET,
            period: DEFAULT_PERIOD.to_string(),
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.target.is_finite() {
            return Err(AppError::new(ErrorKind::Usage, "Target must be a finite number."));
        }
        if self.chart_width < 64 || self.chart_height < 64 {
            return Err(AppError::new(
                ErrorKind::Usage,
                format!(
                    "Chart size {}x{} is too small (minimum 64x64).",
                    self.chart_width, self.chart_height
                ),
            ));
        }
        Ok(())
    }

    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(SUMMARY_FILE_NAME)
    }

    pub fn trend_chart_path(&self) -> PathBuf {
        self.output_dir.join(TREND_CHART_FILE_NAME)
    }

    pub fn gap_chart_path(&self) -> PathBuf {
        self.output_dir.join(GAP_CHART_FILE_NAME)
    }
}
