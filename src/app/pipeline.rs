//! The analysis pipeline.
//!
//! load -> derive (label, sort, gap) -> summarize -> summary CSV -> charts
//!
//! All analysis runs before anything touches the output directory, so a bad
//! input (unknown quarter, empty table) leaves no files behind.

use std::path::PathBuf;

use crate::analysis::{derive_records, summarize};
use crate::domain::{AnalysisConfig, DerivedRecord, GrowthRecord, GrowthSummary, SummaryRow};
use crate::error::AppError;
use crate::io::{ensure_output_dir, load_growth_records, write_summary_csv};
use crate::plot::{ChartPaths, render_charts};

/// Derived records plus their aggregate.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Chronologically ordered.
    pub records: Vec<DerivedRecord>,
    pub summary: GrowthSummary,
}

/// All outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub analysis: Analysis,
    pub summary_path: PathBuf,
    pub charts: ChartPaths,
}

/// Execute the full pipeline and write every output file.
pub fn run_analysis(config: &AnalysisConfig) -> Result<RunOutput, AppError> {
    config.validate()?;

    let rows = load_growth_records(&config.input_path)?;
    let analysis = analyze(&rows, config.target)?;

    ensure_output_dir(&config.output_dir)?;

    let summary_path = config.summary_path();
    write_summary_csv(&summary_path, &SummaryRow::from(&analysis.summary))?;

    let charts = render_charts(&analysis.records, config)?;

    Ok(RunOutput {
        analysis,
        summary_path,
        charts,
    })
}

/// Derive and summarize already-loaded rows. No I/O.
pub fn analyze(rows: &[GrowthRecord], target: f64) -> Result<Analysis, AppError> {
    let records = derive_records(rows, target)?;
    let summary = summarize(&records, target)?;
    Ok(Analysis { records, summary })
}
