//! Command-line parsing for the MRR growth report.
//!
//! Every option has a default, so a bare `mrr` reads `data/mrr_2024.csv`,
//! writes into `charts/` and compares against the 15.0 industry target.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{
    AnalysisConfig, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_DIR,
    DEFAULT_PERIOD, INDUSTRY_TARGET,
};

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(name = "mrr", version, about = "Quarterly MRR growth vs. industry target")]
pub struct Cli {
    /// Growth table (CSV with `quarter` and `mrr_growth` columns).
    #[arg(long, value_name = "CSV", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Directory for `summary.csv` and the two chart PNGs (created if missing).
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Industry growth target (percent).
    #[arg(long, default_value_t = INDUSTRY_TARGET, allow_negative_numbers = true)]
    pub target: f64,

    /// Period label used in chart titles and the digest header.
    #[arg(long, default_value = DEFAULT_PERIOD)]
    pub period: String,

    /// Chart width (pixels).
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    pub width: u32,

    /// Chart height (pixels).
    #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
    pub height: u32,

    /// Log pipeline details to stderr.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log level when `RUST_LOG` is not set.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }

    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            input_path: self.input.clone(),
            output_dir: self.output_dir.clone(),
            target: self.target,
            period: self.period.clone(),
            chart_width: self.width,
            chart_height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_uses_fixed_defaults() {
        let cli = Cli::try_parse_from(["mrr"]).unwrap();
        assert_eq!(cli.analysis_config(), AnalysisConfig::default());
        assert_eq!(cli.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn options_override_defaults() {
        let cli = Cli::try_parse_from([
            "mrr",
            "--input",
            "in.csv",
            "--output-dir",
            "out",
            "--target",
            "12.5",
            "--period",
            "FY25",
            "-v",
        ])
        .unwrap();
        let config = cli.analysis_config();
        assert_eq!(config.input_path, PathBuf::from("in.csv"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.target, 12.5);
        assert_eq!(config.period, "FY25");
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["mrr", "-v", "-q"]).is_err());
    }

    #[test]
    fn quiet_limits_to_errors() {
        let cli = Cli::try_parse_from(["mrr", "--quiet"]).unwrap();
        assert_eq!(cli.log_level(), tracing::Level::ERROR);
    }
}
