//! CSV ingest.
//!
//! Turns a quarter-indexed growth table into `GrowthRecord`s in source order.
//! The schema is strict: the `quarter` and `mrr_growth` columns must exist and
//! every row must carry a label and a finite numeric growth value. Any
//! violation aborts the load; quarter labels are validated later.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info};

use crate::domain::GrowthRecord;
use crate::error::{AppError, ErrorKind};

pub const QUARTER_COLUMN: &str = "quarter";
pub const GROWTH_COLUMN: &str = "mrr_growth";

/// Load growth records from a CSV file.
pub fn load_growth_records(path: &Path) -> Result<Vec<GrowthRecord>, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            ErrorKind::InputNotFound,
            format!("Failed to open CSV '{}': {e}", path.display()),
        )
    })?;

    let records = read_growth_records(file)?;
    info!(path = %path.display(), rows = records.len(), "loaded growth table");
    Ok(records)
}

/// Parse growth records from any CSV reader.
pub fn read_growth_records<R: Read>(source: R) -> Result<Vec<GrowthRecord>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| parse_error(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(&header_map)?;

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // The reader skips blank lines, so the row index can lag the file line.
        let fallback_line = idx + 2;
        let record = result.map_err(|e| {
            let line = e.position().map_or(fallback_line, |p| p.line() as usize);
            parse_error(format!("CSV parse error at line {line}: {e}"))
        })?;
        let line = record.position().map_or(fallback_line, |p| p.line() as usize);
        let row = parse_row(&record, &header_map, line)?;
        debug!(line, quarter = %row.quarter_label, growth = row.growth, "parsed row");
        records.push(row);
    }

    Ok(records)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn ensure_required_columns_exist(header_map: &HashMap<String, usize>) -> Result<(), AppError> {
    for name in [QUARTER_COLUMN, GROWTH_COLUMN] {
        if !header_map.contains_key(name) {
            return Err(parse_error(format!("Missing required column: `{name}`")));
        }
    }
    Ok(())
}

fn parse_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    line: usize,
) -> Result<GrowthRecord, AppError> {
    let quarter_label = get_required(record, header_map, QUARTER_COLUMN, line)?.to_string();
    let raw_growth = get_required(record, header_map, GROWTH_COLUMN, line)?;
    let growth = parse_f64(raw_growth).ok_or_else(|| {
        parse_error(format!(
            "Invalid `{GROWTH_COLUMN}` value '{raw_growth}' at line {line} (expected a finite number)."
        ))
    })?;

    Ok(GrowthRecord {
        line,
        quarter_label,
        growth,
    })
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
    line: usize,
) -> Result<&'a str, AppError> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| parse_error(format!("Missing required column: `{name}`")))?;
    record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| parse_error(format!("Missing required value `{name}` at line {line}.")))
}

fn parse_f64(s: &str) -> Option<f64> {
    let v = s.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

fn parse_error(message: String) -> AppError {
    AppError::new(ErrorKind::InputParse, message)
}
