//! File-to-file entry points.
//!
//! # Example
//!
//! ```rust,ignore
//! use census_tidy::{run_cso, CsoOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = run_cso(&CsoOptions::default())?;
//!     println!("Wrote {} rows", summary.records_written);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::cso::transform_parsed;
use super::nisra::NisraInspector;
use crate::config::{CSO_INPUT_FILE, CSO_OUTPUT_FILE, NISRA_SOURCES};
use crate::error::{PipelineError, PipelineResult};
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::models::{HeaderReport, TidyRecord};
use crate::parser::{parse_csv_file, to_csv_bytes, ParseResult};

/// Options for the CSO transform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsoOptions {
    /// Wide-format county extract
    pub input: PathBuf,

    /// Tidy output, overwritten on success
    pub output: PathBuf,
}

impl Default for CsoOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(CSO_INPUT_FILE),
            output: PathBuf::from(CSO_OUTPUT_FILE),
        }
    }
}

impl CsoOptions {
    /// Default file names, resolved inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            input: dir.join(CSO_INPUT_FILE),
            output: dir.join(CSO_OUTPUT_FILE),
        }
    }
}

/// Options for NISRA inspection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NisraOptions {
    /// (year label, path), inspected in order
    pub sources: Vec<(String, PathBuf)>,
}

impl Default for NisraOptions {
    fn default() -> Self {
        Self {
            sources: NISRA_SOURCES
                .iter()
                .map(|(label, path)| (label.to_string(), PathBuf::from(path)))
                .collect(),
        }
    }
}

impl NisraOptions {
    /// Default file names, resolved inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            sources: NISRA_SOURCES
                .iter()
                .map(|(label, path)| (label.to_string(), dir.join(path)))
                .collect(),
        }
    }
}

/// CSV file information
#[derive(Debug, Clone, Serialize)]
pub struct CsvInfo {
    pub encoding: String,
    pub headers: Vec<String>,
    pub row_count: usize,
}

impl From<&ParseResult> for CsvInfo {
    fn from(parsed: &ParseResult) -> Self {
        Self {
            encoding: parsed.encoding.clone(),
            headers: parsed.headers.clone(),
            row_count: parsed.records.len(),
        }
    }
}

/// Result of a CSO run
#[derive(Debug, Clone, Serialize)]
pub struct CsoSummary {
    pub csv_info: CsvInfo,
    pub aggregate_rows: usize,
    pub records_written: usize,
    pub output: PathBuf,
}

/// Read the CSO extract, reshape it and write the tidy file.
///
/// The output is fully serialized in memory first; on any error the output
/// path is left untouched.
pub fn run_cso(options: &CsoOptions) -> PipelineResult<CsoSummary> {
    log_info(format!("📖 Reading {}", options.input.display()));
    let parsed = parse_csv_file(&options.input)?;
    log_success(format!("Encoding: {}", parsed.encoding));
    log_success(format!("Read {} rows", parsed.records.len()));
    log_info(format!("📋 CSV has {} columns:", parsed.headers.len()));
    for (i, col) in parsed.headers.iter().enumerate() {
        log_info_indent(format!("[{:2}] {}", i + 1, col), 1);
    }

    log_info("⚙️  Reshaping to one row per year and county...");
    let output = transform_parsed(&parsed)?;
    if output.aggregate_rows > 0 {
        log_warning(format!("Skipped {} aggregate 'Total' row(s)", output.aggregate_rows));
    }
    log_success(format!("Generated {} tidy records", output.records.len()));

    let bytes = to_csv_bytes(&TidyRecord::HEADER, &output.records)
        .map_err(|e| PipelineError::Serialize(e.to_string()))?;
    fs::write(&options.output, bytes).map_err(|source| PipelineError::Write {
        path: options.output.clone(),
        source,
    })?;
    log_success(format!("💾 Output written to: {}", options.output.display()));

    Ok(CsoSummary {
        csv_info: CsvInfo::from(&parsed),
        aggregate_rows: output.aggregate_rows,
        records_written: output.records.len(),
        output: options.output.clone(),
    })
}

/// Read the header row of each NISRA source, handing each report to
/// `on_report` before the next file is opened.
pub fn run_nisra<F>(options: &NisraOptions, on_report: F) -> PipelineResult<Vec<HeaderReport>>
where
    F: FnMut(&HeaderReport),
{
    let inspector = NisraInspector::new(options.sources.clone());
    Ok(inspector.inspect_each(on_report)?)
}
