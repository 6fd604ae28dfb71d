//! NISRA header inspection.
//!
//! NISRA extracts use a different layout from the CSO file and are not
//! reshaped yet. This only reads each file's header row so the columns can
//! be reviewed.

use std::path::{Path, PathBuf};

use crate::error::CsvResult;
use crate::logs::{log_info, log_success};
use crate::models::HeaderReport;
use crate::parser::read_headers;

/// Reads the header row of each labelled source, in order.
#[derive(Debug, Clone)]
pub struct NisraInspector {
    sources: Vec<(String, PathBuf)>,
}

impl NisraInspector {
    pub fn new(sources: Vec<(String, PathBuf)>) -> Self {
        Self { sources }
    }

    /// Inspect one file.
    pub fn inspect_one(label: &str, path: &Path) -> CsvResult<HeaderReport> {
        log_info(format!("Reading {} header from {}", label, path.display()));
        let headers = read_headers(path)?;
        log_success(format!("{} columns", headers.len()));

        Ok(HeaderReport {
            label: label.to_string(),
            path: path.to_path_buf(),
            headers,
        })
    }

    /// Inspect every source sequentially, handing each report to
    /// `on_report` as soon as its file has been read. The first failure
    /// stops the run.
    pub fn inspect_each<F>(&self, mut on_report: F) -> CsvResult<Vec<HeaderReport>>
    where
        F: FnMut(&HeaderReport),
    {
        let mut reports = Vec::with_capacity(self.sources.len());
        for (label, path) in &self.sources {
            let report = Self::inspect_one(label, path)?;
            on_report(&report);
            reports.push(report);
        }
        Ok(reports)
    }
}
