//! # Census Tidy - Irish-speaker census extracts in long format
//!
//! Reshapes the CSO county extract from wide format (one column pair per
//! census year) into tidy rows of `Year, County, PercentageIrishSpeakers`,
//! and reports the header rows of the NISRA extracts.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐   ┌──────────┐   ┌─────────────┐   ┌────────────────────────┐
//! │ cso_by_county.csv│──▶│  Parser  │──▶│  Transform  │──▶│ processed_cso_data.csv │
//! │  (UTF-8/Latin-1) │   │ (decode) │   │ (wide→tidy) │   │   (3 rows per county)  │
//! └──────────────────┘   └──────────┘   └─────────────┘   └────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use census_tidy::{run_cso, CsoOptions};
//!
//! let summary = run_cso(&CsoOptions::default()).unwrap();
//! println!("Wrote {} rows", summary.records_written);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (CensusYear, WideCountyRecord, TidyRecord)
//! - [`parser`] - CSV reading with encoding fallback
//! - [`transform`] - Column resolution, CSO reshaping, NISRA inspection
//! - [`logs`] - Progress log broadcaster
//! - [`config`] - Fixed file names

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, ErrorKind, PipelineError, TransformError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    is_aggregate_county, CensusYear, HeaderReport, TidyRecord, WideCountyRecord, YearCounts,
};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_encoding, parse_csv_file, parse_str, read_headers, to_csv_bytes,
    ParseResult,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::{
    run_cso, run_nisra, CsoColumns, CsoOptions, CsoOutput, CsoSummary, CsoTransformer, CsvInfo,
    NisraInspector, NisraOptions,
};
