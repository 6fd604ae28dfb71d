//! Transformation module.
//!
//! - Columns: resolving required CSO columns against a header
//! - Cso: wide county rows to tidy (year, county) rows
//! - Nisra: header-only inspection of NISRA extracts
//! - Pipeline: file-to-file entry points

pub mod columns;
pub mod cso;
pub mod nisra;
pub mod pipeline;

pub use columns::CsoColumns;
pub use cso::{CsoOutput, CsoTransformer};
pub use nisra::NisraInspector;
pub use pipeline::*;
