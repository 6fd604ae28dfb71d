//! Column resolution for the CSO extract.

use csv::StringRecord;

use crate::error::{TransformError, TransformResult};
use crate::models::{CensusYear, YearCounts};

/// Name of the county column.
pub const COUNTY_COLUMN: &str = "County";

/// Position of a named column in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub name: String,
    pub index: usize,
}

impl ColumnRef {
    fn resolve(headers: &[String], name: impl Into<String>) -> TransformResult<Self> {
        let name = name.into();
        match headers.iter().position(|h| *h == name) {
            Some(index) => Ok(Self { name, index }),
            None => Err(TransformError::MissingColumn { column: name }),
        }
    }

    /// Raw field text, or an empty string when the row is short.
    pub fn raw<'r>(&self, record: &'r StringRecord) -> &'r str {
        record.get(self.index).unwrap_or("")
    }

    /// Field parsed as a non-negative integer.
    pub fn count(&self, record: &StringRecord, line: u64) -> TransformResult<u64> {
        let value = self.raw(record).trim();
        value.parse::<u64>().map_err(|_| TransformError::MalformedInput {
            field: self.name.clone(),
            line,
            value: value.to_string(),
        })
    }
}

/// Total and Irish-speaker columns for one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearColumns {
    pub year: CensusYear,
    pub total: ColumnRef,
    pub irish_speakers: ColumnRef,
}

impl YearColumns {
    pub fn counts(&self, record: &StringRecord, line: u64) -> TransformResult<YearCounts> {
        let total = self.total.count(record, line)?;
        let irish_speakers = self.irish_speakers.count(record, line)?;
        Ok(YearCounts::new(total, irish_speakers))
    }
}

/// Every column the CSO transform reads, resolved once per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsoColumns {
    pub county: ColumnRef,
    /// Indexed in the order of [`CensusYear::ALL`]
    pub years: [YearColumns; 3],
}

impl CsoColumns {
    /// Resolve against a header row.
    ///
    /// Columns are checked in a fixed order (`County`, then total and
    /// speakers per year), so the first missing one is reported.
    pub fn resolve(headers: &[String]) -> TransformResult<Self> {
        let county = ColumnRef::resolve(headers, COUNTY_COLUMN)?;

        let [y1, y2, y3] = CensusYear::ALL;
        let years = [
            Self::resolve_year(headers, y1)?,
            Self::resolve_year(headers, y2)?,
            Self::resolve_year(headers, y3)?,
        ];

        Ok(Self { county, years })
    }

    fn resolve_year(headers: &[String], year: CensusYear) -> TransformResult<YearColumns> {
        Ok(YearColumns {
            year,
            total: ColumnRef::resolve(headers, year.total_column())?,
            irish_speakers: ColumnRef::resolve(headers, year.speakers_column())?,
        })
    }
}
