//! CSO wide-to-tidy transformation.
//!
//! ```text
//! Wide input (one row per county)            Tidy output (one row per year)
//! ┌────────┬────────────┬──────────────────┐  ┌──────┬────────┬──────┐
//! │ County │ 2011_Total │ 2011_Irish_Sp... │  │ 2011 │ Dublin │ 25.0 │
//! │ Dublin │ 100        │ 25               │→ │ 2016 │ Dublin │ 30.0 │
//! │ Total  │ ...        │ ...              │  │ 2022 │ Dublin │ 0.0  │
//! └────────┴────────────┴──────────────────┘  └──────┴────────┴──────┘
//! ```
//!
//! Rows keep their input order and the aggregate `Total` row is dropped.

use csv::StringRecord;

use super::columns::CsoColumns;
use crate::error::TransformResult;
use crate::models::{is_aggregate_county, TidyRecord, WideCountyRecord, YearCounts};
use crate::parser::ParseResult;

/// Tidy records plus counters from one transform.
#[derive(Debug, Clone, Default)]
pub struct CsoOutput {
    pub records: Vec<TidyRecord>,
    /// Data rows read from the input
    pub rows_read: usize,
    /// Aggregate rows dropped
    pub aggregate_rows: usize,
}

/// Reshapes CSO county rows once the header has been validated.
#[derive(Debug, Clone)]
pub struct CsoTransformer {
    columns: CsoColumns,
}

impl CsoTransformer {
    /// Build a transformer for a header row, failing on the first missing column.
    pub fn from_headers(headers: &[String]) -> TransformResult<Self> {
        Ok(Self {
            columns: CsoColumns::resolve(headers)?,
        })
    }

    /// Read one data row. `line` is the 1-based line used in error messages.
    pub fn read_record(&self, record: &StringRecord, line: u64) -> TransformResult<WideCountyRecord> {
        let county = self.columns.county.raw(record).to_string();

        let mut counts = [YearCounts::default(); 3];
        for (slot, year_columns) in counts.iter_mut().zip(self.columns.years.iter()) {
            *slot = year_columns.counts(record, line)?;
        }

        Ok(WideCountyRecord::new(county, counts))
    }

    /// Transform every row, failing on the first malformed one.
    ///
    /// Aggregate rows are skipped before their counts are parsed.
    pub fn transform(&self, records: &[StringRecord]) -> TransformResult<CsoOutput> {
        let mut output = CsoOutput {
            records: Vec::with_capacity(records.len() * 3),
            ..CsoOutput::default()
        };

        for (row_idx, record) in records.iter().enumerate() {
            output.rows_read += 1;

            // +1 for 0-index, +1 for header when no position is recorded
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(row_idx as u64 + 2);

            if is_aggregate_county(self.columns.county.raw(record)) {
                output.aggregate_rows += 1;
                continue;
            }

            let wide = self.read_record(record, line)?;
            output.records.extend(wide.into_tidy());
        }

        Ok(output)
    }
}

/// Validate headers and transform an already-parsed extract.
pub fn transform_parsed(parsed: &ParseResult) -> TransformResult<CsoOutput> {
    CsoTransformer::from_headers(&parsed.headers)?.transform(&parsed.records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;
    use crate::models::CensusYear;
    use crate::parser::parse_str;

    const HEADER: &str = "County,2011_Total,2011_Irish_Speakers,2016_Total,2016_Irish_Speakers,2022_Total,2022_Irish_Speakers";

    fn run(body: &str) -> TransformResult<CsoOutput> {
        let parsed = parse_str(&format!("{}\n{}", HEADER, body), "utf-8").unwrap();
        transform_parsed(&parsed)
    }

    #[test]
    fn test_dublin_scenario() {
        let output = run("Dublin,100,25,100,30,0,0").unwrap();

        assert_eq!(
            output.records,
            vec![
                TidyRecord::new(CensusYear::Y2011, "Dublin", 25.0),
                TidyRecord::new(CensusYear::Y2016, "Dublin", 30.0),
                TidyRecord::new(CensusYear::Y2022, "Dublin", 0.0),
            ]
        );
    }

    #[test]
    fn test_total_row_excluded_anywhere() {
        // Counts of an aggregate row are never parsed
        let output = run("Total,9,9,9,9,9,9\nCork,10,1,10,2,10,3\nTotal,x,y,z,a,b,c").unwrap();
        assert_eq!(output.rows_read, 3);
        assert_eq!(output.aggregate_rows, 2);
        assert_eq!(output.records.len(), 3);
        assert!(output.records.iter().all(|r| r.county == "Cork"));
    }

    #[test]
    fn test_padded_total_is_a_county() {
        let output = run("Total ,10,1,10,1,10,1\n Cork,10,1,10,1,10,1\n Total,4,1,4,1,4,1").unwrap();

        assert_eq!(output.aggregate_rows, 0);
        assert_eq!(output.records.len(), 9);
        assert_eq!(output.records[0].county, "Total ");
        assert_eq!(output.records[3].county, " Cork");
        assert_eq!(output.records[6].county, " Total");
    }

    #[test]
    fn test_order_preserved_across_counties() {
        let output = run("Galway,10,5,10,5,10,5\nCarlow,10,1,10,1,10,1\nMayo,10,2,10,2,10,2").unwrap();

        let keys: Vec<(String, &str)> = output
            .records
            .iter()
            .map(|r| (r.county.clone(), r.year.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Galway".to_string(), "2011"),
                ("Galway".to_string(), "2016"),
                ("Galway".to_string(), "2022"),
                ("Carlow".to_string(), "2011"),
                ("Carlow".to_string(), "2016"),
                ("Carlow".to_string(), "2022"),
                ("Mayo".to_string(), "2011"),
                ("Mayo".to_string(), "2016"),
                ("Mayo".to_string(), "2022"),
            ]
        );
    }

    #[test]
    fn test_duplicate_counties_not_merged() {
        let output = run("Kerry,10,1,10,1,10,1\nKerry,10,2,10,2,10,2").unwrap();
        assert_eq!(output.records.len(), 6);
        assert_eq!(output.records[3].percentage_irish_speakers, 20.0);
    }

    #[test]
    fn test_malformed_value_names_field_and_line() {
        let err = run("Cork,10,1,10,2,10,3\nKerry,10,1,ten,2,10,3").unwrap_err();
        match err {
            TransformError::MalformedInput { field, line, value } => {
                assert_eq!(field, "2016_Total");
                assert_eq!(line, 3);
                assert_eq!(value, "ten");
            }
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_column_fails_before_rows() {
        let parsed = parse_str(
            "County,2011_Total,2011_Irish_Speakers,2016_Total,2022_Total,2022_Irish_Speakers\nCork,x,x,x,x,x",
            "utf-8",
        )
        .unwrap();

        match transform_parsed(&parsed).unwrap_err() {
            TransformError::MissingColumn { column } => assert_eq!(column, "2016_Irish_Speakers"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_body_gives_no_records() {
        let parsed = parse_str(HEADER, "utf-8").unwrap();
        let output = transform_parsed(&parsed).unwrap();
        assert!(output.records.is_empty());
        assert_eq!(output.rows_read, 0);
    }

    #[test]
    fn test_percentages_within_bounds() {
        let output = run("A,7,3,13,13,1000003,1\nB,1,0,999,998,5,4").unwrap();
        for record in &output.records {
            assert!(record.percentage_irish_speakers >= 0.0);
            assert!(record.percentage_irish_speakers <= 100.0);
        }
    }
}
