//! Domain models for the census transformation pipeline.
//!
//! - [`CensusYear`] - the census years present in the CSO extract
//! - [`YearCounts`] - population and Irish-speaker counts for one year
//! - [`WideCountyRecord`] - one input row: a county with counts per year
//! - [`TidyRecord`] - one output row: a (year, county) percentage
//! - [`HeaderReport`] - the header row of an inspected NISRA file

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// County value marking the grand-total row of a CSO extract.
pub const AGGREGATE_COUNTY: &str = "Total";

// =============================================================================
// Census Year
// =============================================================================

/// A CSO census year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CensusYear {
    #[serde(rename = "2011")]
    Y2011,
    #[serde(rename = "2016")]
    Y2016,
    #[serde(rename = "2022")]
    Y2022,
}

impl CensusYear {
    /// All years, in output order.
    pub const ALL: [CensusYear; 3] = [CensusYear::Y2011, CensusYear::Y2016, CensusYear::Y2022];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Y2011 => "2011",
            Self::Y2016 => "2016",
            Self::Y2022 => "2022",
        }
    }

    /// Input column holding the total population.
    pub fn total_column(&self) -> String {
        format!("{}_Total", self.as_str())
    }

    /// Input column holding the Irish-speaker count.
    pub fn speakers_column(&self) -> String {
        format!("{}_Irish_Speakers", self.as_str())
    }
}

impl std::fmt::Display for CensusYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Wide input
// =============================================================================

/// Population and Irish-speaker counts for one county in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YearCounts {
    pub total: u64,
    pub irish_speakers: u64,
}

impl YearCounts {
    pub fn new(total: u64, irish_speakers: u64) -> Self {
        Self { total, irish_speakers }
    }

    /// Share of Irish speakers as a percentage.
    ///
    /// A zero total yields exactly `0.0`.
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.irish_speakers as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// One row of the CSO wide-format extract.
#[derive(Debug, Clone, PartialEq)]
pub struct WideCountyRecord {
    pub county: String,
    /// Counts indexed in the order of [`CensusYear::ALL`]
    pub counts: [YearCounts; 3],
}

impl WideCountyRecord {
    pub fn new(county: impl Into<String>, counts: [YearCounts; 3]) -> Self {
        Self {
            county: county.into(),
            counts,
        }
    }

    /// Whether this is the grand-total row across all counties.
    ///
    /// Exact, case-sensitive match on [`AGGREGATE_COUNTY`]. Aggregate rows
    /// never produce output.
    pub fn is_aggregate_row(&self) -> bool {
        is_aggregate_county(&self.county)
    }

    /// Expand into one tidy record per census year, in year order.
    pub fn into_tidy(self) -> Vec<TidyRecord> {
        CensusYear::ALL
            .iter()
            .zip(self.counts.iter())
            .map(|(year, counts)| TidyRecord::new(*year, self.county.clone(), counts.percentage()))
            .collect()
    }
}

/// See [`WideCountyRecord::is_aggregate_row`].
pub fn is_aggregate_county(county: &str) -> bool {
    county == AGGREGATE_COUNTY
}

// =============================================================================
// Tidy output
// =============================================================================

/// One row of the tidy long-format output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TidyRecord {
    #[serde(rename = "Year")]
    pub year: CensusYear,
    #[serde(rename = "County")]
    pub county: String,
    #[serde(rename = "PercentageIrishSpeakers")]
    pub percentage_irish_speakers: f64,
}

impl TidyRecord {
    /// Output column names, in order.
    pub const HEADER: [&'static str; 3] = ["Year", "County", "PercentageIrishSpeakers"];

    pub fn new(year: CensusYear, county: impl Into<String>, percentage_irish_speakers: f64) -> Self {
        Self {
            year,
            county: county.into(),
            percentage_irish_speakers,
        }
    }
}

// =============================================================================
// NISRA header report
// =============================================================================

/// Header row read from one NISRA file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderReport {
    /// Census year label, e.g. "2011"
    pub label: String,
    pub path: PathBuf,
    pub headers: Vec<String>,
}

impl HeaderReport {
    /// Render as `"<label> Header: [..]"` with the headers as a JSON array.
    pub fn render(&self) -> String {
        let headers = serde_json::to_string(&self.headers).unwrap_or_else(|_| self.headers.join(","));
        format!("{} Header: {}", self.label, headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_columns() {
        assert_eq!(CensusYear::Y2016.total_column(), "2016_Total");
        assert_eq!(CensusYear::Y2022.speakers_column(), "2022_Irish_Speakers");
        assert_eq!(CensusYear::Y2011.to_string(), "2011");
    }

    #[test]
    fn test_years_in_output_order() {
        let labels: Vec<&str> = CensusYear::ALL.iter().map(|y| y.as_str()).collect();
        assert_eq!(labels, vec!["2011", "2016", "2022"]);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(YearCounts::new(100, 25).percentage(), 25.0);
        assert_eq!(YearCounts::new(4, 4).percentage(), 100.0);
        assert_eq!(YearCounts::new(3, 1).percentage(), (1.0 / 3.0) * 100.0);
    }

    #[test]
    fn test_zero_total_is_zero_not_nan() {
        let pct = YearCounts::new(0, 0).percentage();
        assert_eq!(pct, 0.0);
        assert!(!pct.is_nan());
    }

    #[test]
    fn test_aggregate_row_is_case_sensitive() {
        let counts = [YearCounts::default(); 3];
        assert!(WideCountyRecord::new("Total", counts).is_aggregate_row());
        assert!(!WideCountyRecord::new("total", counts).is_aggregate_row());
        assert!(!WideCountyRecord::new("Total ", counts).is_aggregate_row());
        assert!(!WideCountyRecord::new("Dublin", counts).is_aggregate_row());
    }

    #[test]
    fn test_into_tidy_order() {
        let record = WideCountyRecord::new(
            "Dublin",
            [
                YearCounts::new(100, 25),
                YearCounts::new(100, 30),
                YearCounts::new(0, 0),
            ],
        );

        let tidy = record.into_tidy();
        assert_eq!(
            tidy,
            vec![
                TidyRecord::new(CensusYear::Y2011, "Dublin", 25.0),
                TidyRecord::new(CensusYear::Y2016, "Dublin", 30.0),
                TidyRecord::new(CensusYear::Y2022, "Dublin", 0.0),
            ]
        );
    }

    #[test]
    fn test_header_report_render() {
        let report = HeaderReport {
            label: "2011".into(),
            path: PathBuf::from("nisra_2011.csv"),
            headers: vec!["Area".into(), "Population".into(), "IrishSpeakers".into()],
        };
        assert_eq!(
            report.render(),
            r#"2011 Header: ["Area","Population","IrishSpeakers"]"#
        );
    }
}
