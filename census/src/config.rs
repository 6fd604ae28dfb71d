//! Fixed file locations.
//!
//! Both entry points run without arguments against these names in the
//! working directory. Library callers override them through
//! [`crate::transform::CsoOptions`] and [`crate::transform::NisraOptions`].

/// CSO wide-format county extract.
pub const CSO_INPUT_FILE: &str = "cso_by_county.csv";

/// Tidy output written by the CSO transform.
pub const CSO_OUTPUT_FILE: &str = "processed_cso_data.csv";

/// NISRA extracts, labelled by census year, in inspection order.
pub const NISRA_SOURCES: [(&str, &str); 2] = [
    ("2011", "nisra_2011.csv"),
    ("2021", "nisra_2021.csv"),
];
