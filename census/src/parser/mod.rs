//! CSV reading with encoding fallback, and CSV serialization of output rows.
//!
//! Census extracts are expected in UTF-8, but legacy exports in Latin-1 or
//! Windows-1252 are decoded transparently. No domain logic lives here.

use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use crate::error::{CsvError, CsvResult};

const UTF8_BOM: &str = "\u{feff}";

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Column headers, trimmed
    pub headers: Vec<String>,
    /// Data rows; each keeps its position in the source text
    pub records: Vec<StringRecord>,
    /// Encoding the bytes were decoded with
    pub encoding: String,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other if encoding_rs::Encoding::for_label(other.as_bytes()).is_some() => other.to_string(),
        // Undetected or unknown to encoding_rs
        _ => "windows-1252".to_string(),
    }
}

/// Decode bytes to string using the specified encoding
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let text = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8(bytes.to_vec())
            .map_err(|e| CsvError::Encoding(e.to_string()))?,
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.into_owned()
        }
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        other => {
            let label = encoding_rs::Encoding::for_label(other.as_bytes())
                .ok_or_else(|| CsvError::Encoding(format!("unsupported encoding '{}'", other)))?;
            let (decoded, _, had_errors) = label.decode(bytes);
            if had_errors {
                return Err(CsvError::Encoding(format!(
                    "input is not valid {}",
                    label.name()
                )));
            }
            decoded.into_owned()
        }
    };

    Ok(text.strip_prefix(UTF8_BOM).map(str::to_string).unwrap_or(text))
}

/// Headers are trimmed; fields are kept verbatim.
fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true).trim(Trim::Headers);
    builder
}

/// Parse decoded CSV text into headers and rows.
///
/// Rows with a field count different from the header are rejected.
pub fn parse_str(content: &str, encoding: impl Into<String>) -> CsvResult<ParseResult> {
    let mut reader = reader_builder().from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for record in reader.records() {
        records.push(record?);
    }

    Ok(ParseResult {
        headers,
        records,
        encoding: encoding.into(),
    })
}

fn read_bytes(path: &Path) -> CsvResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CsvError::missing_input(path, "file not found"),
        _ => CsvError::missing_input(path, format!("cannot read file: {}", e)),
    })
}

/// Read and parse a CSV file, decoding it first.
///
/// An empty file (no header row) is a missing input.
pub fn parse_csv_file<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let path = path.as_ref();
    let bytes = read_bytes(path)?;

    let encoding = detect_encoding(&bytes);
    let content = decode_content(&bytes, &encoding)?;
    if content.trim().is_empty() {
        return Err(CsvError::missing_input(path, "file is empty (no header row)"));
    }

    parse_str(&content, encoding)
}

/// Read only the header row of a CSV file.
///
/// Data rows are never read.
pub fn read_headers<P: AsRef<Path>>(path: P) -> CsvResult<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CsvError::missing_input(path, "file not found"),
        _ => CsvError::missing_input(path, format!("cannot open file: {}", e)),
    })?;

    let mut reader = reader_builder().from_reader(BufReader::new(file));
    let raw = reader.byte_headers()?;
    if raw.is_empty() || raw.iter().all(|field| field.is_empty()) {
        return Err(CsvError::missing_input(path, "file is empty (no header row)"));
    }

    let joined: Vec<u8> = raw.iter().flat_map(|f| f.iter().copied()).collect();
    let encoding = detect_encoding(&joined);

    let mut headers = Vec::with_capacity(raw.len());
    for field in raw.iter() {
        headers.push(decode_content(field, &encoding)?);
    }
    Ok(headers)
}

/// Serialize rows as CSV text with an explicit header row.
///
/// The header is written even when there are no rows. Records end in CRLF.
pub fn to_csv_bytes<T: Serialize>(header: &[&str], rows: &[T]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))
}
