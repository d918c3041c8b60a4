//! CSV tokenizer for expense uploads.
//!
//! The first record is the header row; every following record is data.
//! Quoted fields may contain delimiters, doubled quotes and line breaks, and
//! CRLF, LF and lone CR all end a record. Fields are trimmed.

use csv::{ReaderBuilder, Trim};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Result of tokenizing an uploaded CSV file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A column the user can map to a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnOption {
    pub index: usize,
    pub label: String,
}

impl ParsedCsv {
    /// Cell at `index` in `row`, empty when the row is short.
    pub fn cell(row: &[String], index: usize) -> &str {
        row.get(index).map(String::as_str).unwrap_or("")
    }

    /// Mapping choices: header labels, or positional names when the header row is empty.
    pub fn column_options(&self) -> Vec<ColumnOption> {
        if !self.headers.is_empty() {
            return self
                .headers
                .iter()
                .enumerate()
                .map(|(index, header)| ColumnOption {
                    index,
                    label: if header.is_empty() {
                        format!("Column {}", index + 1)
                    } else {
                        header.clone()
                    },
                })
                .collect();
        }
        let width = self.rows.first().map(Vec::len).unwrap_or(0);
        (0..width)
            .map(|index| ColumnOption {
                index,
                label: format!("Column {}", index + 1),
            })
            .collect()
    }
}

/// Tokenizes CSV text into a header row and data rows.
///
/// Empty input yields no headers and no rows.
pub fn parse_csv(content: &[u8]) -> Result<ParsedCsv> {
    let text = decode_content(content);
    if text.trim().is_empty() {
        return Ok(ParsedCsv::default());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        records.push(record.iter().map(unquote_field).collect::<Vec<_>>());
    }

    let mut records = records.into_iter();
    let headers = records.next().unwrap_or_default();
    Ok(ParsedCsv {
        headers,
        rows: records.collect(),
    })
}

/// Removes stray outer quotes the reader left in place, e.g. on a quoted
/// field preceded by whitespace.
fn unquote_field(field: &str) -> String {
    if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
        field[1..field.len() - 1].replace("\"\"", "\"").trim().to_string()
    } else {
        field.to_string()
    }
}

/// Strips a UTF-8 BOM and decodes, replacing invalid sequences.
fn decode_content(content: &[u8]) -> String {
    let content = content.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(content);
    match std::str::from_utf8(content) {
        Ok(s) => s.to_string(),
        Err(e) => {
            warn!(
                "CSV upload is not valid UTF-8 (valid up to byte {}); decoding lossily",
                e.valid_up_to()
            );
            String::from_utf8_lossy(content).into_owned()
        }
    }
}
