//! CSV expense import: tokenizing, column mapping, preview and bulk insert.

mod csv_parser;
mod csv_values;
mod imports_model;
mod imports_service;
mod imports_traits;
mod preview;

#[cfg(test)]
mod imports_service_tests;

pub use csv_parser::{parse_csv, ColumnOption, ParsedCsv};
pub use csv_values::{parse_amount, parse_month_code, parse_year};
pub use imports_model::{
    ColumnMapping, ImportBatch, ImportLog, ImportPreview, ImportResult, ImportRow, PreviewRow,
    RowIssue,
};
pub use imports_service::ImportService;
pub use imports_traits::{ImportRepositoryTrait, ImportServiceTrait};
pub use preview::{build_preview, PreviewContext};
