//! Dataset import and JSON/CSV export.
//!
//! This module has **zero I/O**. Callers hand in raw text and receive
//! strings to write, download or copy wherever they like.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::catalog::Company;
use crate::error::CoreError;

pub const JSON_FILE_NAME: &str = "models.json";
pub const CSV_FILE_NAME: &str = "models.csv";

/// Company columns prepended to every flattened model row.
pub const COMPANY_COLUMNS: [&str; 4] = [
    "company",
    "company_icon_path",
    "proprietary_license_desc",
    "proprietary_reuse_specificities",
];

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

/// Parse raw text into a list of companies.
///
/// The top level must be a JSON array. Shape errors inside the array are
/// reported with the offending path from `serde_json`.
pub fn parse_dataset(text: &str) -> Result<Vec<Company>, CoreError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CoreError::Import("no JSON data provided".into()));
    }

    let value: Value = serde_json::from_str(text)
        .map_err(|e| CoreError::Import(format!("invalid JSON: {e}")))?;

    if !value.is_array() {
        return Err(CoreError::Import(
            "invalid JSON format: expected an array of companies".into(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| CoreError::Import(format!("invalid company record: {e}")))
}

// ---------------------------------------------------------------------------
// JSON export
// ---------------------------------------------------------------------------

/// Pretty-printed JSON (two-space indent) of the dataset.
pub fn to_pretty_json(companies: &[Company]) -> Result<String, CoreError> {
    serde_json::to_string_pretty(companies).map_err(|e| CoreError::Internal(e.to_string()))
}

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

/// Escape a value for CSV: wrap in quotes if it contains comma, quote, or newline.
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Convert a JSON value to a CSV cell.
fn json_value_to_csv(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// One row per model: the parent company's columns followed by every key
/// the model carries.
fn flatten_rows(companies: &[Company]) -> Result<Vec<Map<String, Value>>, CoreError> {
    let mut rows = Vec::new();
    for company in companies {
        for model in &company.models {
            let mut row = Map::new();
            let company_values = [
                Some(&company.name),
                company.icon_path.as_ref(),
                company.proprietary_license_desc.as_ref(),
                company.proprietary_reuse_specificities.as_ref(),
            ];
            for (column, value) in COMPANY_COLUMNS.iter().zip(company_values) {
                row.insert(
                    column.to_string(),
                    Value::String(value.cloned().unwrap_or_default()),
                );
            }

            match serde_json::to_value(model).map_err(|e| CoreError::Internal(e.to_string()))? {
                Value::Object(fields) => row.extend(fields),
                other => {
                    return Err(CoreError::Internal(format!(
                        "model serialized to a non-object value: {other}"
                    )))
                }
            }
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Build a CSV document with one row per model across all companies.
///
/// The header is the sorted union of keys over all rows; a key missing from a
/// row yields an empty cell. Every line, the last included, ends with `\n`.
pub fn build_csv(companies: &[Company]) -> Result<String, CoreError> {
    let rows = flatten_rows(companies)?;
    if rows.is_empty() {
        return Err(CoreError::NothingToExport);
    }

    let headers: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .collect();

    let mut csv = String::new();
    csv.push_str(
        &headers
            .iter()
            .map(|h| csv_escape(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    csv.push('\n');

    for row in &rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|header| {
                let value = row.get(*header).unwrap_or(&Value::Null);
                csv_escape(&json_value_to_csv(value))
            })
            .collect();
        csv.push_str(&cells.join(","));
        csv.push('\n');
    }

    Ok(csv)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
