//! JSON output format

use std::collections::BTreeSet;

use serde_json::{Value as JsonValue, json};

use super::format::ExportFormat;
use crate::score::DateKey;

/// JSON exporter (a single array per result)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ExportFormat for JsonExporter {
    fn format_dates(&self, dates: &[DateKey]) -> String {
        let values: Vec<JsonValue> = dates
            .iter()
            .map(|d| json!(d.as_str()))
            .collect();
        JsonValue::Array(values).to_string()
    }

    fn format_users(&self, users: &BTreeSet<i64>) -> String {
        json!(users).to_string()
    }
}
