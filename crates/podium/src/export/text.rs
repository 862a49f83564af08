//! Plain text output, one value per line

use std::collections::BTreeSet;

use super::format::ExportFormat;
use crate::score::DateKey;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextExporter;

impl ExportFormat for TextExporter {
    fn format_dates(&self, dates: &[DateKey]) -> String {
        dates
            .iter()
            .map(DateKey::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_users(&self, users: &BTreeSet<i64>) -> String {
        users
            .iter()
            .map(|u| u.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
