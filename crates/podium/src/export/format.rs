//! ExportFormat trait definition

use std::collections::BTreeSet;

use serde::Deserialize;
use strum::{Display, EnumString, IntoStaticStr};

use super::{JsonExporter, TextExporter};
use crate::score::DateKey;

/// Trait for query result formatters
pub trait ExportFormat {
    /// Format a list of dates (keeps the given order and duplicates)
    fn format_dates(&self, dates: &[DateKey]) -> String;

    /// Format a set of user ids
    fn format_users(&self, users: &BTreeSet<i64>) -> String;
}

/// Selectable output format
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn exporter(&self) -> Box<dyn ExportFormat> {
        match self {
            OutputFormat::Text => Box::new(TextExporter),
            OutputFormat::Json => Box::new(JsonExporter),
        }
    }
}
