use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::input::DATE_FORMAT;

/// Date key exactly as the store holds it.
///
/// Keys compare and order as text, the same way the store sorts its `date`
/// column, so timestamp-style or numeric keys group and sort without parsing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date.format(DATE_FORMAT).to_string())
    }
}

impl From<&str> for DateKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for DateKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// One user's score on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub user_id: i64,
    pub score: f64,
    pub date: DateKey,
}

impl ScoreRow {
    pub fn new(user_id: i64, score: f64, date: impl Into<DateKey>) -> Self {
        Self {
            user_id,
            score,
            date: date.into(),
        }
    }

    /// Exact score equality, as used by the tie rule
    pub fn ties_with(&self, other: &ScoreRow) -> bool {
        self.score == other.score
    }
}
