//! In-memory score store

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::ScoreStore;
use crate::error::Result;
use crate::score::{DateKey, ScoreRow};

/// Score store holding rows in memory, sorted on each read
#[derive(Debug, Clone, Default)]
pub struct InMemoryScoreStore {
    rows: Vec<ScoreRow>,
}

impl InMemoryScoreStore {
    pub fn new(rows: Vec<ScoreRow>) -> Self {
        Self { rows }
    }

    /// Load rows from a JSON array of `{user_id, score, date}` objects
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let rows: Vec<ScoreRow> = serde_json::from_str(&content)?;
        info!("Loaded {} score rows from {}", rows.len(), path.display());
        Ok(Self::new(rows))
    }

}

impl ScoreStore for InMemoryScoreStore {
    fn count_dates_having_min_rows(&self, min_count: i64) -> Result<Vec<DateKey>> {
        let mut counts: BTreeMap<&DateKey, i64> = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(&row.date).or_insert(0) += 1;
        }

        let dates: Vec<DateKey> = counts
            .into_iter()
            .rev()
            .filter(|&(_, count)| count >= min_count)
            .map(|(date, _)| date.clone())
            .collect();
        debug!("count_dates_having_min_rows({}) -> {} dates", min_count, dates.len());
        Ok(dates)
    }

    fn max_score_users(&self, date: &DateKey) -> Result<Vec<i64>> {
        let on_date = || self.rows.iter().filter(move |r| r.date == *date);

        let Some(max) = on_date().map(|r| r.score).reduce(f64::max) else {
            return Ok(Vec::new());
        };

        let users: Vec<i64> = on_date()
            .filter(|r| r.score == max)
            .map(|r| r.user_id)
            .collect();
        debug!("max_score_users({}) -> {} users", date, users.len());
        Ok(users)
    }

    fn all_scores_desc(&self) -> Result<Vec<ScoreRow>> {
        let mut rows = self.rows.clone();
        // Stable sort: equal scores keep insertion order
        rows.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.score.total_cmp(&a.score))
        });
        Ok(rows)
    }
}
