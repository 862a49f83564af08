//! Read-only score store.
//!
//! The ranking engine only needs three reads from its store:
//!
//! - **Counted dates**: dates with at least N rows, newest first
//! - **Top scorers**: users whose score equals the maximum on a date
//! - **All scores**: every row ordered by (date desc, score desc)
//!
//! Two backends implement [`ScoreStore`]:
//!
//! - [`SqliteScoreStore`]: a `scores` table in SQLite, queried with bound parameters
//! - [`InMemoryScoreStore`]: rows held in memory, e.g. loaded from a JSON fixture

mod memory;
mod sqlite;

use crate::error::Result;
use crate::score::{DateKey, ScoreRow};

pub use memory::InMemoryScoreStore;
pub use sqlite::{SCHEMA, SqliteScoreStore};

/// Read queries the ranking engine runs against a store
pub trait ScoreStore {
    /// Dates having at least `min_count` rows, ordered by date descending
    fn count_dates_having_min_rows(&self, min_count: i64) -> Result<Vec<DateKey>>;

    /// Users whose score equals the maximum score on `date`
    fn max_score_users(&self, date: &DateKey) -> Result<Vec<i64>>;

    /// All rows ordered by date descending, then score descending
    fn all_scores_desc(&self) -> Result<Vec<ScoreRow>>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for &S {
    fn count_dates_having_min_rows(&self, min_count: i64) -> Result<Vec<DateKey>> {
        (**self).count_dates_having_min_rows(min_count)
    }

    fn max_score_users(&self, date: &DateKey) -> Result<Vec<i64>> {
        (**self).max_score_users(date)
    }

    fn all_scores_desc(&self) -> Result<Vec<ScoreRow>> {
        (**self).all_scores_desc()
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn count_dates_having_min_rows(&self, min_count: i64) -> Result<Vec<DateKey>> {
        (**self).count_dates_having_min_rows(min_count)
    }

    fn max_score_users(&self, date: &DateKey) -> Result<Vec<i64>> {
        (**self).max_score_users(date)
    }

    fn all_scores_desc(&self) -> Result<Vec<ScoreRow>> {
        (**self).all_scores_desc()
    }
}
