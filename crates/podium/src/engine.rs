//! Ranking engine answering the three score queries.
//!
//! ## Example
//!
//! ```ignore
//! use podium::{RankingEngine, SqliteScoreStore};
//!
//! let store = SqliteScoreStore::open("scores.db")?;
//! let engine = RankingEngine::new(store);
//!
//! let busy_days = engine.dates_with_at_least_n_scores(10)?;
//! let winners = engine.users_with_top_score_on_date(&busy_days[0])?;
//! let podium_days = engine.dates_when_user_was_in_top_n(42, 3)?;
//! ```
//!
//! Every call reads the store afresh; nothing is cached between calls.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::Result;
use crate::rank::{self, is_in_top_n};
use crate::score::DateKey;
use crate::store::ScoreStore;

/// Ranking queries over a read-only score store
pub struct RankingEngine<S> {
    store: S,
}

impl<S: ScoreStore> RankingEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Dates with at least `n` score entries, newest first.
    ///
    /// Fully answered by the store's grouped count query.
    pub fn dates_with_at_least_n_scores(&self, n: i64) -> Result<Vec<DateKey>> {
        let dates = self.store.count_dates_having_min_rows(n)?;
        debug!("dates_with_at_least_n_scores(n={}) -> {:?}", n, dates);
        Ok(dates)
    }

    /// Users holding the maximum score on `date`. Empty if the date has no rows.
    pub fn users_with_top_score_on_date(&self, date: &DateKey) -> Result<BTreeSet<i64>> {
        let users: BTreeSet<i64> = self.store.max_score_users(date)?.into_iter().collect();
        debug!("users_with_top_score_on_date({}) -> {:?}", date, users);
        Ok(users)
    }

    /// Dates on which `user_id` ranked within the top `n`, ties at the boundary included.
    ///
    /// Reads every row, groups by date and scans each bucket. Dates come back in
    /// bucket iteration order, one entry per qualifying row. The tie rule only
    /// extends one row past position `n` (see [`crate::rank`]), so this can
    /// miss a date on which the user shares the top score with `n + 1` others.
    pub fn dates_when_user_was_in_top_n(&self, user_id: i64, n: i64) -> Result<Vec<DateKey>> {
        let rows = self.store.all_scores_desc()?;
        let row_count = rows.len();
        let groups = rank::group(rows);

        let mut dates = Vec::new();
        for bucket in groups.iter() {
            for (index, row) in bucket.iter() {
                if row.user_id == user_id && is_in_top_n(bucket, index, n) {
                    dates.push(row.date.clone());
                }
            }
        }

        debug!(
            "dates_when_user_was_in_top_n(user={}, n={}) scanned {} rows in {} dates -> {:?}",
            user_id,
            n,
            row_count,
            groups.len(),
            dates
        );
        Ok(dates)
    }
}
