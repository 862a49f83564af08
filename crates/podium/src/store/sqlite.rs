//! SQLite score store
//!
//! Every query binds its inputs as parameters; values are never formatted into SQL text.
//! The `date` column is read back as an opaque key: text as-is, numbers in their
//! decimal form. Nothing is parsed, so non-ISO keys never fail a query.

use std::path::Path;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{Connection, OpenFlags, ToSql, params};
use tracing::{debug, info};

use super::ScoreStore;
use crate::error::Result;
use crate::score::{DateKey, ScoreRow};

/// Expected table layout. With `YYYY-MM-DD` keys, text order is date order.
pub const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS scores (
    user_id INTEGER NOT NULL,
    score NUMERIC NOT NULL,
    date TEXT NOT NULL
)";

const COUNT_DATES_SQL: &str = "SELECT date
     FROM scores
     GROUP BY date
     HAVING COUNT(*) >= ?1
     ORDER BY date DESC";

const MAX_SCORE_USERS_SQL: &str = "SELECT user_id
     FROM scores
     WHERE date = ?1
     AND score = (SELECT MAX(score) FROM scores WHERE date = ?1)";

const ALL_SCORES_SQL: &str = "SELECT user_id, score, date
     FROM scores
     ORDER BY date DESC, score DESC";

/// Score store backed by a SQLite `scores` table
pub struct SqliteScoreStore {
    conn: Connection,
}

impl SqliteScoreStore {
    /// Open an existing database read-only
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        info!("Opened score database {}", path.display());
        Ok(Self { conn })
    }

    /// Wrap an already-open connection
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl FromSql for DateKey {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Text(_) => value.as_str().map(DateKey::from),
            ValueRef::Integer(i) => Ok(DateKey::new(i.to_string())),
            ValueRef::Real(f) => Ok(DateKey::new(f.to_string())),
            ValueRef::Null | ValueRef::Blob(_) => Err(FromSqlError::InvalidType),
        }
    }
}

impl ToSql for DateKey {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl ScoreStore for SqliteScoreStore {
    fn count_dates_having_min_rows(&self, min_count: i64) -> Result<Vec<DateKey>> {
        let mut stmt = self.conn.prepare_cached(COUNT_DATES_SQL)?;
        let dates = stmt
            .query_map(params![min_count], |row| row.get::<_, DateKey>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!("count_dates_having_min_rows({}) -> {} dates", min_count, dates.len());
        Ok(dates)
    }

    fn max_score_users(&self, date: &DateKey) -> Result<Vec<i64>> {
        let mut stmt = self.conn.prepare_cached(MAX_SCORE_USERS_SQL)?;
        let users = stmt
            .query_map(params![date], |row| row.get::<_, i64>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!("max_score_users({}) -> {} users", date, users.len());
        Ok(users)
    }

    fn all_scores_desc(&self) -> Result<Vec<ScoreRow>> {
        let mut stmt = self.conn.prepare_cached(ALL_SCORES_SQL)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ScoreRow {
                    user_id: row.get(0)?,
                    score: row.get(1)?,
                    date: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!("all_scores_desc -> {} rows", rows.len());
        Ok(rows)
    }
}
