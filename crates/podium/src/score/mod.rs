//! Score rows and boundary input parsing.
//!
//! Rows are plain values read from the store. Query inputs (`n`, `user_id`,
//! `date`) are parsed here before any store access, so malformed values never
//! reach a query.

mod input;
mod row;

pub use input::{DATE_FORMAT, parse_count, parse_date, parse_user_id};
pub use row::{DateKey, ScoreRow};
