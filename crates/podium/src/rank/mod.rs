//! Tie-aware top-N ranking over date-grouped rows.
//!
//! The store cannot express a dense rank, so ranking happens here in two steps:
//!
//! - **Grouping**: split the (date desc, score desc) row stream into per-date buckets
//! - **Evaluation**: decide whether a bucket position counts as "top N"
//!
//! ## Tie rule
//!
//! A row is in the top N when its 1-based position is at most N, or when it
//! ties with the row directly above it and that row is itself within the top N
//! by position. The rule only looks one step back, so it is not a dense rank:
//!
//! - `[100, 100, 90]`, N = 1: rows 0 and 1 count
//! - `[100, 90, 90, 80]`, N = 1: only row 0 counts
//! - `[100, 100, 100]`, N = 1: rows 0 and 1 count, row 2 does *not*, even
//!   though all three users hold the top score for the date
//!
//! The last case is a known limitation. A plain "ties with the previous row"
//! check would count row 2 there, but it would also count row 2 of
//! `[100, 90, 90, 80]`, which must stay outside the top 1. Callers that need
//! every holder of the maximum should use the top-score query instead.

mod evaluator;
mod grouper;

pub use evaluator::is_in_top_n;
pub use grouper::{DateBucket, DateGroups, group};
