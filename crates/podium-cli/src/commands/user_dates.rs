//! Dates on which a user ranked within the top N.

use anyhow::Result;
use podium::{ExportFormat, RankingEngine, ScoreStore, parse_count, parse_user_id};

/// Run the user-dates command
pub fn run<S: ScoreStore>(
    engine: &RankingEngine<S>,
    user: &str,
    top: &str,
    exporter: &dyn ExportFormat,
) -> Result<String> {
    let user_id = parse_user_id(user)?;
    let n = parse_count(top)?;
    let dates = engine.dates_when_user_was_in_top_n(user_id, n)?;
    Ok(exporter.format_dates(&dates))
}
