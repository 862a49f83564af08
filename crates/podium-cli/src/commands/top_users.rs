//! Users with the top score on a date.

use anyhow::Result;
use podium::{DateKey, ExportFormat, RankingEngine, ScoreStore, parse_date};

/// Run the top-users command
pub fn run<S: ScoreStore>(
    engine: &RankingEngine<S>,
    date: &str,
    exporter: &dyn ExportFormat,
) -> Result<String> {
    let date = DateKey::from(parse_date(date)?);
    let users = engine.users_with_top_score_on_date(&date)?;
    Ok(exporter.format_users(&users))
}
