//! Dates with a minimum number of scores.

use anyhow::Result;
use podium::{ExportFormat, RankingEngine, ScoreStore, parse_count};

/// Run the dates command
pub fn run<S: ScoreStore>(
    engine: &RankingEngine<S>,
    min_count: &str,
    exporter: &dyn ExportFormat,
) -> Result<String> {
    let n = parse_count(min_count)?;
    let dates = engine.dates_with_at_least_n_scores(n)?;
    Ok(exporter.format_dates(&dates))
}
