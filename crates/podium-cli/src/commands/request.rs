//! Authenticated request command.
//!
//! The token payload names the query in its `query` field:
//!
//! | query        | fields            |
//! |--------------|-------------------|
//! | `dates`      | `n`               |
//! | `top_users`  | `date`            |
//! | `user_dates` | `user_id`, `n`    |
//!
//! The caller is authenticated and the payload validated before the store is
//! opened, so a rejected request never touches the database.

use anyhow::{Result, bail};
use podium::{DateKey, ExportFormat, RankingEngine, RequestGate, RequestParams, ScoreStore};
use tracing::info;

/// Query decoded from a request payload
#[derive(Debug, Clone, PartialEq)]
enum RequestQuery {
    Dates { n: i64 },
    TopUsers { date: DateKey },
    UserDates { user_id: i64, n: i64 },
}

impl RequestQuery {
    fn from_params(params: &RequestParams) -> Result<Self> {
        let query = match params.require_str("query")? {
            "dates" => RequestQuery::Dates {
                n: params.require_i64("n")?,
            },
            "top_users" => RequestQuery::TopUsers {
                date: params.require_date("date")?,
            },
            "user_dates" => RequestQuery::UserDates {
                user_id: params.require_i64("user_id")?,
                n: params.require_i64("n")?,
            },
            other => bail!("Unknown query {:?}", other),
        };
        Ok(query)
    }
}

/// Run the request command. `open_engine` is only called for an authenticated, valid request.
pub fn run<S, F>(
    open_engine: F,
    gate: &RequestGate,
    token: &str,
    secret: &str,
    exporter: &dyn ExportFormat,
) -> Result<String>
where
    S: ScoreStore,
    F: FnOnce() -> Result<RankingEngine<S>>,
{
    let params = gate.parse_request(token, secret)?;
    let query = RequestQuery::from_params(&params)?;
    info!("Authenticated request: {:?}", query);

    let engine = open_engine()?;
    let output = match query {
        RequestQuery::Dates { n } => exporter.format_dates(&engine.dates_with_at_least_n_scores(n)?),
        RequestQuery::TopUsers { date } => {
            exporter.format_users(&engine.users_with_top_score_on_date(&date)?)
        }
        RequestQuery::UserDates { user_id, n } => {
            exporter.format_dates(&engine.dates_when_user_was_in_top_n(user_id, n)?)
        }
    };
    Ok(output)
}
