//! # podium
//!
//! Tie-aware ranking over per-date user scores.
//!
//! This crate provides:
//! - Score rows and boundary input parsing
//! - Date grouping and the top-N tie rule
//! - The ranking engine answering the three score queries
//! - Read-only SQLite and in-memory score stores
//! - A request gate for secret-checked, token-encoded parameters
//! - Configuration and result formatting for the CLI

pub mod auth;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod rank;
pub mod score;
pub mod store;

pub use auth::{RequestGate, RequestParams};
pub use config::{PodiumConfig, PodiumConfigBuilder};
pub use engine::RankingEngine;
pub use error::{Error, Result};
pub use export::{ExportFormat, JsonExporter, OutputFormat, TextExporter};
pub use rank::{DateBucket, DateGroups, group, is_in_top_n};
pub use score::{DATE_FORMAT, DateKey, ScoreRow, parse_count, parse_date, parse_user_id};
pub use store::{InMemoryScoreStore, ScoreStore, SqliteScoreStore};
