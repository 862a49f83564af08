mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use podium::{
    InMemoryScoreStore, PodiumConfig, PodiumConfigBuilder, RankingEngine, RequestGate, ScoreStore,
    SqliteScoreStore,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries query results only
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("podium=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let file_config = match PodiumConfig::load(&args.config) {
        Ok(c) => c,
        Err(e) if e.is_not_found() => PodiumConfig::default(),
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            PodiumConfig::default()
        }
    };

    let mut builder = PodiumConfigBuilder::from_config(file_config);
    if let Some(database) = &args.database {
        builder = builder.database(database);
    }
    if let Some(format) = args.format {
        builder = builder.format(format);
    }
    let config = builder.build();

    let open_engine = || -> Result<RankingEngine<Box<dyn ScoreStore>>> {
        let store: Box<dyn ScoreStore> = match &args.scores {
            Some(path) => Box::new(InMemoryScoreStore::from_json_file(path)?),
            None => Box::new(
                SqliteScoreStore::open(&config.database)
                    .with_context(|| format!("Failed to open {}", config.database.display()))?,
            ),
        };
        Ok(RankingEngine::new(store))
    };
    let exporter = config.format.exporter();

    let output = match args.command {
        Command::Dates { min_count } => {
            commands::dates::run(&open_engine()?, &min_count, &*exporter)?
        }
        Command::TopUsers { date } => {
            commands::top_users::run(&open_engine()?, &date, &*exporter)?
        }
        Command::UserDates { user, top } => {
            commands::user_dates::run(&open_engine()?, &user, &top, &*exporter)?
        }
        Command::Request { token, secret } => {
            let api_secret = config
                .api_secret
                .as_deref()
                .context("api_secret is not configured; requests cannot be authenticated")?;
            let gate = RequestGate::new(api_secret);
            // Authenticate before the store is opened
            commands::request::run(open_engine, &gate, &token, &secret, &*exporter)?
        }
    };

    info!("Query complete ({} output)", config.format);
    println!("{}", output);
    Ok(())
}
