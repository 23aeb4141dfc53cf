//! Migration CLI tool for the content schema.
//!
//! Reads `DATABASE_URL` (a `.env` file is honoured) and accepts the standard
//! `up`, `down`, `status`, `fresh` and `refresh` subcommands.

use sea_orm_migration::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    cli::run_cli(migration::Migrator).await;
}
