mod db;
mod import;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::db::DbCommands;
use crate::import::ImportArgs;

#[derive(Debug, Parser)]
#[command(name = "svcat")]
#[command(about = "Silverware catalog import tool")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build the catalog from a source file and write it out
    Import(ImportArgs),
    /// Database operations
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = svcat_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let result = match cli.command {
        None => import::run_import(&config, &ImportArgs::default()).await,
        Some(Commands::Import(args)) => import::run_import(&config, &args).await,
        Some(Commands::Db { command }) => db::run_db_command(&config, command).await,
    };

    if let Err(ref e) = result {
        tracing::error!(error = %format!("{e:#}"), "svcat failed");
    }
    result
}
