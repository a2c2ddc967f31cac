//! `db` command handlers.

use clap::Subcommand;
use svcat_core::AppConfig;

/// Sub-commands available under `db`.
#[derive(Debug, Subcommand)]
pub enum DbCommands {
    /// Check that the database is reachable
    Ping,
    /// Apply pending migrations
    Migrate,
    /// Show row counts for each catalog table
    Stats,
}

pub(crate) async fn run_db_command(config: &AppConfig, command: DbCommands) -> anyhow::Result<()> {
    let pool = svcat_db::connect_pool_from_config(config).await?;

    match command {
        DbCommands::Ping => {
            svcat_db::ping(&pool).await?;
            println!("database ok");
        }
        DbCommands::Migrate => {
            let applied = svcat_db::run_migrations(&pool).await?;
            println!("applied {applied} migrations");
        }
        DbCommands::Stats => {
            let counts = svcat_db::catalog_counts(&pool).await?;
            println!("categories   {}", counts.categories);
            println!("materials    {}", counts.materials);
            println!("collections  {}", counts.collections);
            println!("products     {}", counts.products);
            println!("variants     {}", counts.variants);
        }
    }

    pool.close().await;
    Ok(())
}
