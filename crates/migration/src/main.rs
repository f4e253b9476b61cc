use std::error::Error;

use clap::{Parser, Subcommand};
use migration::Migrator;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;

#[derive(Parser, Debug)]
#[command(name = "expense_migrate")]
#[command(about = "Apply or roll back the expense tracker schema")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./expenses.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Default, PartialEq)]
enum Command {
    /// Apply every pending migration
    #[default]
    Up,
    /// Roll back every applied migration
    Down {
        /// Only roll back this many migrations
        #[arg(long)]
        steps: Option<u32>,
    },
    /// Drop every table, then apply all migrations again
    Fresh,
    /// List applied and pending migrations
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();
    let db = Database::connect(&cli.database_url).await?;

    match cli.command.unwrap_or_default() {
        Command::Up => Migrator::up(&db, None).await?,
        Command::Down { steps } => Migrator::down(&db, steps).await?,
        Command::Fresh => Migrator::fresh(&db).await?,
        Command::Status => Migrator::status(&db).await?,
    }

    db.close().await?;
    Ok(())
}
