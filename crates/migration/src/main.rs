use clap::{Parser, ValueEnum};
use sea_orm::Database;
use sea_orm_migration::prelude::*;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Status,
}

/// Apply or inspect the expense-control schema.
#[derive(Debug, Parser)]
struct Cli {
    #[arg(value_enum, default_value = "up")]
    command: Command,
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./expense_control.db?mode=rwc"
    )]
    database_url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let db = Database::connect(&cli.database_url).await?;

    match cli.command {
        Command::Up => migration::Migrator::up(&db, None).await?,
        Command::Down => migration::Migrator::down(&db, None).await?,
        Command::Fresh => migration::Migrator::fresh(&db).await?,
        Command::Status => migration::Migrator::status(&db).await?,
    }

    Ok(())
}
