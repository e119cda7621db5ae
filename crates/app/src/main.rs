use std::net::SocketAddr;

use clap::Parser;
use migration::{Migrator, MigratorTrait};
use settings::Database;

mod settings;

/// REST backend for tracking household expenses and incomes.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Settings file, with or without the `.toml` extension.
    #[arg(long, default_value = "settings")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();
    let settings = settings::Settings::new(&args.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expense_control={level},server={level},engine={level},tower_http={level}",
            level = settings.app.level
        ))
        .init();

    let db = parse_database(&settings.server.database).await?;
    tracing::info!("database ready");

    let engine = engine::Engine::builder()
        .database(db)
        .person_delete(settings.policy.person_delete)
        .unique_person_names(settings.policy.unique_person_names)
        .paging(settings.pagination)
        .build()
        .await?;
    tracing::info!(
        person_delete = ?settings.policy.person_delete,
        unique_person_names = settings.policy.unique_person_names,
        "engine built"
    );

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr: SocketAddr = format!("{}:{}", bind, settings.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    server::run_with_listener(engine, listener).await?;

    Ok(())
}

async fn parse_database(
    config: &Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let url = match config {
        Database::Memory => String::from("sqlite::memory:"),
        Database::Sqlite(path) => format!("sqlite:{}?mode=rwc", path),
    };

    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}
