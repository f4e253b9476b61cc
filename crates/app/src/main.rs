use std::time::Duration;

use engine::{Engine, ExpenseRepository};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, DatabaseConnection};
use settings::Database;

mod settings;

const KEEP_ALIVE: Duration = Duration::from_secs(60 * 60 * 24 * 365);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expense_tracker={level},server={level},engine={level},tower_http={level}",
            level = settings.app.level
        ))
        .init();

    let server = settings.server;
    tracing::info!("Connecting to database {:?}...", server.database);
    let db = connect_database(&server.database, server.max_connections).await?;

    let repository = ExpenseRepository::new(db.clone());
    let engine = Engine::builder().repository(repository).build()?;

    let bind = server.bind.unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let served = server::run_with_listener(engine, listener, shutdown_signal()).await;

    tracing::info!("Closing database connections...");
    if let Err(err) = db.close().await {
        tracing::error!("failed to close database: {err}");
    }

    served?;
    Ok(())
}

async fn connect_database(
    config: &Database,
    max_connections: Option<u32>,
) -> Result<DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let url = match config {
        Database::Memory => String::from("sqlite::memory:"),
        Database::Sqlite(path) => format!("sqlite:{}?mode=rwc", path),
    };

    let mut options = ConnectOptions::new(url);
    match config {
        // An in-memory database lives and dies with its single connection.
        Database::Memory => {
            options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(KEEP_ALIVE)
                .max_lifetime(KEEP_ALIVE);
        }
        Database::Sqlite(_) => {
            if let Some(max) = max_connections {
                options.max_connections(max);
            }
        }
    }

    let database = sea_orm::Database::connect(options).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
