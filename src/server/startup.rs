use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Default tracing filter when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();
}

/// Connects to the PostgreSQL database and creates the clan table if it is absent.
///
/// Establishes a connection pool using the connection settings from configuration, then
/// runs the schema migration. This function must complete successfully before the
/// application accepts any request; failures are fatal and not retried.
///
/// # Arguments
/// - `config` - Application configuration containing the database settings
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with the schema in place
/// - `Err(AppError::DatabaseConnection)` - Failed to connect or to create the table
/// - `Err(AppError::ConfigErr)` - Connection settings do not form a valid URL
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(config.database_url()?);
    opt.sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .map_err(AppError::DatabaseConnection)?;

    Migrator::up(&db, None)
        .await
        .map_err(AppError::DatabaseConnection)?;

    tracing::info!(
        "Connected to database {} at {}:{}",
        config.db_name,
        config.db_host,
        config.db_port
    );

    Ok(db)
}

/// Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
