use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::server::{config::Config, error::AppError, service::alert::AlertLayer};

const DEFAULT_LOG_FILTER: &str = "tarasova_school=info,tower_http=info";

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the database schema is
/// up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for VK and Telegram requests.
///
/// Redirects are disabled so requests cannot be bounced to unexpected hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Installs the global tracing subscriber.
///
/// Logs go to stdout filtered by `RUST_LOG`. When Telegram is configured, errors and alert
/// events at info level and above are forwarded to it regardless of `RUST_LOG`.
pub fn init_tracing(config: &Config, http_client: &reqwest::Client) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let alerts = config
        .telegram
        .as_ref()
        .map(|telegram| {
            AlertLayer::spawn(http_client.clone(), telegram, config.log_debug)
                .with_filter(LevelFilter::INFO)
        });

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(filter))
        .with(alerts)
        .init();
}
