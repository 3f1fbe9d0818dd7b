mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router, service::alert::ALERT_TARGET, service::mail::Mailer,
    startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    startup::init_tracing(&config, &http_client);

    let db = startup::connect_to_database(&config).await?;
    let mailer = Mailer::from_config(&config).await?;

    let state = AppState::new(db, http_client, mailer, &config);
    let app = router::router(state);

    let listener = TcpListener::bind(&config.server_addr).await?;

    tracing::info!(target: ALERT_TARGET, "Server started on {}", config.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
