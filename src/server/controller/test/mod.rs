use std::path::Path;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use sea_orm::DatabaseConnection;
use tower::ServiceExt;

use crate::{
    model::api::ErrorDto,
    server::{
        config::Config,
        middleware::auth::TOKEN_HEADER,
        model::auth::Role,
        router::router,
        service::mail::Mailer,
        state::AppState,
        util::jwt::JwtKeys,
    },
};
use test_utils::{builder::TestBuilder, factory};


const SECRET: &str = "secret";

fn test_config(video_dir: Option<&Path>) -> Config {
    let video_dir = video_dir.map(|dir| dir.display().to_string());

    Config::from_lookup(|name| match name {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        "JWT_SECRET" => Some(SECRET.to_string()),
        "MAX_UPLOAD_MB" => Some("1".to_string()),
        "VIDEO_DIR" => video_dir.clone(),
        _ => None,
    })
    .unwrap()
}

fn app(db: &DatabaseConnection, config: &Config, mailer: Mailer) -> Router {
    router(AppState::new(
        db.clone(),
        reqwest::Client::new(),
        mailer,
        config,
    ))
}

fn test_router(db: &DatabaseConnection) -> Router {
    app(db, &test_config(None), Mailer::log_only())
}

fn token(user_id: i32, role: Role) -> String {
    JwtKeys::new(SECRET, 720).issue(user_id, role).unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Message of an `{"error": ...}` body; panics on any other body.
async fn error_message(response: Response) -> String {
    let error: ErrorDto = serde_json::from_slice(&body_bytes(response).await).unwrap();
    error.error
}
