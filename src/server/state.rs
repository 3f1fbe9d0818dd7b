//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::{Config, VkConfig},
    service::mail::Mailer,
    util::jwt::JwtKeys,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `JwtKeys` and `Mailer` hold keys, templates and an SMTP pool handle
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for VK requests.
    ///
    /// Configured without redirects so a misbehaving upstream cannot bounce requests
    /// elsewhere.
    pub http_client: reqwest::Client,

    /// Signing and verification keys for access tokens.
    pub jwt: JwtKeys,

    pub mailer: Mailer,

    /// VK login settings, `None` when VK login is disabled.
    pub vk: Option<VkConfig>,

    /// Directory holding one video file per lesson.
    pub video_dir: PathBuf,

    pub max_upload_bytes: usize,

    pub recovery_code_ttl_minutes: i64,
}

impl AppState {
    /// Creates the application state from its connections and the configuration.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `mailer` - Outgoing mail
    /// - `config` - Token, storage, VK and recovery settings
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        mailer: Mailer,
        config: &Config,
    ) -> Self {
        Self {
            db,
            http_client,
            jwt: JwtKeys::new(&config.jwt_secret, config.jwt_ttl_hours),
            mailer,
            vk: config.vk.clone(),
            video_dir: config.video_dir.clone(),
            max_upload_bytes: config.max_upload_bytes,
            recovery_code_ttl_minutes: config.recovery_code_ttl_minutes,
        }
    }
}
