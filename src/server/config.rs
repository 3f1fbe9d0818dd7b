use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const VK_AUTH_URL: &str = "https://oauth.vk.com/authorize";
const VK_TOKEN_URL: &str = "https://oauth.vk.com/access_token";
const VK_API_URL: &str = "https://api.vk.com/method";
const TELEGRAM_API_URL: &str = "https://api.telegram.org";

pub struct Config {
    pub database_url: String,
    pub server_addr: String,

    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,

    pub video_dir: PathBuf,
    pub max_upload_bytes: usize,

    pub recovery_code_ttl_minutes: i64,
    pub mail_recovery_template: Option<PathBuf>,
    pub mail_new_password_template: Option<PathBuf>,
    pub smtp: Option<SmtpConfig>,

    pub vk: Option<VkConfig>,
    pub telegram: Option<TelegramConfig>,
    pub log_debug: bool,
}

pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub login: String,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct VkConfig {
    pub app_id: String,
    pub secret_key: String,
    pub callback_url: String,

    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
}

pub struct TelegramConfig {
    pub api_url: String,
    pub token: String,
    pub chat_id: String,
    pub channel_id: String,
}

impl TelegramConfig {
    /// Debug alerts go to the developer chat, production alerts to the channel.
    pub fn target(&self, debug: bool) -> &str {
        if debug {
            &self.chat_id
        } else {
            &self.channel_id
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let smtp = group(&lookup, "SMTP", &["SMTP_HOST", "SMTP_PORT", "SMTP_LOGIN", "SMTP_PASSWORD"])?
            .map(|values| -> Result<SmtpConfig, ConfigError> {
                let [host, port, login, password] = values;
                Ok(SmtpConfig {
                    port: parse("SMTP_PORT", port)?,
                    host,
                    login,
                    password,
                })
            })
            .transpose()?;

        let vk = group(&lookup, "VK", &["VK_APP_ID", "VK_SECRET_KEY", "VK_CALLBACK_URL"])?.map(
            |[app_id, secret_key, callback_url]| VkConfig {
                app_id,
                secret_key,
                callback_url,
                auth_url: VK_AUTH_URL.to_string(),
                token_url: VK_TOKEN_URL.to_string(),
                api_url: VK_API_URL.to_string(),
            },
        );

        let telegram = group(
            &lookup,
            "Telegram",
            &["TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID", "TELEGRAM_CHANNEL_ID"],
        )?
        .map(|[token, chat_id, channel_id]| TelegramConfig {
            api_url: TELEGRAM_API_URL.to_string(),
            token,
            chat_id,
            channel_id,
        });

        Ok(Self {
            database_url: required(&lookup, "DATABASE_URL")?,
            server_addr: lookup("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            jwt_secret: required(&lookup, "JWT_SECRET")?,
            jwt_ttl_hours: optional(&lookup, "JWT_TTL_HOURS", 720)?,
            video_dir: lookup("VIDEO_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./videos")),
            max_upload_bytes: optional::<usize, _>(&lookup, "MAX_UPLOAD_MB", 2048)?
                .saturating_mul(1024 * 1024),
            recovery_code_ttl_minutes: optional(&lookup, "RECOVERY_CODE_TTL_MINUTES", 60)?,
            mail_recovery_template: lookup("MAIL_RECOVERY_TEMPLATE").map(PathBuf::from),
            mail_new_password_template: lookup("MAIL_NEW_PASSWORD_TEMPLATE").map(PathBuf::from),
            smtp,
            vk,
            telegram,
            log_debug: optional(&lookup, "LOG_DEBUG", true)?,
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<T, F>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => parse(name, value),
        None => Ok(default),
    }
}

fn parse<T: FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}

/// Reads a group of variables that must be set together.
///
/// Returns `None` when none of them is set.
fn group<F, const N: usize>(
    lookup: &F,
    group: &str,
    names: &[&str; N],
) -> Result<Option<[String; N]>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let values = (*names).map(|name| lookup(name));

    if values.iter().all(Option::is_none) {
        return Ok(None);
    }

    if let Some(index) = values.iter().position(Option::is_none) {
        return Err(ConfigError::IncompleteGroup {
            group: group.to_string(),
            missing: names[index].to_string(),
        });
    }

    Ok(Some(values.map(Option::unwrap_or_default)))
}
