//! VK social login.
//!
//! The browser is redirected to VK's OAuth dialog; VK redirects back to the callback with an
//! authorization code. The code is exchanged for an access token and the email of the VK
//! account, and the first name is read from the VK API. Known emails sign in directly, new
//! ones get a student account with a generated password that is mailed to them.

use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    config::VkConfig,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::Role,
        user::{normalize_email, RegisterParam},
    },
    service::{account::insert_account, alert::ALERT_TARGET, mail::Mailer},
    util::{code::generate_password, jwt::JwtKeys},
};

const VK_API_VERSION: &str = "5.124";

/// Token endpoint answer; VK reports failures in the same body.
#[derive(Debug, Deserialize)]
struct VkAccessToken {
    access_token: Option<String>,
    email: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct VkUsersResponse {
    #[serde(default)]
    response: Vec<VkUser>,
}

#[derive(Debug, Deserialize)]
struct VkUser {
    #[serde(default)]
    first_name: String,
}

pub struct VkService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    vk: &'a VkConfig,
    jwt: &'a JwtKeys,
    mailer: &'a Mailer,
}

impl<'a> VkService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        vk: &'a VkConfig,
        jwt: &'a JwtKeys,
        mailer: &'a Mailer,
    ) -> Self {
        Self {
            db,
            http_client,
            vk,
            jwt,
            mailer,
        }
    }

    /// URL of the VK authorization dialog requesting the email scope.
    pub fn login_url(&self) -> Result<Url, AppError> {
        Url::parse_with_params(
            &self.vk.auth_url,
            &[
                ("client_id", self.vk.app_id.as_str()),
                ("redirect_uri", self.vk.callback_url.as_str()),
                ("scope", "email"),
                ("response_type", "code"),
                ("v", VK_API_VERSION),
            ],
        )
        .map_err(|err| AppError::InternalError(format!("Invalid VK auth url: {}", err)))
    }

    /// Completes the VK login and returns a token for the matching or new student.
    ///
    /// # Arguments
    /// - `code` - Authorization code from the callback query
    ///
    /// # Returns
    /// - `Ok(String)` - Token of the signed-in user
    /// - `Err(AuthError::VkLoginFailed)` - VK rejected the code or returned no email
    /// - `Err(AppError::ReqwestErr)` - VK unreachable or answered with malformed JSON
    pub async fn callback(&self, code: &str) -> Result<String, AppError> {
        let token = self.exchange_code(code).await?;

        if let Some(error) = token.error {
            return Err(AuthError::VkLoginFailed(format!(
                "{}: {}",
                error,
                token.error_description.unwrap_or_default()
            ))
            .into());
        }

        let access_token = token
            .access_token
            .ok_or_else(|| AuthError::VkLoginFailed("no access token".to_string()))?;
        let email = token
            .email
            .map(|email| normalize_email(&email))
            .filter(|email| !email.is_empty())
            .ok_or_else(|| AuthError::VkLoginFailed("account has no email".to_string()))?;

        if let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? {
            return self.jwt.issue(user.id, user.role);
        }

        let first_name = self.fetch_first_name(&access_token).await?;
        let first_name = if first_name.trim().is_empty() {
            email.split('@').next().unwrap_or_default().to_string()
        } else {
            first_name
        };

        let password = generate_password();
        let user = insert_account(
            self.db,
            RegisterParam::new(&email, &first_name, &password)?,
            Role::Student,
        )
        .await?;

        self.mailer.send_new_password(&user.email, &password).await?;

        tracing::info!(
            target: ALERT_TARGET,
            "New student registered via VK: {} ({})",
            user.first_name,
            user.email
        );

        self.jwt.issue(user.id, user.role)
    }

    async fn exchange_code(&self, code: &str) -> Result<VkAccessToken, AppError> {
        let token = self
            .http_client
            .get(&self.vk.token_url)
            .query(&[
                ("client_id", self.vk.app_id.as_str()),
                ("client_secret", self.vk.secret_key.as_str()),
                ("redirect_uri", self.vk.callback_url.as_str()),
                ("code", code),
            ])
            .send()
            .await?
            .json::<VkAccessToken>()
            .await?;

        Ok(token)
    }

    async fn fetch_first_name(&self, access_token: &str) -> Result<String, AppError> {
        let users = self
            .http_client
            .get(format!("{}/users.get", self.vk.api_url))
            .query(&[
                ("fields", "bdate"),
                ("access_token", access_token),
                ("v", VK_API_VERSION),
            ])
            .send()
            .await?
            .json::<VkUsersResponse>()
            .await?;

        Ok(users
            .response
            .into_iter()
            .next()
            .map(|user| user.first_name)
            .unwrap_or_default())
    }
}
