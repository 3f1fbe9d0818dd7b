use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{request_log::RequestLogRepository, user::UserRepository},
    error::AppError,
};

/// Requests further apart than this start a new visit.
pub const SESSION_GAP_MINUTES: i64 = 30;

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Logs a request and adds the time since the previous one to the user's time on site.
    ///
    /// # Returns
    /// - `Ok(seconds)` - Seconds added to the user's time on site
    pub async fn record(
        &self,
        user_id: i32,
        url: &str,
        now: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        let requests = RequestLogRepository::new(self.db);

        let elapsed = requests
            .latest_for_user(user_id)
            .await?
            .map(|latest| now - latest)
            .filter(|elapsed| *elapsed >= Duration::zero())
            .filter(|elapsed| *elapsed < Duration::minutes(SESSION_GAP_MINUTES))
            .map(|elapsed| elapsed.num_seconds())
            .unwrap_or(0);

        if elapsed > 0 {
            UserRepository::new(self.db)
                .add_time(user_id, elapsed)
                .await?;
        }

        requests.create(user_id, url.to_string(), now).await?;

        Ok(elapsed)
    }
}
