use chrono::{Duration, Utc};

use crate::server::{
    data::{request_log::RequestLogRepository, user::UserRepository},
    error::AppError,
    service::activity::ActivityService,
};
use test_utils::{builder::TestBuilder, factory};

mod record;
