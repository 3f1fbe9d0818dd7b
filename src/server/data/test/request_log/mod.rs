use chrono::{Duration, Utc};

use crate::server::data::request_log::RequestLogRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
