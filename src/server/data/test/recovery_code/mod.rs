use crate::server::data::recovery_code::RecoveryCodeRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod replace;
