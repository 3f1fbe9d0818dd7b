use crate::server::{
    data::{recovery_code::RecoveryCodeRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    service::{mail::Mailer, recovery::RecoveryService},
    util::password::verify_password,
};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod send_code;
