use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::Role,
        user::{ChangePasswordParam, RegisterParam},
    },
    service::account::AccountService,
    util::jwt::JwtKeys,
};
use test_utils::builder::TestBuilder;

use super::SECRET;

mod authorize;
mod change_password;
mod register;
