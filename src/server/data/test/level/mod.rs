use crate::server::{data::level::LevelRepository, model::level::LevelPath};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find;
