use crate::server::{data::section::SectionRepository, model::section::SectionPath};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
