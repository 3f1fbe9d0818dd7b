use crate::server::{data::course::CourseRepository, model::course::CreateCourseParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod increment_homework;
mod update;
