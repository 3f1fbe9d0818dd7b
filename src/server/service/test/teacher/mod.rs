use crate::server::{
    data::{
        section_teacher::SectionTeacherRepository, teacher_info::TeacherInfoRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{auth::Role, teacher::UpdateTeacherParam, user::RegisterParam},
    service::teacher::TeacherService,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod sections;
mod update;
