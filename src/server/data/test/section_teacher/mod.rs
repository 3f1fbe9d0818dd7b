use crate::server::data::section_teacher::SectionTeacherRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod assign;
