use crate::server::{
    data::teacher_info::TeacherInfoRepository, error::AppError, model::teacher::TeacherCounter,
};
use test_utils::{builder::TestBuilder, factory};

mod find_profile;
mod get_all_profiles;
mod increment;
mod record_answer;
