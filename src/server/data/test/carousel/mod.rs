use crate::server::{
    data::carousel::CarouselRepository,
    model::{carousel::LessonCarousel, level::LevelPath},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod save;
