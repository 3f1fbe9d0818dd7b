pub use super::chat::Entity as Chat;
pub use super::course::Entity as Course;
pub use super::lesson::Entity as Lesson;
pub use super::lesson_carousel::Entity as LessonCarousel;
pub use super::level::Entity as Level;
pub use super::message::Entity as Message;
pub use super::recovery_code::Entity as RecoveryCode;
pub use super::request_log::Entity as RequestLog;
pub use super::section::Entity as Section;
pub use super::section_teacher::Entity as SectionTeacher;
pub use super::teacher_info::Entity as TeacherInfo;
pub use super::user::Entity as User;
