mod carousel;
mod chat;
mod course;
mod lesson;
mod level;
mod recovery_code;
mod request_log;
mod section;
mod section_teacher;
mod teacher_info;
