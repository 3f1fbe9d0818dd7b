use crate::{
    model::chat::{AdminChatPreviewDto, StudentChatPreviewDto, TeacherChatPreviewDto},
    server::model::chat::{Chat, ChatActivity},
};

/// A chat with the names and message summary shown in chat lists.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPreview {
    pub chat: Chat,
    pub student_first_name: String,
    pub section_name: String,
    pub lesson_name: String,
    pub activity: ChatActivity,
}

impl ChatPreview {
    pub fn into_student_dto(self) -> StudentChatPreviewDto {
        StudentChatPreviewDto {
            chat_id: self.chat.id,
            sections_id: self.chat.path.section_id,
            sections_name: self.section_name,
            lesson_id: self.chat.path.lesson_id,
            lesson_name: self.lesson_name,
            last_message: self.activity.last_teacher_answer(),
            not_view_message: self.activity.unread,
        }
    }

    pub fn into_teacher_dto(self) -> TeacherChatPreviewDto {
        TeacherChatPreviewDto {
            chat_id: self.chat.id,
            student_id: self.chat.student_id,
            student_first_name: self.student_first_name,
            sections_id: self.chat.path.section_id,
            sections_name: self.section_name,
            lesson_id: self.chat.path.lesson_id,
            lesson_name: self.lesson_name,
            time: self.activity.answer_deadline(),
            ahtung: self.chat.ahtung,
            not_view_message: self.activity.unread,
        }
    }

    pub fn into_admin_dto(self) -> AdminChatPreviewDto {
        AdminChatPreviewDto {
            chat_id: self.chat.id,
            student_id: self.chat.student_id,
            student_first_name: self.student_first_name,
            sections_id: self.chat.path.section_id,
            sections_name: self.section_name,
            lesson_id: self.chat.path.lesson_id,
            lesson_name: self.lesson_name,
            time: self.activity.newest_time(),
            rating: self.chat.rating.map(|rating| rating.as_str().to_string()),
            last_message: self.activity.last_message(),
            not_view_message: self.activity.unread,
        }
    }
}
