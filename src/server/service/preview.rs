//! Chat lists for students, teachers and admins.
//!
//! Every chat of a list is summarized by its own task on a clone of the connection pool.
//! Results are put back in the order of the chats, and a failed task fails the whole list.

use sea_orm::DatabaseConnection;
use tokio::task::JoinSet;

use crate::server::{
    data::{
        chat::ChatRepository, lesson::LessonRepository, message::MessageRepository,
        section::SectionRepository, section_teacher::SectionTeacherRepository,
        teacher_info::TeacherInfoRepository, user::UserRepository,
    },
    error::{internal::InternalError, AppError},
    model::{
        chat::{Chat, ChatActivity, Reader},
        preview::ChatPreview,
    },
};

pub struct PreviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PreviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn for_student(&self, student_id: i32) -> Result<Vec<ChatPreview>, AppError> {
        let chats = ChatRepository::new(self.db)
            .get_by_student(student_id)
            .await?;

        self.build(chats, Reader::Student).await
    }

    /// Chats of the sections assigned to a teacher.
    pub async fn for_teacher(&self, teacher_id: i32) -> Result<Vec<ChatPreview>, AppError> {
        let section_ids = SectionTeacherRepository::new(self.db)
            .get_section_ids(teacher_id)
            .await?;
        let chats = ChatRepository::new(self.db)
            .get_by_sections(section_ids)
            .await?;

        self.build(chats, Reader::Teacher).await
    }

    /// Teacher chat list as seen by an admin.
    ///
    /// # Returns
    /// - `Ok(None)` - No teacher with that id
    pub async fn for_admin(&self, teacher_id: i32) -> Result<Option<Vec<ChatPreview>>, AppError> {
        let teacher = TeacherInfoRepository::new(self.db)
            .find_profile(teacher_id)
            .await?;
        if teacher.is_none() {
            return Ok(None);
        }

        self.for_teacher(teacher_id).await.map(Some)
    }

    async fn build(&self, chats: Vec<Chat>, reader: Reader) -> Result<Vec<ChatPreview>, AppError> {
        let mut tasks = JoinSet::new();

        for (index, chat) in chats.into_iter().enumerate() {
            let db = self.db.clone();
            tasks.spawn(async move { (index, load_preview(&db, chat, reader).await) });
        }

        let mut previews = Vec::with_capacity(tasks.len());
        while let Some(joined) = tasks.join_next().await {
            let (index, preview) =
                joined.map_err(|err| InternalError::PreviewTask(err.to_string()))?;
            previews.push((index, preview?));
        }

        previews.sort_by_key(|(index, _)| *index);

        Ok(previews.into_iter().map(|(_, preview)| preview).collect())
    }
}

async fn load_preview(
    db: &DatabaseConnection,
    chat: Chat,
    reader: Reader,
) -> Result<ChatPreview, AppError> {
    let messages = MessageRepository::new(db).get_by_chat(chat.id).await?;

    let student_first_name = UserRepository::new(db)
        .find_by_id(chat.student_id)
        .await?
        .map(|user| user.first_name)
        .unwrap_or_default();
    let section_name = SectionRepository::new(db)
        .find_by_id(chat.path.section_id)
        .await?
        .map(|section| section.name)
        .unwrap_or_default();
    let lesson_name = LessonRepository::new(db)
        .find_by_id(chat.path.lesson_id)
        .await?
        .map(|lesson| lesson.name)
        .unwrap_or_default();

    Ok(ChatPreview {
        chat,
        student_first_name,
        section_name,
        lesson_name,
        activity: ChatActivity::from_messages(messages, reader),
    })
}
