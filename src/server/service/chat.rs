//! Lesson chats from the student, teacher and admin side.
//!
//! Students reach their own chats only. Teachers reach chats of sections assigned to them,
//! anything else answers `permission denied`. Opening a chat marks the messages of the other
//! side as read; the admin view never touches read flags.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        chat::ChatRepository, course::CourseRepository, message::MessageRepository,
        section_teacher::SectionTeacherRepository, teacher_info::TeacherInfoRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        auth::Role,
        chat::{message_text, Chat, ChatThread, CreateMessageParam, Message, Rating, Reader},
        lesson::LessonPath,
        teacher::TeacherCounter,
    },
    service::lesson::LessonService,
};

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Chat of a student on a lesson, with teacher messages marked read.
    ///
    /// # Returns
    /// - `Ok(None)` - No lesson at that path
    /// - `Ok(Some(thread))` - Thread without chat id when the student has not written yet
    pub async fn student_thread(
        &self,
        path: LessonPath,
        student_id: i32,
    ) -> Result<Option<ChatThread>, AppError> {
        if !LessonService::new(self.db).exists(path).await? {
            return Ok(None);
        }

        let chat = ChatRepository::new(self.db)
            .find_by_lesson_and_student(path.lesson_id, student_id)
            .await?;

        let thread = match chat {
            Some(chat) => self.open(chat, Some(Reader::Student)).await?,
            None => ChatThread::empty(path, student_id),
        };

        Ok(Some(thread))
    }

    /// Sends a student message on a lesson, creating the chat on the first message.
    ///
    /// # Returns
    /// - `Ok(None)` - No lesson at that path
    /// - `Err(AppError::BadRequest)` - Empty text
    pub async fn student_send(
        &self,
        path: LessonPath,
        student_id: i32,
        text: &str,
    ) -> Result<Option<Message>, AppError> {
        let text = message_text(text)?;

        if !LessonService::new(self.db).exists(path).await? {
            return Ok(None);
        }

        let chats = ChatRepository::new(self.db);
        let chat = match chats.find_by_lesson_and_student(path.lesson_id, student_id).await? {
            Some(chat) => chat,
            None => chats.create(path, student_id).await?,
        };

        let message = append(self.db, &chat, student_id, Role::Student, text).await?;

        Ok(Some(message))
    }

    /// Chat by id for its own student.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Chat not found
    /// - `Err(AuthError::AccessDenied)` - Chat belongs to another student
    pub async fn student_chat(&self, chat_id: i32, student_id: i32) -> Result<ChatThread, AppError> {
        let chat = self.owned_chat(chat_id, student_id).await?;

        self.open(chat, Some(Reader::Student)).await
    }

    pub async fn student_reply(
        &self,
        chat_id: i32,
        student_id: i32,
        text: &str,
    ) -> Result<Message, AppError> {
        let text = message_text(text)?;
        let chat = self.owned_chat(chat_id, student_id).await?;

        append(self.db, &chat, student_id, Role::Student, text).await
    }

    /// Chat by id for a teacher of its section, with student messages marked read.
    pub async fn teacher_chat(&self, chat_id: i32, teacher_id: i32) -> Result<ChatThread, AppError> {
        let chat = self.assigned_chat(chat_id, teacher_id).await?;

        self.open(chat, Some(Reader::Teacher)).await
    }

    /// Sends a teacher answer.
    ///
    /// When the newest message is the student's, the time since it is counted as the
    /// teacher's answer time.
    pub async fn teacher_reply(
        &self,
        chat_id: i32,
        teacher_id: i32,
        text: &str,
    ) -> Result<Message, AppError> {
        let text = message_text(text)?;
        let chat = self.assigned_chat(chat_id, teacher_id).await?;

        let txn = self.db.begin().await?;

        let newest = MessageRepository::new(&txn).newest(chat.id).await?;
        let message = append(&txn, &chat, teacher_id, Role::Teacher, text).await?;
        if let Some(newest) = newest.filter(Message::is_from_student) {
            let seconds = (message.created_at - newest.created_at).num_seconds().max(0);
            TeacherInfoRepository::new(&txn)
                .record_answer(teacher_id, seconds)
                .await?;
        }

        txn.commit().await?;

        Ok(message)
    }

    /// Toggles the escalation flag of a chat.
    ///
    /// Switching it on records the teacher and increments their ahtung counter.
    ///
    /// # Returns
    /// - `Ok(ahtung)` - The new flag value
    pub async fn toggle_ahtung(&self, chat_id: i32, teacher_id: i32) -> Result<bool, AppError> {
        let chat = self.assigned_chat(chat_id, teacher_id).await?;
        let ahtung = !chat.ahtung;

        let txn = self.db.begin().await?;

        if ahtung {
            ChatRepository::new(&txn)
                .set_ahtung(chat.id, true, Some(teacher_id))
                .await?;
            TeacherInfoRepository::new(&txn)
                .increment(teacher_id, TeacherCounter::Ahtung)
                .await?;
        } else {
            ChatRepository::new(&txn)
                .set_ahtung(chat.id, false, None)
                .await?;
        }

        txn.commit().await?;

        Ok(ahtung)
    }

    /// Rates the homework of a chat.
    ///
    /// The course homework counter grows only on the first rating of a chat.
    pub async fn rate(
        &self,
        chat_id: i32,
        teacher_id: i32,
        rating: Rating,
    ) -> Result<Chat, AppError> {
        let chat = self.assigned_chat(chat_id, teacher_id).await?;

        let txn = self.db.begin().await?;

        let chats = ChatRepository::new(&txn);
        if chats.rate_unrated(chat.id, rating, teacher_id).await? {
            CourseRepository::new(&txn)
                .increment_homework(chat.path.course_id)
                .await?;
        } else {
            chats.set_rating(chat.id, rating, teacher_id).await?;
        }
        TeacherInfoRepository::new(&txn)
            .increment(teacher_id, rating.counter())
            .await?;
        let rated = chats
            .find_by_id(chat.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Chat not found".to_string()))?;

        txn.commit().await?;

        Ok(rated)
    }

    /// Chat of a teacher's section as seen by an admin, read flags untouched.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown teacher, unknown chat or chat outside the
    ///   teacher's sections
    pub async fn admin_chat(&self, teacher_id: i32, chat_id: i32) -> Result<ChatThread, AppError> {
        let teacher = TeacherInfoRepository::new(self.db)
            .find_profile(teacher_id)
            .await?;
        if teacher.is_none() {
            return Err(AppError::NotFound("Teacher not found".to_string()));
        }

        let chat = self.find(chat_id).await?;
        let assigned = SectionTeacherRepository::new(self.db)
            .is_assigned(chat.path.section_id, teacher_id)
            .await?;
        if !assigned {
            return Err(AppError::NotFound("Chat not found".to_string()));
        }

        self.open(chat, None).await
    }

    async fn find(&self, chat_id: i32) -> Result<Chat, AppError> {
        ChatRepository::new(self.db)
            .find_by_id(chat_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Chat not found".to_string()))
    }

    async fn owned_chat(&self, chat_id: i32, student_id: i32) -> Result<Chat, AppError> {
        let chat = self.find(chat_id).await?;

        if chat.student_id != student_id {
            return Err(AuthError::AccessDenied(
                student_id,
                format!("opened chat {} of student {}", chat.id, chat.student_id),
            )
            .into());
        }

        Ok(chat)
    }

    async fn assigned_chat(&self, chat_id: i32, teacher_id: i32) -> Result<Chat, AppError> {
        let chat = self.find(chat_id).await?;

        let assigned = SectionTeacherRepository::new(self.db)
            .is_assigned(chat.path.section_id, teacher_id)
            .await?;
        if !assigned {
            return Err(AuthError::AccessDenied(
                teacher_id,
                format!(
                    "opened chat {} outside assigned sections (section {})",
                    chat.id, chat.path.section_id
                ),
            )
            .into());
        }

        Ok(chat)
    }

    async fn open(&self, chat: Chat, reader: Option<Reader>) -> Result<ChatThread, AppError> {
        let messages = MessageRepository::new(self.db);

        if let Some(reader) = reader {
            messages.mark_read(chat.id, reader.incoming_roles()).await?;
        }

        let history = messages.get_by_chat(chat.id).await?;

        Ok(ChatThread::with_messages(chat, history))
    }
}

async fn append<C: ConnectionTrait>(
    db: &C,
    chat: &Chat,
    sender_id: i32,
    role: Role,
    text: String,
) -> Result<Message, AppError> {
    let first_name = UserRepository::new(db)
        .find_by_id(sender_id)
        .await?
        .map(|user| user.first_name)
        .unwrap_or_default();

    MessageRepository::new(db)
        .create(CreateMessageParam {
            chat_id: chat.id,
            text,
            role,
            first_name,
        })
        .await
}
