use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, TeacherInfo};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(TeacherInfo)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user tables: User and TeacherInfo.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(TeacherInfo)
    }

    /// Adds the course hierarchy tables.
    ///
    /// Course, Section, Level, Lesson and LessonCarousel, plus SectionTeacher since
    /// section removal also clears teacher assignments.
    pub fn with_course_tables(self) -> Self {
        self.with_table(Course)
            .with_table(Section)
            .with_table(Level)
            .with_table(Lesson)
            .with_table(LessonCarousel)
            .with_table(SectionTeacher)
    }

    /// Adds the chat tables: Chat and Message.
    pub fn with_chat_tables(self) -> Self {
        self.with_table(Chat).with_table(Message)
    }

    /// Adds every table of the school schema.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_school_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_school_tables(self) -> Self {
        self.with_user_tables()
            .with_course_tables()
            .with_chat_tables()
            .with_table(RecoveryCode)
            .with_table(RequestLog)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
