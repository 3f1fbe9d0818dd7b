//! Teacher administration.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        section::SectionRepository, section_teacher::SectionTeacherRepository,
        teacher_info::TeacherInfoRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        auth::Role,
        section::Section,
        teacher::{TeacherProfile, UpdateTeacherParam},
        user::{normalize_email, RegisterParam},
    },
    service::{account::insert_account, alert::ALERT_TARGET},
};

pub struct TeacherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a teacher account with zeroed metrics.
    ///
    /// The user row and the metrics row are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new teacher
    /// - `Err(AuthError::EmailAlreadyExists)` - Email already registered
    pub async fn register(&self, param: RegisterParam) -> Result<i32, AppError> {
        let txn = self.db.begin().await?;

        let user = insert_account(&txn, param, Role::Teacher).await?;
        TeacherInfoRepository::new(&txn).create(user.id).await?;

        txn.commit().await?;

        tracing::info!(
            target: ALERT_TARGET,
            "New teacher registered: {} ({})",
            user.first_name,
            user.email
        );

        Ok(user.id)
    }

    pub async fn get_profile(&self, id: i32) -> Result<Option<TeacherProfile>, AppError> {
        TeacherInfoRepository::new(self.db).find_profile(id).await
    }

    pub async fn get_all(&self) -> Result<Vec<TeacherProfile>, AppError> {
        TeacherInfoRepository::new(self.db).get_all_profiles().await
    }

    /// Updates a teacher's email and first name.
    ///
    /// # Returns
    /// - `Ok(false)` - No teacher with that id
    /// - `Err(AppError::BadRequest)` - Email or first name empty
    /// - `Err(AuthError::EmailAlreadyExists)` - Email used by another account
    pub async fn update(&self, param: UpdateTeacherParam) -> Result<bool, AppError> {
        let email = normalize_email(&param.email);
        let first_name = param.first_name.trim().to_string();
        if email.is_empty() || first_name.is_empty() {
            return Err(AppError::BadRequest(
                "email and first_name are required".to_string(),
            ));
        }

        if self.get_profile(param.id).await?.is_none() {
            return Ok(false);
        }

        let users = UserRepository::new(self.db);
        if users.email_taken(&email, Some(param.id)).await? {
            return Err(AuthError::EmailAlreadyExists.into());
        }

        Ok(users
            .update_profile(param.id, email, first_name)
            .await?
            .is_some())
    }

    /// Deletes a teacher with metrics and section assignments.
    ///
    /// # Returns
    /// - `Ok(false)` - No teacher with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        if self.get_profile(id).await?.is_none() {
            return Ok(false);
        }

        let txn = self.db.begin().await?;

        SectionTeacherRepository::new(&txn)
            .delete_by_teacher(id)
            .await?;
        TeacherInfoRepository::new(&txn).delete(id).await?;
        let deleted = UserRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }

    /// Sections assigned to a teacher.
    ///
    /// # Returns
    /// - `Ok(None)` - No teacher with that id
    pub async fn get_sections(&self, id: i32) -> Result<Option<Vec<Section>>, AppError> {
        if self.get_profile(id).await?.is_none() {
            return Ok(None);
        }

        let section_ids = SectionTeacherRepository::new(self.db)
            .get_section_ids(id)
            .await?;
        let sections = SectionRepository::new(self.db)
            .get_by_ids(section_ids)
            .await?;

        Ok(Some(sections))
    }

    /// Assigns a teacher to a section.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Teacher or section does not exist
    pub async fn assign_section(&self, id: i32, section_id: i32) -> Result<(), AppError> {
        self.require_assignment_parties(id, section_id).await?;

        SectionTeacherRepository::new(self.db)
            .assign(section_id, id)
            .await?;

        Ok(())
    }

    pub async fn unassign_section(&self, id: i32, section_id: i32) -> Result<(), AppError> {
        self.require_assignment_parties(id, section_id).await?;

        SectionTeacherRepository::new(self.db)
            .unassign(section_id, id)
            .await?;

        Ok(())
    }

    async fn require_assignment_parties(&self, id: i32, section_id: i32) -> Result<(), AppError> {
        if self.get_profile(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Teacher {} not found", id)));
        }

        if SectionRepository::new(self.db)
            .find_by_id(section_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Section {} not found",
                section_id
            )));
        }

        Ok(())
    }
}
