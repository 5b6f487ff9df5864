use sea_orm::DatabaseConnection;

use crate::server::{
    data::{hackathon::HackathonRepository, organizer::OrganizerRepository},
    error::AppError,
    model::{
        hackathon::Hackathon,
        organizer::{Organizer, RegisterOrganizerParams, UpdateOrganizerParams},
        Page,
    },
    service::duplicate_as_bad_request,
    util::password::PasswordHasher,
    validation::{account::check_new_password, Validate, Violations},
};

const ORGANIZER_EXISTS: &str = "Organizer already exists";

pub struct OrganizerService<'a> {
    db: &'a DatabaseConnection,
    hasher: PasswordHasher,
}

impl<'a> OrganizerService<'a> {
    pub fn new(db: &'a DatabaseConnection, hasher: PasswordHasher) -> Self {
        Self { db, hasher }
    }

    /// Registers an organizer account.
    ///
    /// # Returns
    /// - `Ok(Organizer)` - Stored organizer
    /// - `Err(AppError::ValidationErr)` - Missing or malformed fields
    /// - `Err(AppError::BadRequest)` - Email already registered
    pub async fn register(&self, params: RegisterOrganizerParams) -> Result<Organizer, AppError> {
        params.validate()?;

        let repo = OrganizerRepository::new(self.db);
        if repo.email_taken(&params.profile.email, None).await? {
            return Err(AppError::BadRequest(ORGANIZER_EXISTS.to_string()));
        }

        let password_hash = self.hasher.hash(params.password).await?;
        let organizer = repo
            .create(params.profile, password_hash)
            .await
            .map_err(|e| duplicate_as_bad_request(e, ORGANIZER_EXISTS))?;

        tracing::info!("Registered organizer {}", organizer.id);

        Ok(organizer)
    }

    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Page<Organizer>, AppError> {
        let (organizers, total) = OrganizerRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(Page::new(organizers, total, page, per_page))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Organizer>, AppError> {
        Ok(OrganizerRepository::new(self.db).find_by_id(id).await?)
    }

    /// Merges the changes over the stored profile, re-validates and saves.
    ///
    /// # Returns
    /// - `Ok(Some(Organizer))` - Updated organizer
    /// - `Ok(None)` - No organizer with that ID
    /// - `Err(AppError::BadRequest)` - New email belongs to another organizer
    pub async fn update(
        &self,
        params: UpdateOrganizerParams,
    ) -> Result<Option<Organizer>, AppError> {
        let repo = OrganizerRepository::new(self.db);
        let Some(existing) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let profile = params.apply_to(existing.profile);
        let mut violations = Violations::default();
        profile.check(&mut violations);
        check_new_password(&mut violations, params.password.as_deref());
        violations.into_result()?;

        if repo.email_taken(&profile.email, Some(params.id)).await? {
            return Err(AppError::BadRequest(ORGANIZER_EXISTS.to_string()));
        }

        let password_hash = match params.password {
            Some(password) => Some(self.hasher.hash(password).await?),
            None => None,
        };

        let organizer = repo
            .update(params.id, profile, password_hash)
            .await
            .map_err(|e| duplicate_as_bad_request(e, ORGANIZER_EXISTS))?;

        Ok(Some(organizer))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = OrganizerRepository::new(self.db).delete(id).await?;
        if deleted {
            tracing::info!("Deleted organizer {}", id);
        }

        Ok(deleted)
    }

    /// Gets every hackathon an organizer created.
    ///
    /// # Returns
    /// - `Ok(None)` - No organizer with that ID
    pub async fn hackathons(&self, organizer_id: i32) -> Result<Option<Vec<Hackathon>>, AppError> {
        if OrganizerRepository::new(self.db)
            .find_by_id(organizer_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let hackathons = HackathonRepository::new(self.db)
            .get_by_organizer(organizer_id)
            .await?;

        Ok(Some(hackathons))
    }
}
