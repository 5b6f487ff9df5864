use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::mentor_judge::MentorJudgeRole,
    server::{
        data::mentor_judge::MentorJudgeRepository,
        error::AppError,
        model::{
            mentor_judge::{MentorJudge, RegisterMentorJudgeParams, UpdateMentorJudgeParams},
            Page,
        },
        service::duplicate_as_bad_request,
        util::password::PasswordHasher,
        validation::{account::check_new_password, Validate, Violations},
    },
};

const MENTOR_JUDGE_EXISTS: &str = "Mentor/Judge already exists";

pub struct MentorJudgeService<'a> {
    db: &'a DatabaseConnection,
    hasher: PasswordHasher,
}

impl<'a> MentorJudgeService<'a> {
    pub fn new(db: &'a DatabaseConnection, hasher: PasswordHasher) -> Self {
        Self { db, hasher }
    }

    /// Registers a mentor/judge together with their previous events.
    ///
    /// # Returns
    /// - `Ok(MentorJudge)` - Stored profile
    /// - `Err(AppError::ValidationErr)` - Missing fields, bad phone, or no role selected
    /// - `Err(AppError::BadRequest)` - Email already registered
    pub async fn register(
        &self,
        params: RegisterMentorJudgeParams,
    ) -> Result<MentorJudge, AppError> {
        params.validate()?;

        if MentorJudgeRepository::new(self.db)
            .email_taken(&params.profile.email, None)
            .await?
        {
            return Err(AppError::BadRequest(MENTOR_JUDGE_EXISTS.to_string()));
        }

        let password_hash = self.hasher.hash(params.password).await?;

        let txn = self.db.begin().await?;
        let mentor_judge = MentorJudgeRepository::new(&txn)
            .create(params.profile, password_hash)
            .await
            .map_err(|e| duplicate_as_bad_request(e, MENTOR_JUDGE_EXISTS))?;
        txn.commit().await?;

        tracing::info!(
            "Registered mentor/judge {} (mentor: {}, judge: {})",
            mentor_judge.id,
            mentor_judge.profile.is_mentor,
            mentor_judge.profile.is_judge
        );

        Ok(mentor_judge)
    }

    pub async fn get_paginated(
        &self,
        role: Option<MentorJudgeRole>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<MentorJudge>, AppError> {
        let (mentor_judges, total) = MentorJudgeRepository::new(self.db)
            .get_paginated(role, page, per_page)
            .await?;

        Ok(Page::new(mentor_judges, total, page, per_page))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MentorJudge>, AppError> {
        Ok(MentorJudgeRepository::new(self.db).find_by_id(id).await?)
    }

    /// Merges the changes over the stored profile, re-validates and saves.
    ///
    /// # Returns
    /// - `Ok(None)` - No mentor/judge with that ID
    /// - `Err(AppError::ValidationErr)` - Merged profile is invalid, e.g. both roles cleared
    /// - `Err(AppError::BadRequest)` - New email belongs to someone else
    pub async fn update(
        &self,
        params: UpdateMentorJudgeParams,
    ) -> Result<Option<MentorJudge>, AppError> {
        let repo = MentorJudgeRepository::new(self.db);
        let Some(existing) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let profile = params.apply_to(existing.profile);
        let mut violations = Violations::default();
        profile.check(&mut violations);
        check_new_password(&mut violations, params.password.as_deref());
        violations.into_result()?;

        if repo.email_taken(&profile.email, Some(params.id)).await? {
            return Err(AppError::BadRequest(MENTOR_JUDGE_EXISTS.to_string()));
        }

        let password_hash = match params.password {
            Some(password) => Some(self.hasher.hash(password).await?),
            None => None,
        };

        let txn = self.db.begin().await?;
        let mentor_judge = MentorJudgeRepository::new(&txn)
            .update(params.id, profile, password_hash)
            .await
            .map_err(|e| duplicate_as_bad_request(e, MENTOR_JUDGE_EXISTS))?;
        txn.commit().await?;

        Ok(Some(mentor_judge))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = MentorJudgeRepository::new(self.db).delete(id).await?;
        if deleted {
            tracing::info!("Deleted mentor/judge {}", id);
        }

        Ok(deleted)
    }
}
