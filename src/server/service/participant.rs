use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::team::TeamRole,
    server::{
        data::{
            hackathon::HackathonRepository, participant::ParticipantRepository,
            registration::RegistrationRepository, team::TeamRepository,
        },
        error::AppError,
        model::{
            participant::{
                Participant, ParticipantHackathon, RegisterParticipantParams,
                UpdateParticipantParams,
            },
            Page,
        },
        service::duplicate_as_bad_request,
        util::password::PasswordHasher,
        validation::{account::check_new_password, Validate, Violations},
    },
};

const PARTICIPANT_EXISTS: &str = "Participant already exists";
const USERNAME_EXISTS: &str = "Username already exists";

pub struct ParticipantService<'a> {
    db: &'a DatabaseConnection,
    hasher: PasswordHasher,
}

impl<'a> ParticipantService<'a> {
    pub fn new(db: &'a DatabaseConnection, hasher: PasswordHasher) -> Self {
        Self { db, hasher }
    }

    /// Registers a participant account.
    ///
    /// # Returns
    /// - `Ok(Participant)` - Stored participant
    /// - `Err(AppError::ValidationErr)` - Missing or malformed fields
    /// - `Err(AppError::BadRequest)` - Email or username already registered
    pub async fn register(
        &self,
        params: RegisterParticipantParams,
    ) -> Result<Participant, AppError> {
        params.validate()?;

        let repo = ParticipantRepository::new(self.db);
        if repo.email_taken(&params.profile.email, None).await? {
            return Err(AppError::BadRequest(PARTICIPANT_EXISTS.to_string()));
        }
        if repo.username_taken(&params.profile.username, None).await? {
            return Err(AppError::BadRequest(USERNAME_EXISTS.to_string()));
        }

        let password_hash = self.hasher.hash(params.password).await?;
        let participant = repo
            .create(params.profile, password_hash)
            .await
            .map_err(|e| duplicate_as_bad_request(e, PARTICIPANT_EXISTS))?;

        tracing::info!("Registered participant {}", participant.id);

        Ok(participant)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Participant>, AppError> {
        let (participants, total) = ParticipantRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(Page::new(participants, total, page, per_page))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Participant>, AppError> {
        Ok(ParticipantRepository::new(self.db).find_by_id(id).await?)
    }

    /// Merges the changes over the stored profile, re-validates and saves.
    ///
    /// # Returns
    /// - `Ok(None)` - No participant with that ID
    /// - `Err(AppError::BadRequest)` - New email or username belongs to someone else
    pub async fn update(
        &self,
        params: UpdateParticipantParams,
    ) -> Result<Option<Participant>, AppError> {
        let repo = ParticipantRepository::new(self.db);
        let Some(existing) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let profile = params.apply_to(existing.profile);
        let mut violations = Violations::default();
        profile.check(&mut violations);
        check_new_password(&mut violations, params.password.as_deref());
        violations.into_result()?;

        if repo.email_taken(&profile.email, Some(params.id)).await? {
            return Err(AppError::BadRequest(PARTICIPANT_EXISTS.to_string()));
        }
        if repo.username_taken(&profile.username, Some(params.id)).await? {
            return Err(AppError::BadRequest(USERNAME_EXISTS.to_string()));
        }

        let password_hash = match params.password {
            Some(password) => Some(self.hasher.hash(password).await?),
            None => None,
        };

        let participant = repo
            .update(params.id, profile, password_hash)
            .await
            .map_err(|e| duplicate_as_bad_request(e, PARTICIPANT_EXISTS))?;

        Ok(Some(participant))
    }

    /// Deletes a participant along with their team memberships.
    ///
    /// Leaving as a member frees one team seat and one hackathon slot. A leader's team is
    /// deleted with them, so the slots of its whole roster are given back.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let hackathons = HackathonRepository::new(&txn);
        let teams = TeamRepository::new(&txn);

        let registrations = RegistrationRepository::new(&txn)
            .get_for_participant(id)
            .await?;
        for registration in registrations {
            match registration.role {
                TeamRole::Member => {
                    teams.release_seat(registration.team_id).await?;
                    hackathons.release_slots(registration.hackathon_id, 1).await?;
                }
                TeamRole::Leader => {
                    if let Some(team) = teams.find_by_id(registration.team_id).await? {
                        hackathons
                            .release_slots(registration.hackathon_id, team.member_count)
                            .await?;
                    }
                }
            }
        }

        let deleted = ParticipantRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        if deleted {
            tracing::info!("Deleted participant {}", id);
        }

        Ok(deleted)
    }

    /// Gets the hackathons a participant registered for, with team and role.
    ///
    /// # Returns
    /// - `Ok(None)` - No participant with that ID
    pub async fn hackathons(
        &self,
        participant_id: i32,
    ) -> Result<Option<Vec<ParticipantHackathon>>, AppError> {
        if ParticipantRepository::new(self.db)
            .find_by_id(participant_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let hackathons = RegistrationRepository::new(self.db)
            .get_for_participant(participant_id)
            .await?;

        Ok(Some(hackathons))
    }
}
