use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::hackathon::HackathonStatus,
    server::{
        data::{hackathon::HackathonRepository, team::TeamRepository},
        error::AppError,
        model::{
            hackathon::{CreateHackathonParams, Hackathon, UpdateHackathonParams},
            team::TeamWithMembers,
            Page,
        },
        validation::Validate,
    },
};

pub struct HackathonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HackathonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a hackathon with its prizes and judging criteria.
    ///
    /// # Returns
    /// - `Ok(Hackathon)` - Stored hackathon in `upcoming` state
    /// - `Err(AppError::ValidationErr)` - Missing fields or broken date/team/prize rules
    pub async fn create(&self, params: CreateHackathonParams) -> Result<Hackathon, AppError> {
        params.details.validate()?;

        let txn = self.db.begin().await?;
        let hackathon = HackathonRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::info!(
            "Organizer {} created hackathon {} ({})",
            hackathon.organizer_id,
            hackathon.id,
            hackathon.details.name
        );

        Ok(hackathon)
    }

    pub async fn get_paginated(
        &self,
        status: Option<HackathonStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Hackathon>, AppError> {
        let (hackathons, total) = HackathonRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        Ok(Page::new(hackathons, total, page, per_page))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Hackathon>, AppError> {
        Ok(HackathonRepository::new(self.db).find_by_id(id).await?)
    }

    /// Merges the changes over the stored details, re-validates and saves.
    ///
    /// # Returns
    /// - `Ok(None)` - No hackathon with that ID
    /// - `Err(AppError::ValidationErr)` - Merged details are invalid
    /// - `Err(AppError::BadRequest)` - Capacity lowered below the current participant count
    pub async fn update(&self, params: UpdateHackathonParams) -> Result<Option<Hackathon>, AppError> {
        let txn = self.db.begin().await?;
        let repo = HackathonRepository::new(&txn);

        let Some(existing) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let details = params.apply_to(existing.details);
        details.validate()?;

        if !repo
            .try_set_capacity(params.id, details.max_participants)
            .await?
        {
            return Err(AppError::BadRequest(
                "Maximum participants cannot be lower than the number already registered"
                    .to_string(),
            ));
        }

        let hackathon = repo.update(params.id, details).await?;
        txn.commit().await?;

        Ok(Some(hackathon))
    }

    /// Sets the status by hand, e.g. to cancel a hackathon.
    ///
    /// # Returns
    /// - `Ok(None)` - No hackathon with that ID
    pub async fn update_status(
        &self,
        id: i32,
        status: HackathonStatus,
    ) -> Result<Option<Hackathon>, AppError> {
        let repo = HackathonRepository::new(self.db);
        if !repo.update_status(id, status).await? {
            return Ok(None);
        }

        tracing::info!("Hackathon {} set to {}", id, status);

        Ok(repo.find_by_id(id).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = HackathonRepository::new(self.db).delete(id).await?;
        if deleted {
            tracing::info!("Deleted hackathon {}", id);
        }

        Ok(deleted)
    }

    /// Gets every team formed for a hackathon with its members.
    ///
    /// # Returns
    /// - `Ok(None)` - No hackathon with that ID
    pub async fn teams(&self, id: i32) -> Result<Option<Vec<TeamWithMembers>>, AppError> {
        if HackathonRepository::new(self.db)
            .find_by_id(id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        Ok(Some(TeamRepository::new(self.db).get_by_hackathon(id).await?))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use test_utils::{builder::TestBuilder, factory};

    use super::*;
    use crate::{
        model::hackathon::LocationType,
        server::model::hackathon::{HackathonDetails, JudgingCriterion, Prize},
    };

    fn details() -> HackathonDetails {
        let now = Utc::now();
        HackathonDetails {
            name: "Code for Pune".to_string(),
            description: "Civic tech weekend".to_string(),
            theme: "Smart cities".to_string(),
            start_date: now + Duration::days(10),
            end_date: now + Duration::days(11),
            registration_start_date: now,
            registration_end_date: now + Duration::days(9),
            duration: "24 hours".to_string(),
            start_time: "10:00".to_string(),
            end_time: "10:00".to_string(),
            location_type: LocationType::Online,
            venue: None,
            online_platform: Some("Discord".to_string()),
            registration_fee: 0.0,
            prize_pool: 500.0,
            prizes: vec![Prize {
                position: "Winner".to_string(),
                amount: 500.0,
            }],
            domains: vec!["Mobility".to_string()],
            rules: vec!["Teams of up to three".to_string()],
            min_team_size: 1,
            max_team_size: 3,
            max_participants: Some(50),
            judging_criteria: vec![JudgingCriterion {
                criterion: "Impact".to_string(),
                weightage: 100,
            }],
            banner_image: None,
        }
    }

    async fn create(db: &DatabaseConnection) -> Hackathon {
        let organizer = factory::create_organizer(db).await.unwrap();
        HackathonService::new(db)
            .create(CreateHackathonParams {
                organizer_id: organizer.id,
                details: details(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_hackathon() {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let hackathon = create(db).await;

        assert_eq!(hackathon.status, HackathonStatus::Upcoming);
        assert_eq!(hackathon.current_participants, 0);
        assert_eq!(hackathon.details.prizes.len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_criteria_not_summing_to_100() {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let organizer = factory::create_organizer(db).await.unwrap();
        let mut details = details();
        details.judging_criteria[0].weightage = 90;

        let result = HackathonService::new(db)
            .create(CreateHackathonParams {
                organizer_id: organizer.id,
                details,
            })
            .await;

        assert!(matches!(result, Err(AppError::ValidationErr(_))));
        let page = HackathonService::new(db)
            .get_paginated(None, 0, 10)
            .await
            .unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_update_merges_changes() {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let hackathon = create(db).await;

        let updated = HackathonService::new(db)
            .update(UpdateHackathonParams {
                id: hackathon.id,
                theme: Some("Open data".to_string()),
                ..Default::default()
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.details.theme, "Open data");
        assert_eq!(updated.details.name, hackathon.details.name);
        assert_eq!(updated.details.prizes, hackathon.details.prizes);
    }

    #[tokio::test]
    async fn test_update_rejects_capacity_below_registrations() {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let hackathon = create(db).await;
        let repo = HackathonRepository::new(db);
        assert!(repo.try_reserve_slot(hackathon.id).await.unwrap());
        assert!(repo.try_reserve_slot(hackathon.id).await.unwrap());

        let result = HackathonService::new(db)
            .update(UpdateHackathonParams {
                id: hackathon.id,
                max_participants: Some(1),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        let stored = repo.find_by_id(hackathon.id).await.unwrap().unwrap();
        assert_eq!(stored.details.max_participants, hackathon.details.max_participants);
        assert_eq!(stored.current_participants, 2);
    }

    #[tokio::test]
    async fn test_update_missing_hackathon() {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = HackathonService::new(db)
            .update(UpdateHackathonParams {
                id: 7,
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_status_returns_hackathon() {
        let test = TestBuilder::new().with_hackathon_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (_, hackathon) = factory::helpers::create_hackathon_with_organizer(db)
            .await
            .unwrap();

        let service = HackathonService::new(db);
        let updated = service
            .update_status(hackathon.id, HackathonStatus::Cancelled)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.status, HackathonStatus::Cancelled);
        assert!(service
            .update_status(hackathon.id + 1, HackathonStatus::Cancelled)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_teams_lists_teams() {
        let test = TestBuilder::new().with_team_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (hackathon, leader, _) = factory::helpers::create_team_with_leader(db).await.unwrap();

        let service = HackathonService::new(db);
        let teams = service.teams(hackathon.id).await.unwrap().unwrap();

        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].members[0].participant_id, leader.id);
        assert!(service.teams(hackathon.id + 1).await.unwrap().is_none());
    }
}
