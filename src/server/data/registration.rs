use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{model::team::TeamRole, server::model::participant::ParticipantHackathon};

/// Hackathon registrations: at most one per participant per hackathon.
pub struct RegistrationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegistrationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        hackathon_id: i32,
        participant_id: i32,
        team_id: i32,
        role: TeamRole,
    ) -> Result<(), DbErr> {
        entity::hackathon_registration::ActiveModel {
            hackathon_id: ActiveValue::Set(hackathon_id),
            participant_id: ActiveValue::Set(participant_id),
            team_id: ActiveValue::Set(team_id),
            role: ActiveValue::Set(role.as_str().to_string()),
            registered_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Gets the team a participant joined a hackathon through, if any.
    pub async fn find_team_id(
        &self,
        hackathon_id: i32,
        participant_id: i32,
    ) -> Result<Option<i32>, DbErr> {
        Ok(entity::prelude::HackathonRegistration::find()
            .filter(entity::hackathon_registration::Column::HackathonId.eq(hackathon_id))
            .filter(entity::hackathon_registration::Column::ParticipantId.eq(participant_id))
            .one(self.db)
            .await?
            .map(|r| r.team_id))
    }

    /// Gets every hackathon a participant has joined, most recent registration first.
    pub async fn get_for_participant(
        &self,
        participant_id: i32,
    ) -> Result<Vec<ParticipantHackathon>, DbErr> {
        let registrations = entity::prelude::HackathonRegistration::find()
            .filter(entity::hackathon_registration::Column::ParticipantId.eq(participant_id))
            .order_by_desc(entity::hackathon_registration::Column::RegisteredAt)
            .order_by_desc(entity::hackathon_registration::Column::Id)
            .all(self.db)
            .await?;

        if registrations.is_empty() {
            return Ok(Vec::new());
        }

        let hackathon_ids: Vec<i32> = registrations.iter().map(|r| r.hackathon_id).collect();
        let team_ids: Vec<i32> = registrations.iter().map(|r| r.team_id).collect();

        let hackathons: HashMap<i32, entity::hackathon::Model> = entity::prelude::Hackathon::find()
            .filter(entity::hackathon::Column::Id.is_in(hackathon_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|h| (h.id, h))
            .collect();
        let teams: HashMap<i32, entity::team::Model> = entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(team_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();

        registrations
            .into_iter()
            .filter_map(|registration| {
                let hackathon = hackathons.get(&registration.hackathon_id)?.clone();
                let team = teams.get(&registration.team_id)?.clone();
                Some(ParticipantHackathon::from_entity(registration, hackathon, team))
            })
            .collect()
    }
}
