//! Team factory.
//!
//! Inserts a team together with the leader's membership and registration rows, mirroring
//! what the join flow writes for a leader.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    hackathon_id: i32,
    leader_id: i32,
    team_code: String,
    max_members: i32,
    min_members: i32,
}

impl<'a> TeamFactory<'a> {
    /// Defaults: code `T{id}` zero padded to six characters, 1 to 4 members.
    pub fn new(db: &'a DatabaseConnection, hackathon_id: i32, leader_id: i32) -> Self {
        Self {
            db,
            hackathon_id,
            leader_id,
            team_code: format!("T{:05}", next_id() % 100_000),
            max_members: 4,
            min_members: 1,
        }
    }

    pub fn team_code(mut self, team_code: impl Into<String>) -> Self {
        self.team_code = team_code.into();
        self
    }

    pub fn max_members(mut self, max_members: i32) -> Self {
        self.max_members = max_members;
        self
    }

    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        let now = Utc::now();
        let team = entity::team::ActiveModel {
            id: ActiveValue::NotSet,
            hackathon_id: ActiveValue::Set(self.hackathon_id),
            leader_id: ActiveValue::Set(self.leader_id),
            team_code: ActiveValue::Set(self.team_code),
            max_members: ActiveValue::Set(self.max_members),
            min_members: ActiveValue::Set(self.min_members),
            member_count: ActiveValue::Set(1),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        insert_membership(self.db, &team, self.leader_id, "leader").await?;

        Ok(team)
    }
}

pub async fn create_team(
    db: &DatabaseConnection,
    hackathon_id: i32,
    leader_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, hackathon_id, leader_id).build().await
}

/// Adds a participant to a team as a regular member and bumps `member_count`.
pub async fn add_member(
    db: &DatabaseConnection,
    team: entity::team::Model,
    participant_id: i32,
) -> Result<entity::team::Model, DbErr> {
    insert_membership(db, &team, participant_id, "member").await?;

    let member_count = team.member_count + 1;
    let mut active = team.into_active_model();
    active.member_count = ActiveValue::Set(member_count);

    active.update(db).await
}

async fn insert_membership(
    db: &DatabaseConnection,
    team: &entity::team::Model,
    participant_id: i32,
    role: &str,
) -> Result<(), DbErr> {
    let now = Utc::now();

    entity::team_member::ActiveModel {
        id: ActiveValue::NotSet,
        team_id: ActiveValue::Set(team.id),
        participant_id: ActiveValue::Set(participant_id),
        joined_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await?;

    entity::hackathon_registration::ActiveModel {
        id: ActiveValue::NotSet,
        hackathon_id: ActiveValue::Set(team.hackathon_id),
        participant_id: ActiveValue::Set(participant_id),
        team_id: ActiveValue::Set(team.id),
        role: ActiveValue::Set(role.to_string()),
        registered_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await?;

    Ok(())
}
