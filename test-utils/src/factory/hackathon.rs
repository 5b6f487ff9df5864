//! Hackathon factory.

use crate::{factory::helpers::next_id, fixture};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

/// Builds hackathons from `fixture::hackathon::entity()` with overridable fields.
///
/// Prize and judging criterion rows are not inserted.
pub struct HackathonFactory<'a> {
    db: &'a DatabaseConnection,
    model: entity::hackathon::Model,
}

impl<'a> HackathonFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, organizer_id: i32) -> Self {
        let mut model = fixture::hackathon::entity();
        model.organizer_id = organizer_id;
        model.name = format!("Hackathon {}", next_id());

        Self { db, model }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.model.status = status.into();
        self
    }

    pub fn dates(mut self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        self.model.start_date = start_date;
        self.model.end_date = end_date;
        self
    }

    pub fn team_size(mut self, min_team_size: i32, max_team_size: i32) -> Self {
        self.model.min_team_size = min_team_size;
        self.model.max_team_size = max_team_size;
        self
    }

    pub fn max_participants(mut self, max_participants: Option<i32>) -> Self {
        self.model.max_participants = max_participants;
        self
    }

    pub fn current_participants(mut self, current_participants: i32) -> Self {
        self.model.current_participants = current_participants;
        self
    }

    pub async fn build(self) -> Result<entity::hackathon::Model, DbErr> {
        let mut active = self.model.into_active_model().reset_all();
        active.id = ActiveValue::NotSet;

        active.insert(self.db).await
    }
}

pub async fn create_hackathon(
    db: &DatabaseConnection,
    organizer_id: i32,
) -> Result<entity::hackathon::Model, DbErr> {
    HackathonFactory::new(db, organizer_id).build().await
}

/// Overwrites a hackathon's participant counter.
pub async fn set_current_participants(
    db: &DatabaseConnection,
    hackathon: entity::hackathon::Model,
    current_participants: i32,
) -> Result<entity::hackathon::Model, DbErr> {
    let mut active = hackathon.into_active_model();
    active.current_participants = ActiveValue::Set(current_participants);

    active.update(db).await
}
