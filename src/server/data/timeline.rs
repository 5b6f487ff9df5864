use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::{
    model::hackathon::HackathonStatus,
    server::{
        model::timeline::{Timeline, TimelineEvent, TimelineEventDetails},
        util::parse::encode_json,
    },
};

pub struct TimelineRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimelineRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a timeline and its initial events.
    pub async fn create(
        &self,
        hackathon_id: i32,
        timezone: String,
        events: Vec<TimelineEventDetails>,
    ) -> Result<Timeline, DbErr> {
        let now = Utc::now();
        let timeline = entity::hackathon_timeline::ActiveModel {
            hackathon_id: ActiveValue::Set(hackathon_id),
            timezone: ActiveValue::Set(timezone),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut rows = Vec::with_capacity(events.len());
        for details in events {
            rows.push(self.insert_event(timeline.id, details).await?);
        }

        Timeline::from_entity(timeline, rows)
    }

    pub async fn exists_for_hackathon(&self, hackathon_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::HackathonTimeline::find()
            .filter(entity::hackathon_timeline::Column::HackathonId.eq(hackathon_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a hackathon's timeline with events in start-time order.
    pub async fn find_by_hackathon(&self, hackathon_id: i32) -> Result<Option<Timeline>, DbErr> {
        let Some(timeline) = entity::prelude::HackathonTimeline::find()
            .filter(entity::hackathon_timeline::Column::HackathonId.eq(hackathon_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let events = entity::prelude::TimelineEvent::find()
            .filter(entity::timeline_event::Column::TimelineId.eq(timeline.id))
            .all(self.db)
            .await?;

        Timeline::from_entity(timeline, events).map(Some)
    }

    pub async fn add_event(
        &self,
        timeline_id: i32,
        details: TimelineEventDetails,
    ) -> Result<TimelineEvent, DbErr> {
        let row = self.insert_event(timeline_id, details).await?;
        self.touch(timeline_id).await?;

        TimelineEvent::from_entity(row)
    }

    pub async fn update_event(
        &self,
        timeline_id: i32,
        event_id: i32,
        details: TimelineEventDetails,
    ) -> Result<TimelineEvent, DbErr> {
        let mut model = event_active_model(details)?;
        model.id = ActiveValue::Unchanged(event_id);
        model.updated_at = ActiveValue::Set(Utc::now());

        let row = model.update(self.db).await?;
        self.touch(timeline_id).await?;

        TimelineEvent::from_entity(row)
    }

    /// Sets an event's status.
    ///
    /// # Returns
    /// - `Ok(true)` - Status updated
    /// - `Ok(false)` - Event is not part of this timeline
    pub async fn update_event_status(
        &self,
        timeline_id: i32,
        event_id: i32,
        status: HackathonStatus,
    ) -> Result<bool, DbErr> {
        let now = Utc::now();
        let result = entity::prelude::TimelineEvent::update_many()
            .col_expr(
                entity::timeline_event::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(entity::timeline_event::Column::UpdatedAt, Expr::value(now))
            .filter(entity::timeline_event::Column::Id.eq(event_id))
            .filter(entity::timeline_event::Column::TimelineId.eq(timeline_id))
            .exec(self.db)
            .await?;

        if result.rows_affected > 0 {
            self.touch(timeline_id).await?;
        }

        Ok(result.rows_affected > 0)
    }

    /// Deletes an event.
    ///
    /// # Returns
    /// - `Ok(true)` - Event deleted
    /// - `Ok(false)` - Event is not part of this timeline
    pub async fn delete_event(&self, timeline_id: i32, event_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TimelineEvent::delete_many()
            .filter(entity::timeline_event::Column::Id.eq(event_id))
            .filter(entity::timeline_event::Column::TimelineId.eq(timeline_id))
            .exec(self.db)
            .await?;

        if result.rows_affected > 0 {
            self.touch(timeline_id).await?;
        }

        Ok(result.rows_affected > 0)
    }

    /// Moves timeline events along their schedule, same rules as hackathons.
    ///
    /// # Returns
    /// - `Ok((started, completed))` - Number of events moved into each state
    pub async fn advance_event_statuses(&self, now: DateTime<Utc>) -> Result<(u64, u64), DbErr> {
        let completed = entity::prelude::TimelineEvent::update_many()
            .col_expr(
                entity::timeline_event::Column::Status,
                Expr::value(HackathonStatus::Completed.as_str()),
            )
            .col_expr(entity::timeline_event::Column::UpdatedAt, Expr::value(now))
            .filter(entity::timeline_event::Column::Status.is_in([
                HackathonStatus::Upcoming.as_str(),
                HackathonStatus::Ongoing.as_str(),
            ]))
            .filter(entity::timeline_event::Column::EndTime.lte(now))
            .exec(self.db)
            .await?;

        let started = entity::prelude::TimelineEvent::update_many()
            .col_expr(
                entity::timeline_event::Column::Status,
                Expr::value(HackathonStatus::Ongoing.as_str()),
            )
            .col_expr(entity::timeline_event::Column::UpdatedAt, Expr::value(now))
            .filter(entity::timeline_event::Column::Status.eq(HackathonStatus::Upcoming.as_str()))
            .filter(entity::timeline_event::Column::StartTime.lte(now))
            .exec(self.db)
            .await?;

        Ok((started.rows_affected, completed.rows_affected))
    }

    async fn insert_event(
        &self,
        timeline_id: i32,
        details: TimelineEventDetails,
    ) -> Result<entity::timeline_event::Model, DbErr> {
        let now = Utc::now();
        let mut model = event_active_model(details)?;
        model.timeline_id = ActiveValue::Set(timeline_id);
        model.status = ActiveValue::Set(HackathonStatus::Upcoming.as_str().to_string());
        model.created_at = ActiveValue::Set(now);
        model.updated_at = ActiveValue::Set(now);

        model.insert(self.db).await
    }

    async fn touch(&self, timeline_id: i32) -> Result<(), DbErr> {
        entity::prelude::HackathonTimeline::update_many()
            .col_expr(
                entity::hackathon_timeline::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::hackathon_timeline::Column::Id.eq(timeline_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}

fn event_active_model(
    details: TimelineEventDetails,
) -> Result<entity::timeline_event::ActiveModel, DbErr> {
    Ok(entity::timeline_event::ActiveModel {
        title: ActiveValue::Set(details.title),
        description: ActiveValue::Set(details.description),
        start_time: ActiveValue::Set(details.start_time),
        end_time: ActiveValue::Set(details.end_time),
        event_type: ActiveValue::Set(details.event_type.as_str().to_string()),
        location_type: ActiveValue::Set(details.location_type.as_str().to_string()),
        venue: ActiveValue::Set(details.venue),
        online_platform: ActiveValue::Set(details.online_platform),
        speakers: ActiveValue::Set(encode_json(&details.speakers)?),
        resources: ActiveValue::Set(encode_json(&details.resources)?),
        is_mandatory: ActiveValue::Set(details.is_mandatory),
        ..Default::default()
    })
}
