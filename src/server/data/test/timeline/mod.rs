use chrono::{DateTime, Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{
        hackathon::HackathonStatus,
        timeline::{EventLocationType, TimelineEventType},
    },
    server::{data::timeline::TimelineRepository, model::timeline::TimelineEventDetails},
};

mod advance_event_statuses;
mod create;
mod delete_event;
mod update_event_status;

fn event(title: &str, start: DateTime<Utc>, hours: i64) -> TimelineEventDetails {
    TimelineEventDetails {
        title: title.to_string(),
        description: format!("{} session", title),
        start_time: start,
        end_time: start + Duration::hours(hours),
        event_type: TimelineEventType::Workshop,
        location_type: EventLocationType::Online,
        venue: None,
        online_platform: Some("Zoom".to_string()),
        speakers: Vec::new(),
        resources: Vec::new(),
        is_mandatory: false,
    }
}
