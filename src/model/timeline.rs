use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::hackathon::HackathonStatus;

wire_enum! {
    TimelineEventType("event type") {
        Registration => "registration",
        Opening => "opening",
        Workshop => "workshop",
        Mentoring => "mentoring",
        Submission => "submission",
        Judging => "judging",
        Award => "award",
        Closing => "closing",
        Break => "break",
        Other => "other",
    }
}

wire_enum! {
    EventLocationType("location type") {
        Online => "online",
        Offline => "offline",
        Both => "both",
    }
}

wire_enum! {
    ResourceType("resource type") {
        Document => "document",
        Link => "link",
        Video => "video",
        Presentation => "presentation",
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SpeakerDto {
    pub name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub organization: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ResourceDto {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub title: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TimelineEventInputDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub event_type: TimelineEventType,
    pub location_type: EventLocationType,
    pub venue: Option<String>,
    pub online_platform: Option<String>,
    #[serde(default)]
    pub speakers: Vec<SpeakerDto>,
    #[serde(default)]
    pub resources: Vec<ResourceDto>,
    #[serde(default)]
    pub is_mandatory: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateTimelineEventDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub event_type: Option<TimelineEventType>,
    pub location_type: Option<EventLocationType>,
    pub venue: Option<String>,
    pub online_platform: Option<String>,
    pub speakers: Option<Vec<SpeakerDto>>,
    pub resources: Option<Vec<ResourceDto>>,
    pub is_mandatory: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateTimelineDto {
    pub timezone: Option<String>,
    #[serde(default)]
    pub events: Vec<TimelineEventInputDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct TimelineEventDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub event_type: TimelineEventType,
    pub location_type: EventLocationType,
    pub venue: Option<String>,
    pub online_platform: Option<String>,
    pub speakers: Vec<SpeakerDto>,
    pub resources: Vec<ResourceDto>,
    pub is_mandatory: bool,
    pub status: HackathonStatus,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct TimelineDto {
    pub id: i32,
    pub hackathon_id: i32,
    pub timezone: String,
    pub events: Vec<TimelineEventDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
