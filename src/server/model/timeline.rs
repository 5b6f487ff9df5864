//! Hackathon timelines and their scheduled events.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};

use crate::{
    model::{
        hackathon::HackathonStatus,
        timeline::{
            CreateTimelineDto, EventLocationType, ResourceDto, ResourceType, SpeakerDto,
            TimelineDto, TimelineEventDto, TimelineEventInputDto, TimelineEventType,
            UpdateTimelineEventDto,
        },
    },
    server::util::parse::{decode_json, parse_column},
};

pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Speaker entry, stored in the event's `speakers` JSON column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub designation: String,
    pub organization: String,
}

/// Resource link, stored in the event's `resources` JSON column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub resource_type: ResourceType,
    pub title: String,
    pub url: String,
}

/// Event fields set by the organizer on create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEventDetails {
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub event_type: TimelineEventType,
    pub location_type: EventLocationType,
    pub venue: Option<String>,
    pub online_platform: Option<String>,
    pub speakers: Vec<Speaker>,
    pub resources: Vec<Resource>,
    pub is_mandatory: bool,
}

impl TimelineEventDetails {
    pub fn from_dto(dto: TimelineEventInputDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            description: dto.description.trim().to_string(),
            start_time: dto.start_time,
            end_time: dto.end_time,
            event_type: dto.event_type,
            location_type: dto.location_type,
            venue: dto.venue.map(|v| v.trim().to_string()),
            online_platform: dto.online_platform.map(|v| v.trim().to_string()),
            speakers: dto.speakers.into_iter().map(speaker_from_dto).collect(),
            resources: dto.resources.into_iter().map(resource_from_dto).collect(),
            is_mandatory: dto.is_mandatory,
        }
    }
}

fn speaker_from_dto(dto: SpeakerDto) -> Speaker {
    Speaker {
        name: dto.name.trim().to_string(),
        designation: dto.designation.trim().to_string(),
        organization: dto.organization.trim().to_string(),
    }
}

fn resource_from_dto(dto: ResourceDto) -> Resource {
    Resource {
        resource_type: dto.resource_type,
        title: dto.title.trim().to_string(),
        url: dto.url.trim().to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct TimelineEvent {
    pub id: i32,
    pub details: TimelineEventDetails,
    pub status: HackathonStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TimelineEvent {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(TimelineEvent)` - Converted model
    /// - `Err(DbErr::Custom)` - Unknown stored enum value
    /// - `Err(DbErr::Json)` - Speakers or resources column is malformed
    pub fn from_entity(entity: entity::timeline_event::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            details: TimelineEventDetails {
                title: entity.title,
                description: entity.description,
                start_time: entity.start_time,
                end_time: entity.end_time,
                event_type: parse_column("event_type", &entity.event_type)?,
                location_type: parse_column("location_type", &entity.location_type)?,
                venue: entity.venue,
                online_platform: entity.online_platform,
                speakers: decode_json("speakers", entity.speakers)?,
                resources: decode_json("resources", entity.resources)?,
                is_mandatory: entity.is_mandatory,
            },
            status: parse_column("status", &entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> TimelineEventDto {
        let d = self.details;
        TimelineEventDto {
            id: self.id,
            title: d.title,
            description: d.description,
            start_time: d.start_time,
            end_time: d.end_time,
            event_type: d.event_type,
            location_type: d.location_type,
            venue: d.venue,
            online_platform: d.online_platform,
            speakers: d
                .speakers
                .into_iter()
                .map(|s| SpeakerDto {
                    name: s.name,
                    designation: s.designation,
                    organization: s.organization,
                })
                .collect(),
            resources: d
                .resources
                .into_iter()
                .map(|r| ResourceDto {
                    resource_type: r.resource_type,
                    title: r.title,
                    url: r.url,
                })
                .collect(),
            is_mandatory: d.is_mandatory,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Timeline {
    pub id: i32,
    pub hackathon_id: i32,
    pub timezone: String,
    /// Sorted by start time.
    pub events: Vec<TimelineEvent>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timeline {
    pub fn from_entity(
        entity: entity::hackathon_timeline::Model,
        events: Vec<entity::timeline_event::Model>,
    ) -> Result<Self, DbErr> {
        let mut events = events
            .into_iter()
            .map(TimelineEvent::from_entity)
            .collect::<Result<Vec<_>, _>>()?;
        events.sort_by_key(|e| (e.details.start_time, e.id));

        Ok(Self {
            id: entity.id,
            hackathon_id: entity.hackathon_id,
            timezone: entity.timezone,
            events,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Event details in schedule order, used for overlap validation.
    pub fn schedule(&self) -> Vec<TimelineEventDetails> {
        self.events.iter().map(|e| e.details.clone()).collect()
    }

    pub fn into_dto(self) -> TimelineDto {
        TimelineDto {
            id: self.id,
            hackathon_id: self.hackathon_id,
            timezone: self.timezone,
            events: self.events.into_iter().map(TimelineEvent::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTimelineParams {
    pub hackathon_id: i32,
    pub timezone: String,
    pub events: Vec<TimelineEventDetails>,
}

impl CreateTimelineParams {
    pub fn from_dto(hackathon_id: i32, dto: CreateTimelineDto) -> Self {
        Self {
            hackathon_id,
            timezone: dto
                .timezone
                .map(|tz| tz.trim().to_string())
                .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
            events: dto
                .events
                .into_iter()
                .map(TimelineEventDetails::from_dto)
                .collect(),
        }
    }
}

/// Partial event update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateTimelineEventParams {
    pub event_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub event_type: Option<TimelineEventType>,
    pub location_type: Option<EventLocationType>,
    pub venue: Option<String>,
    pub online_platform: Option<String>,
    pub speakers: Option<Vec<Speaker>>,
    pub resources: Option<Vec<Resource>>,
    pub is_mandatory: Option<bool>,
}

impl UpdateTimelineEventParams {
    pub fn from_dto(event_id: i32, dto: UpdateTimelineEventDto) -> Self {
        let trim = |v: String| v.trim().to_string();
        Self {
            event_id,
            title: dto.title.map(trim),
            description: dto.description.map(trim),
            start_time: dto.start_time,
            end_time: dto.end_time,
            event_type: dto.event_type,
            location_type: dto.location_type,
            venue: dto.venue.map(trim),
            online_platform: dto.online_platform.map(trim),
            speakers: dto
                .speakers
                .map(|list| list.into_iter().map(speaker_from_dto).collect()),
            resources: dto
                .resources
                .map(|list| list.into_iter().map(resource_from_dto).collect()),
            is_mandatory: dto.is_mandatory,
        }
    }

    pub fn apply_to(&self, d: TimelineEventDetails) -> TimelineEventDetails {
        TimelineEventDetails {
            title: self.title.clone().unwrap_or(d.title),
            description: self.description.clone().unwrap_or(d.description),
            start_time: self.start_time.unwrap_or(d.start_time),
            end_time: self.end_time.unwrap_or(d.end_time),
            event_type: self.event_type.unwrap_or(d.event_type),
            location_type: self.location_type.unwrap_or(d.location_type),
            venue: self.venue.clone().or(d.venue),
            online_platform: self.online_platform.clone().or(d.online_platform),
            speakers: self.speakers.clone().unwrap_or(d.speakers),
            resources: self.resources.clone().unwrap_or(d.resources),
            is_mandatory: self.is_mandatory.unwrap_or(d.is_mandatory),
        }
    }
}
