//! Mentor and judge profiles.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::mentor_judge::{
        MentorJudgeDto, PaginatedMentorJudgesDto, PreviousEventDto, RegisterMentorJudgeDto,
        UpdateMentorJudgeDto,
    },
    server::{model::Page, util::parse::decode_json},
};

/// A hackathon the mentor/judge took part in before joining the platform.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviousEvent {
    pub event_name: String,
    pub role: String,
    pub year: i32,
}

impl PreviousEvent {
    pub fn from_entity(entity: entity::mentor_judge_event::Model) -> Self {
        Self {
            event_name: entity.event_name,
            role: entity.role,
            year: entity.year,
        }
    }

    pub fn from_dto(dto: PreviousEventDto) -> Self {
        Self {
            event_name: dto.event_name.trim().to_string(),
            role: dto.role.trim().to_string(),
            year: dto.year,
        }
    }

    pub fn into_dto(self) -> PreviousEventDto {
        PreviousEventDto {
            event_name: self.event_name,
            role: self.role,
            year: self.year,
        }
    }
}

/// Mentor/judge fields editable by the account owner.
#[derive(Debug, Clone, PartialEq)]
pub struct MentorJudgeProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub current_organization: String,
    pub expertise: Vec<String>,
    pub previous_events: Vec<PreviousEvent>,
    pub is_mentor: bool,
    pub is_judge: bool,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MentorJudge {
    pub id: i32,
    pub password_hash: String,
    pub profile: MentorJudgeProfile,
    pub created_at: DateTime<Utc>,
}

impl MentorJudge {
    /// Converts the entity and its previous-event rows to a domain model.
    ///
    /// # Returns
    /// - `Ok(MentorJudge)` - Converted model
    /// - `Err(DbErr::Json)` - Expertise column is not a string list
    pub fn from_entity(
        entity: entity::mentor_judge::Model,
        events: Vec<entity::mentor_judge_event::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            password_hash: entity.password_hash,
            profile: MentorJudgeProfile {
                name: entity.name,
                email: entity.email,
                phone: entity.phone,
                experience: entity.experience,
                current_organization: entity.current_organization,
                expertise: decode_json("expertise", entity.expertise)?,
                previous_events: events.into_iter().map(PreviousEvent::from_entity).collect(),
                is_mentor: entity.is_mentor,
                is_judge: entity.is_judge,
                profile_picture: entity.profile_picture,
            },
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> MentorJudgeDto {
        let p = self.profile;
        MentorJudgeDto {
            id: self.id,
            name: p.name,
            email: p.email,
            phone: p.phone,
            experience: p.experience,
            current_organization: p.current_organization,
            expertise: p.expertise,
            previous_events: p
                .previous_events
                .into_iter()
                .map(PreviousEvent::into_dto)
                .collect(),
            is_mentor: p.is_mentor,
            is_judge: p.is_judge,
            profile_picture: p.profile_picture,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterMentorJudgeParams {
    pub profile: MentorJudgeProfile,
    pub password: String,
}

impl RegisterMentorJudgeParams {
    pub fn from_dto(dto: RegisterMentorJudgeDto) -> Self {
        Self {
            profile: MentorJudgeProfile {
                name: dto.name.trim().to_string(),
                email: dto.email.trim().to_lowercase(),
                phone: dto.phone.trim().to_string(),
                experience: dto.experience.trim().to_string(),
                current_organization: dto.current_organization.trim().to_string(),
                expertise: dto.expertise,
                previous_events: dto
                    .previous_events
                    .into_iter()
                    .map(PreviousEvent::from_dto)
                    .collect(),
                is_mentor: dto.is_mentor,
                is_judge: dto.is_judge,
                profile_picture: dto.profile_picture,
            },
            password: dto.password,
        }
    }
}

/// Partial update; `None` keeps the stored value. A provided event list replaces the old one.
#[derive(Debug, Clone, Default)]
pub struct UpdateMentorJudgeParams {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub experience: Option<String>,
    pub current_organization: Option<String>,
    pub expertise: Option<Vec<String>>,
    pub previous_events: Option<Vec<PreviousEvent>>,
    pub is_mentor: Option<bool>,
    pub is_judge: Option<bool>,
    pub profile_picture: Option<String>,
}

impl UpdateMentorJudgeParams {
    pub fn from_dto(id: i32, dto: UpdateMentorJudgeDto) -> Self {
        let trim = |v: String| v.trim().to_string();
        Self {
            id,
            name: dto.name.map(trim),
            email: dto.email.map(|v| v.trim().to_lowercase()),
            password: dto.password,
            phone: dto.phone.map(trim),
            experience: dto.experience.map(trim),
            current_organization: dto.current_organization.map(trim),
            expertise: dto.expertise,
            previous_events: dto
                .previous_events
                .map(|events| events.into_iter().map(PreviousEvent::from_dto).collect()),
            is_mentor: dto.is_mentor,
            is_judge: dto.is_judge,
            profile_picture: dto.profile_picture,
        }
    }

    pub fn apply_to(&self, p: MentorJudgeProfile) -> MentorJudgeProfile {
        MentorJudgeProfile {
            name: self.name.clone().unwrap_or(p.name),
            email: self.email.clone().unwrap_or(p.email),
            phone: self.phone.clone().unwrap_or(p.phone),
            experience: self.experience.clone().unwrap_or(p.experience),
            current_organization: self
                .current_organization
                .clone()
                .unwrap_or(p.current_organization),
            expertise: self.expertise.clone().unwrap_or(p.expertise),
            previous_events: self.previous_events.clone().unwrap_or(p.previous_events),
            is_mentor: self.is_mentor.unwrap_or(p.is_mentor),
            is_judge: self.is_judge.unwrap_or(p.is_judge),
            profile_picture: self.profile_picture.clone().or(p.profile_picture),
        }
    }
}

impl Page<MentorJudge> {
    pub fn into_dto(self) -> PaginatedMentorJudgesDto {
        let page = self.map(MentorJudge::into_dto);
        PaginatedMentorJudgesDto {
            mentor_judges: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }
    }
}
