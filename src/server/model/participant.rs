//! Participant accounts and the hackathons they have joined.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        participant::{
            PaginatedParticipantsDto, ParticipantDto, ParticipantHackathonDto,
            RegisterParticipantDto, UpdateParticipantDto,
        },
        team::TeamRole,
    },
    server::{
        model::Page,
        util::parse::{decode_json, parse_column},
    },
};

/// Participant fields editable by the account owner.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantProfile {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub age: i32,
    pub experience: String,
    pub skills: Vec<String>,
    pub github_link: String,
    pub linked_in: String,
    pub organization: String,
    pub fields_of_interest: Vec<String>,
    pub bio: String,
    pub city: String,
    pub country: String,
    pub resume: Option<String>,
    pub profile_picture: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Participant {
    pub id: i32,
    pub password_hash: String,
    pub profile: ParticipantProfile,
    pub created_at: DateTime<Utc>,
}

impl Participant {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Participant)` - Converted model
    /// - `Err(DbErr::Json)` - Skills or interests column is not a string list
    pub fn from_entity(entity: entity::participant::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            password_hash: entity.password_hash,
            profile: ParticipantProfile {
                name: entity.name,
                username: entity.username,
                email: entity.email,
                phone: entity.phone,
                age: entity.age,
                experience: entity.experience,
                skills: decode_json("skills", entity.skills)?,
                github_link: entity.github_link,
                linked_in: entity.linked_in,
                organization: entity.organization,
                fields_of_interest: decode_json("fields_of_interest", entity.fields_of_interest)?,
                bio: entity.bio,
                city: entity.city,
                country: entity.country,
                resume: entity.resume,
                profile_picture: entity.profile_picture,
            },
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ParticipantDto {
        let p = self.profile;
        ParticipantDto {
            id: self.id,
            name: p.name,
            username: p.username,
            email: p.email,
            phone: p.phone,
            age: p.age,
            experience: p.experience,
            skills: p.skills,
            github_link: p.github_link,
            linked_in: p.linked_in,
            organization: p.organization,
            fields_of_interest: p.fields_of_interest,
            bio: p.bio,
            city: p.city,
            country: p.country,
            resume: p.resume,
            profile_picture: p.profile_picture,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterParticipantParams {
    pub profile: ParticipantProfile,
    pub password: String,
}

impl RegisterParticipantParams {
    pub fn from_dto(dto: RegisterParticipantDto) -> Self {
        Self {
            profile: ParticipantProfile {
                name: dto.name.trim().to_string(),
                username: dto.username.trim().to_string(),
                email: dto.email.trim().to_lowercase(),
                phone: dto.phone.map(|v| v.trim().to_string()),
                age: dto.age,
                experience: dto.experience.trim().to_string(),
                skills: dto.skills,
                github_link: dto.github_link.trim().to_string(),
                linked_in: dto.linked_in.trim().to_string(),
                organization: dto.organization.trim().to_string(),
                fields_of_interest: dto.fields_of_interest,
                bio: dto.bio.trim().to_string(),
                city: dto.city.trim().to_string(),
                country: dto.country.trim().to_string(),
                resume: dto.resume,
                profile_picture: dto.profile_picture,
            },
            password: dto.password,
        }
    }
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateParticipantParams {
    pub id: i32,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub experience: Option<String>,
    pub skills: Option<Vec<String>>,
    pub github_link: Option<String>,
    pub linked_in: Option<String>,
    pub organization: Option<String>,
    pub fields_of_interest: Option<Vec<String>>,
    pub bio: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub resume: Option<String>,
    pub profile_picture: Option<String>,
}

impl UpdateParticipantParams {
    pub fn from_dto(id: i32, dto: UpdateParticipantDto) -> Self {
        let trim = |v: String| v.trim().to_string();
        Self {
            id,
            name: dto.name.map(trim),
            username: dto.username.map(trim),
            email: dto.email.map(|v| v.trim().to_lowercase()),
            password: dto.password,
            phone: dto.phone.map(trim),
            age: dto.age,
            experience: dto.experience.map(trim),
            skills: dto.skills,
            github_link: dto.github_link.map(trim),
            linked_in: dto.linked_in.map(trim),
            organization: dto.organization.map(trim),
            fields_of_interest: dto.fields_of_interest,
            bio: dto.bio.map(trim),
            city: dto.city.map(trim),
            country: dto.country.map(trim),
            resume: dto.resume,
            profile_picture: dto.profile_picture,
        }
    }

    /// Merges the changes over the stored profile.
    pub fn apply_to(&self, p: ParticipantProfile) -> ParticipantProfile {
        ParticipantProfile {
            name: self.name.clone().unwrap_or(p.name),
            username: self.username.clone().unwrap_or(p.username),
            email: self.email.clone().unwrap_or(p.email),
            phone: self.phone.clone().or(p.phone),
            age: self.age.unwrap_or(p.age),
            experience: self.experience.clone().unwrap_or(p.experience),
            skills: self.skills.clone().unwrap_or(p.skills),
            github_link: self.github_link.clone().unwrap_or(p.github_link),
            linked_in: self.linked_in.clone().unwrap_or(p.linked_in),
            organization: self.organization.clone().unwrap_or(p.organization),
            fields_of_interest: self
                .fields_of_interest
                .clone()
                .unwrap_or(p.fields_of_interest),
            bio: self.bio.clone().unwrap_or(p.bio),
            city: self.city.clone().unwrap_or(p.city),
            country: self.country.clone().unwrap_or(p.country),
            resume: self.resume.clone().or(p.resume),
            profile_picture: self.profile_picture.clone().or(p.profile_picture),
        }
    }
}

/// A hackathon registration joined with hackathon and team details.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantHackathon {
    pub hackathon_id: i32,
    pub hackathon_name: String,
    pub team_id: i32,
    pub team_code: String,
    pub role: TeamRole,
    pub registered_at: DateTime<Utc>,
}

impl ParticipantHackathon {
    pub fn from_entity(
        registration: entity::hackathon_registration::Model,
        hackathon: entity::hackathon::Model,
        team: entity::team::Model,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            hackathon_id: hackathon.id,
            hackathon_name: hackathon.name,
            team_id: team.id,
            team_code: team.team_code,
            role: parse_column("role", &registration.role)?,
            registered_at: registration.registered_at,
        })
    }

    pub fn into_dto(self) -> ParticipantHackathonDto {
        ParticipantHackathonDto {
            hackathon_id: self.hackathon_id,
            hackathon_name: self.hackathon_name,
            team_id: self.team_id,
            team_code: self.team_code,
            role: self.role,
            registered_at: self.registered_at,
        }
    }
}

impl Page<Participant> {
    pub fn into_dto(self) -> PaginatedParticipantsDto {
        let page = self.map(Participant::into_dto);
        PaginatedParticipantsDto {
            participants: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }
    }
}
