//! Organizer accounts.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::organizer::{
        OrganizationType, OrganizerDto, PaginatedOrganizersDto, RegisterOrganizerDto,
        UpdateOrganizerDto,
    },
    server::{model::Page, util::parse::parse_column},
};

/// Organizer fields editable by the account owner.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizerProfile {
    pub name: String,
    pub email: String,
    pub profile_picture: Option<String>,
    pub organization_type: OrganizationType,
    pub organization_name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct Organizer {
    pub id: i32,
    pub password_hash: String,
    pub profile: OrganizerProfile,
    pub created_at: DateTime<Utc>,
}

impl Organizer {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Organizer)` - Converted model
    /// - `Err(DbErr::Custom)` - Stored organization type is unknown
    pub fn from_entity(entity: entity::organizer::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            password_hash: entity.password_hash,
            profile: OrganizerProfile {
                name: entity.name,
                email: entity.email,
                profile_picture: entity.profile_picture,
                organization_type: parse_column("organization_type", &entity.organization_type)?,
                organization_name: entity.organization_name,
                description: entity.description,
            },
            created_at: entity.created_at,
        })
    }

    /// Converts to a DTO; the password hash is dropped.
    pub fn into_dto(self) -> OrganizerDto {
        OrganizerDto {
            id: self.id,
            name: self.profile.name,
            email: self.profile.email,
            profile_picture: self.profile.profile_picture,
            organization_type: self.profile.organization_type,
            organization_name: self.profile.organization_name,
            description: self.profile.description,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterOrganizerParams {
    pub profile: OrganizerProfile,
    pub password: String,
}

impl RegisterOrganizerParams {
    pub fn from_dto(dto: RegisterOrganizerDto) -> Self {
        Self {
            profile: OrganizerProfile {
                name: dto.name.trim().to_string(),
                email: dto.email.trim().to_lowercase(),
                profile_picture: dto.profile_picture,
                organization_type: dto.organization_type,
                organization_name: dto.organization_name.trim().to_string(),
                description: dto.description.trim().to_string(),
            },
            password: dto.password,
        }
    }
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone)]
pub struct UpdateOrganizerParams {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub profile_picture: Option<String>,
    pub organization_type: Option<OrganizationType>,
    pub organization_name: Option<String>,
    pub description: Option<String>,
}

impl UpdateOrganizerParams {
    pub fn from_dto(id: i32, dto: UpdateOrganizerDto) -> Self {
        Self {
            id,
            name: dto.name.map(|v| v.trim().to_string()),
            email: dto.email.map(|v| v.trim().to_lowercase()),
            password: dto.password,
            profile_picture: dto.profile_picture,
            organization_type: dto.organization_type,
            organization_name: dto.organization_name.map(|v| v.trim().to_string()),
            description: dto.description.map(|v| v.trim().to_string()),
        }
    }

    /// Merges the changes over the stored profile.
    pub fn apply_to(&self, profile: OrganizerProfile) -> OrganizerProfile {
        OrganizerProfile {
            name: self.name.clone().unwrap_or(profile.name),
            email: self.email.clone().unwrap_or(profile.email),
            profile_picture: self.profile_picture.clone().or(profile.profile_picture),
            organization_type: self.organization_type.unwrap_or(profile.organization_type),
            organization_name: self
                .organization_name
                .clone()
                .unwrap_or(profile.organization_name),
            description: self.description.clone().unwrap_or(profile.description),
        }
    }
}

impl Page<Organizer> {
    pub fn into_dto(self) -> PaginatedOrganizersDto {
        let page = self.map(Organizer::into_dto);
        PaginatedOrganizersDto {
            organizers: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }
    }
}
