//! Hackathon events, their prizes and judging criteria.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::hackathon::{
        CreateHackathonDto, HackathonDto, HackathonStatus, JudgingCriterionDto, LocationType,
        PaginatedHackathonsDto, PrizeDto, UpdateHackathonDto,
    },
    server::{
        model::Page,
        util::parse::{decode_json, parse_column},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Prize {
    pub position: String,
    pub amount: f64,
}

impl Prize {
    pub fn from_dto(dto: PrizeDto) -> Self {
        Self {
            position: dto.position.trim().to_string(),
            amount: dto.amount,
        }
    }

    pub fn into_dto(self) -> PrizeDto {
        PrizeDto {
            position: self.position,
            amount: self.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JudgingCriterion {
    pub criterion: String,
    pub weightage: i32,
}

impl JudgingCriterion {
    pub fn from_dto(dto: JudgingCriterionDto) -> Self {
        Self {
            criterion: dto.criterion.trim().to_string(),
            weightage: dto.weightage,
        }
    }

    pub fn into_dto(self) -> JudgingCriterionDto {
        JudgingCriterionDto {
            criterion: self.criterion,
            weightage: self.weightage,
        }
    }
}

/// Hackathon fields set by the organizer on create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct HackathonDetails {
    pub name: String,
    pub description: String,
    pub theme: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub registration_start_date: DateTime<Utc>,
    pub registration_end_date: DateTime<Utc>,
    pub duration: String,
    pub start_time: String,
    pub end_time: String,
    pub location_type: LocationType,
    pub venue: Option<String>,
    pub online_platform: Option<String>,
    pub registration_fee: f64,
    pub prize_pool: f64,
    pub prizes: Vec<Prize>,
    pub domains: Vec<String>,
    pub rules: Vec<String>,
    pub min_team_size: i32,
    pub max_team_size: i32,
    /// Hackathon-wide participant cap; `None` means unlimited.
    pub max_participants: Option<i32>,
    pub judging_criteria: Vec<JudgingCriterion>,
    pub banner_image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Hackathon {
    pub id: i32,
    pub organizer_id: i32,
    pub details: HackathonDetails,
    pub current_participants: i32,
    pub status: HackathonStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hackathon {
    /// Converts the entity and its child rows to a domain model.
    ///
    /// Prizes and criteria are ordered by their stored ordinal.
    ///
    /// # Returns
    /// - `Ok(Hackathon)` - Converted model
    /// - `Err(DbErr::Custom)` - Unknown stored status or location type
    /// - `Err(DbErr::Json)` - Domains or rules column is not a string list
    pub fn from_entity(
        entity: entity::hackathon::Model,
        mut prizes: Vec<entity::hackathon_prize::Model>,
        mut criteria: Vec<entity::hackathon_judging_criterion::Model>,
    ) -> Result<Self, DbErr> {
        prizes.sort_by_key(|p| p.ordinal);
        criteria.sort_by_key(|c| c.ordinal);

        Ok(Self {
            id: entity.id,
            organizer_id: entity.organizer_id,
            details: HackathonDetails {
                name: entity.name,
                description: entity.description,
                theme: entity.theme,
                start_date: entity.start_date,
                end_date: entity.end_date,
                registration_start_date: entity.registration_start_date,
                registration_end_date: entity.registration_end_date,
                duration: entity.duration,
                start_time: entity.start_time,
                end_time: entity.end_time,
                location_type: parse_column("location_type", &entity.location_type)?,
                venue: entity.venue,
                online_platform: entity.online_platform,
                registration_fee: entity.registration_fee,
                prize_pool: entity.prize_pool,
                prizes: prizes
                    .into_iter()
                    .map(|p| Prize {
                        position: p.position,
                        amount: p.amount,
                    })
                    .collect(),
                domains: decode_json("domains", entity.domains)?,
                rules: decode_json("rules", entity.rules)?,
                min_team_size: entity.min_team_size,
                max_team_size: entity.max_team_size,
                max_participants: entity.max_participants,
                judging_criteria: criteria
                    .into_iter()
                    .map(|c| JudgingCriterion {
                        criterion: c.criterion,
                        weightage: c.weightage,
                    })
                    .collect(),
                banner_image: entity.banner_image,
            },
            current_participants: entity.current_participants,
            status: parse_column("status", &entity.status)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Whether the hackathon no longer accepts registrations.
    pub fn is_closed(&self) -> bool {
        matches!(
            self.status,
            HackathonStatus::Completed | HackathonStatus::Cancelled
        )
    }

    pub fn into_dto(self) -> HackathonDto {
        let d = self.details;
        HackathonDto {
            id: self.id,
            organizer_id: self.organizer_id,
            name: d.name,
            description: d.description,
            theme: d.theme,
            start_date: d.start_date,
            end_date: d.end_date,
            registration_start_date: d.registration_start_date,
            registration_end_date: d.registration_end_date,
            duration: d.duration,
            start_time: d.start_time,
            end_time: d.end_time,
            location_type: d.location_type,
            venue: d.venue,
            online_platform: d.online_platform,
            registration_fee: d.registration_fee,
            prize_pool: d.prize_pool,
            prizes: d.prizes.into_iter().map(Prize::into_dto).collect(),
            domains: d.domains,
            rules: d.rules,
            min_team_size: d.min_team_size,
            max_team_size: d.max_team_size,
            max_participants: d.max_participants,
            current_participants: self.current_participants,
            judging_criteria: d
                .judging_criteria
                .into_iter()
                .map(JudgingCriterion::into_dto)
                .collect(),
            status: self.status,
            banner_image: d.banner_image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateHackathonParams {
    pub organizer_id: i32,
    pub details: HackathonDetails,
}

impl CreateHackathonParams {
    pub fn from_dto(organizer_id: i32, dto: CreateHackathonDto) -> Self {
        let trim_all = |list: Vec<String>| -> Vec<String> {
            list.into_iter().map(|v| v.trim().to_string()).collect()
        };
        Self {
            organizer_id,
            details: HackathonDetails {
                name: dto.name.trim().to_string(),
                description: dto.description.trim().to_string(),
                theme: dto.theme.trim().to_string(),
                start_date: dto.start_date,
                end_date: dto.end_date,
                registration_start_date: dto.registration_start_date,
                registration_end_date: dto.registration_end_date,
                duration: dto.duration.trim().to_string(),
                start_time: dto.start_time.trim().to_string(),
                end_time: dto.end_time.trim().to_string(),
                location_type: dto.location_type,
                venue: dto.venue.map(|v| v.trim().to_string()),
                online_platform: dto.online_platform.map(|v| v.trim().to_string()),
                registration_fee: dto.registration_fee,
                prize_pool: dto.prize_pool,
                prizes: dto.prizes.into_iter().map(Prize::from_dto).collect(),
                domains: trim_all(dto.domains),
                rules: trim_all(dto.rules),
                min_team_size: dto.min_team_size,
                max_team_size: dto.max_team_size,
                max_participants: dto.max_participants,
                judging_criteria: dto
                    .judging_criteria
                    .into_iter()
                    .map(JudgingCriterion::from_dto)
                    .collect(),
                banner_image: dto.banner_image,
            },
        }
    }
}

/// Partial update; `None` keeps the stored value. Provided lists replace the stored ones.
#[derive(Debug, Clone, Default)]
pub struct UpdateHackathonParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub theme: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub registration_start_date: Option<DateTime<Utc>>,
    pub registration_end_date: Option<DateTime<Utc>>,
    pub duration: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location_type: Option<LocationType>,
    pub venue: Option<String>,
    pub online_platform: Option<String>,
    pub registration_fee: Option<f64>,
    pub prize_pool: Option<f64>,
    pub prizes: Option<Vec<Prize>>,
    pub domains: Option<Vec<String>>,
    pub rules: Option<Vec<String>>,
    pub min_team_size: Option<i32>,
    pub max_team_size: Option<i32>,
    pub max_participants: Option<i32>,
    pub judging_criteria: Option<Vec<JudgingCriterion>>,
    pub banner_image: Option<String>,
}

impl UpdateHackathonParams {
    pub fn from_dto(id: i32, dto: UpdateHackathonDto) -> Self {
        let trim = |v: String| v.trim().to_string();
        Self {
            id,
            name: dto.name.map(trim),
            description: dto.description.map(trim),
            theme: dto.theme.map(trim),
            start_date: dto.start_date,
            end_date: dto.end_date,
            registration_start_date: dto.registration_start_date,
            registration_end_date: dto.registration_end_date,
            duration: dto.duration.map(trim),
            start_time: dto.start_time.map(trim),
            end_time: dto.end_time.map(trim),
            location_type: dto.location_type,
            venue: dto.venue.map(trim),
            online_platform: dto.online_platform.map(trim),
            registration_fee: dto.registration_fee,
            prize_pool: dto.prize_pool,
            prizes: dto
                .prizes
                .map(|list| list.into_iter().map(Prize::from_dto).collect()),
            domains: dto.domains,
            rules: dto.rules,
            min_team_size: dto.min_team_size,
            max_team_size: dto.max_team_size,
            max_participants: dto.max_participants,
            judging_criteria: dto
                .judging_criteria
                .map(|list| list.into_iter().map(JudgingCriterion::from_dto).collect()),
            banner_image: dto.banner_image,
        }
    }

    pub fn apply_to(&self, d: HackathonDetails) -> HackathonDetails {
        HackathonDetails {
            name: self.name.clone().unwrap_or(d.name),
            description: self.description.clone().unwrap_or(d.description),
            theme: self.theme.clone().unwrap_or(d.theme),
            start_date: self.start_date.unwrap_or(d.start_date),
            end_date: self.end_date.unwrap_or(d.end_date),
            registration_start_date: self
                .registration_start_date
                .unwrap_or(d.registration_start_date),
            registration_end_date: self
                .registration_end_date
                .unwrap_or(d.registration_end_date),
            duration: self.duration.clone().unwrap_or(d.duration),
            start_time: self.start_time.clone().unwrap_or(d.start_time),
            end_time: self.end_time.clone().unwrap_or(d.end_time),
            location_type: self.location_type.unwrap_or(d.location_type),
            venue: self.venue.clone().or(d.venue),
            online_platform: self.online_platform.clone().or(d.online_platform),
            registration_fee: self.registration_fee.unwrap_or(d.registration_fee),
            prize_pool: self.prize_pool.unwrap_or(d.prize_pool),
            prizes: self.prizes.clone().unwrap_or(d.prizes),
            domains: self.domains.clone().unwrap_or(d.domains),
            rules: self.rules.clone().unwrap_or(d.rules),
            min_team_size: self.min_team_size.unwrap_or(d.min_team_size),
            max_team_size: self.max_team_size.unwrap_or(d.max_team_size),
            max_participants: self.max_participants.or(d.max_participants),
            judging_criteria: self
                .judging_criteria
                .clone()
                .unwrap_or(d.judging_criteria),
            banner_image: self.banner_image.clone().or(d.banner_image),
        }
    }
}

impl Page<Hackathon> {
    pub fn into_dto(self) -> PaginatedHackathonsDto {
        let page = self.map(Hackathon::into_dto);
        PaginatedHackathonsDto {
            hackathons: page.items,
            total: page.total,
            page: page.page,
            per_page: page.per_page,
            total_pages: page.total_pages,
        }
    }
}
