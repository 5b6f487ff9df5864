use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

wire_enum! {
    /// Lifecycle of a hackathon or of a single timeline event.
    HackathonStatus("status") {
        Upcoming => "upcoming",
        Ongoing => "ongoing",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

wire_enum! {
    LocationType("location type") {
        Online => "online",
        Offline => "offline",
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PrizeDto {
    #[serde(default)]
    pub position: String,
    pub amount: f64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct JudgingCriterionDto {
    #[serde(default)]
    pub criterion: String,
    pub weightage: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateHackathonDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub theme: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub registration_start_date: DateTime<Utc>,
    pub registration_end_date: DateTime<Utc>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    pub location_type: LocationType,
    pub venue: Option<String>,
    pub online_platform: Option<String>,
    #[serde(default)]
    pub registration_fee: f64,
    #[serde(default)]
    pub prize_pool: f64,
    #[serde(default)]
    pub prizes: Vec<PrizeDto>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub rules: Vec<String>,
    pub min_team_size: i32,
    pub max_team_size: i32,
    pub max_participants: Option<i32>,
    #[serde(default)]
    pub judging_criteria: Vec<JudgingCriterionDto>,
    pub banner_image: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateHackathonDto {
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
    pub prizes: Option<Vec<PrizeDto>>,
    pub domains: Option<Vec<String>>,
    pub rules: Option<Vec<String>>,
    pub min_team_size: Option<i32>,
    pub max_team_size: Option<i32>,
    pub max_participants: Option<i32>,
    pub judging_criteria: Option<Vec<JudgingCriterionDto>>,
    pub banner_image: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct UpdateStatusDto {
    pub status: HackathonStatus,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct HackathonDto {
    pub id: i32,
    pub organizer_id: i32,
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
    pub prizes: Vec<PrizeDto>,
    pub domains: Vec<String>,
    pub rules: Vec<String>,
    pub min_team_size: i32,
    pub max_team_size: i32,
    pub max_participants: Option<i32>,
    pub current_participants: i32,
    pub judging_criteria: Vec<JudgingCriterionDto>,
    pub status: HackathonStatus,
    pub banner_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PaginatedHackathonsDto {
    pub hackathons: Vec<HackathonDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
