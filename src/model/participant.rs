use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::team::TeamRole;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RegisterParticipantDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub phone: Option<String>,
    pub age: i32,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub github_link: String,
    #[serde(default)]
    pub linked_in: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub fields_of_interest: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    pub resume: Option<String>,
    pub profile_picture: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateParticipantDto {
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

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ParticipantDto {
    pub id: i32,
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
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PaginatedParticipantsDto {
    pub participants: Vec<ParticipantDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// A hackathon the participant has joined, with the team they joined it through.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ParticipantHackathonDto {
    pub hackathon_id: i32,
    pub hackathon_name: String,
    pub team_id: i32,
    pub team_code: String,
    pub role: TeamRole,
    pub registered_at: DateTime<Utc>,
}
