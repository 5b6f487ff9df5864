use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

wire_enum! {
    /// Filter for listing mentor/judge profiles by the role they offer.
    MentorJudgeRole("role") {
        Mentor => "mentor",
        Judge => "judge",
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PreviousEventDto {
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub role: String,
    pub year: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RegisterMentorJudgeDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub current_organization: String,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub previous_events: Vec<PreviousEventDto>,
    #[serde(default)]
    pub is_mentor: bool,
    #[serde(default)]
    pub is_judge: bool,
    pub profile_picture: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateMentorJudgeDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub experience: Option<String>,
    pub current_organization: Option<String>,
    pub expertise: Option<Vec<String>>,
    pub previous_events: Option<Vec<PreviousEventDto>>,
    pub is_mentor: Option<bool>,
    pub is_judge: Option<bool>,
    pub profile_picture: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct MentorJudgeDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub current_organization: String,
    pub expertise: Vec<String>,
    pub previous_events: Vec<PreviousEventDto>,
    pub is_mentor: bool,
    pub is_judge: bool,
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PaginatedMentorJudgesDto {
    pub mentor_judges: Vec<MentorJudgeDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
