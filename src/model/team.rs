use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

wire_enum! {
    TeamRole("role") {
        Leader => "leader",
        Member => "member",
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct JoinHackathonDto {
    pub role: TeamRole,
    /// Required when joining as a member.
    pub team_code: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct TeamMemberDto {
    pub participant_id: i32,
    pub name: String,
    pub email: String,
    pub role: TeamRole,
    pub joined_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct TeamDto {
    pub id: i32,
    pub hackathon_id: i32,
    pub leader_id: i32,
    pub team_code: String,
    pub max_members: i32,
    pub min_members: i32,
    pub member_count: i32,
    pub members: Vec<TeamMemberDto>,
    pub created_at: DateTime<Utc>,
}
