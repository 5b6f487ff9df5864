//! Teams formed inside a hackathon.

use chrono::{DateTime, Utc};

use crate::{
    model::team::{JoinHackathonDto, TeamDto, TeamMemberDto, TeamRole},
    server::util::team_code::normalize_team_code,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub hackathon_id: i32,
    pub leader_id: i32,
    pub team_code: String,
    pub max_members: i32,
    pub min_members: i32,
    /// Members including the leader.
    pub member_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            hackathon_id: entity.hackathon_id,
            leader_id: entity.leader_id,
            team_code: entity.team_code,
            max_members: entity.max_members,
            min_members: entity.min_members,
            member_count: entity.member_count,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub participant_id: i32,
    pub name: String,
    pub email: String,
    pub role: TeamRole,
    pub joined_at: DateTime<Utc>,
}

impl TeamMember {
    /// Builds a roster entry; the team leader is flagged by comparing against `leader_id`.
    pub fn from_entity(
        membership: entity::team_member::Model,
        participant: entity::participant::Model,
        leader_id: i32,
    ) -> Self {
        Self {
            role: if participant.id == leader_id {
                TeamRole::Leader
            } else {
                TeamRole::Member
            },
            participant_id: participant.id,
            name: participant.name,
            email: participant.email,
            joined_at: membership.joined_at,
        }
    }

    pub fn into_dto(self) -> TeamMemberDto {
        TeamMemberDto {
            participant_id: self.participant_id,
            name: self.name,
            email: self.email,
            role: self.role,
            joined_at: self.joined_at,
        }
    }
}

/// A team with its roster, leader first then members by join time.
#[derive(Debug, Clone)]
pub struct TeamWithMembers {
    pub team: Team,
    pub members: Vec<TeamMember>,
}

impl TeamWithMembers {
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.team.id,
            hackathon_id: self.team.hackathon_id,
            leader_id: self.team.leader_id,
            team_code: self.team.team_code,
            max_members: self.team.max_members,
            min_members: self.team.min_members,
            member_count: self.team.member_count,
            members: self.members.into_iter().map(TeamMember::into_dto).collect(),
            created_at: self.team.created_at,
        }
    }
}

/// Request to join a hackathon, either founding a team or joining one by code.
#[derive(Debug, Clone)]
pub struct JoinHackathonParams {
    pub hackathon_id: i32,
    pub participant_id: i32,
    pub role: TeamRole,
    pub team_code: Option<String>,
}

impl JoinHackathonParams {
    pub fn from_dto(hackathon_id: i32, participant_id: i32, dto: JoinHackathonDto) -> Self {
        Self {
            hackathon_id,
            participant_id,
            role: dto.role,
            team_code: dto
                .team_code
                .map(|code| normalize_team_code(&code))
                .filter(|code| !code.is_empty()),
        }
    }
}
