use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::team::TeamRole,
    server::model::team::{Team, TeamMember, TeamWithMembers},
};

/// Parameters for founding a team; the leader counts as its first member.
pub struct NewTeam {
    pub hackathon_id: i32,
    pub leader_id: i32,
    pub team_code: String,
    pub max_members: i32,
    pub min_members: i32,
}

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn code_exists(&self, team_code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Team::find()
            .filter(entity::team::Column::TeamCode.eq(team_code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts the team and the leader's membership row.
    pub async fn create(&self, team: NewTeam) -> Result<Team, DbErr> {
        let now = Utc::now();
        let entity = entity::team::ActiveModel {
            hackathon_id: ActiveValue::Set(team.hackathon_id),
            leader_id: ActiveValue::Set(team.leader_id),
            team_code: ActiveValue::Set(team.team_code),
            max_members: ActiveValue::Set(team.max_members),
            min_members: ActiveValue::Set(team.min_members),
            member_count: ActiveValue::Set(1),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_membership(entity.id, team.leader_id).await?;

        Ok(Team::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        Ok(entity::prelude::Team::find_by_id(id)
            .one(self.db)
            .await?
            .map(Team::from_entity))
    }

    /// Looks a team up by code within one hackathon.
    pub async fn find_by_code(
        &self,
        hackathon_id: i32,
        team_code: &str,
    ) -> Result<Option<Team>, DbErr> {
        Ok(entity::prelude::Team::find()
            .filter(entity::team::Column::HackathonId.eq(hackathon_id))
            .filter(entity::team::Column::TeamCode.eq(team_code))
            .one(self.db)
            .await?
            .map(Team::from_entity))
    }

    /// Reserves one seat on a team.
    ///
    /// Single conditional UPDATE on `member_count < max_members`.
    ///
    /// # Returns
    /// - `Ok(true)` - Seat reserved
    /// - `Ok(false)` - Team is full
    pub async fn try_reserve_seat(&self, team_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Team::update_many()
            .col_expr(
                entity::team::Column::MemberCount,
                Expr::cust("member_count + 1"),
            )
            .filter(entity::team::Column::Id.eq(team_id))
            .filter(Expr::cust("member_count < max_members"))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Frees the seat of a member leaving the team.
    pub async fn release_seat(&self, team_id: i32) -> Result<(), DbErr> {
        entity::prelude::Team::update_many()
            .col_expr(
                entity::team::Column::MemberCount,
                Expr::cust("member_count - 1"),
            )
            .filter(entity::team::Column::Id.eq(team_id))
            .filter(entity::team::Column::MemberCount.gt(0))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn add_member(&self, team_id: i32, participant_id: i32) -> Result<(), DbErr> {
        self.insert_membership(team_id, participant_id).await
    }

    /// Gets a team with its roster, leader first.
    pub async fn get_with_members(&self, team_id: i32) -> Result<Option<TeamWithMembers>, DbErr> {
        let Some(team) = self.find_by_id(team_id).await? else {
            return Ok(None);
        };

        let mut rosters = self.rosters_for(std::slice::from_ref(&team)).await?;
        let members = rosters.remove(&team.id).unwrap_or_default();

        Ok(Some(TeamWithMembers { team, members }))
    }

    /// Gets every team in a hackathon with rosters, oldest team first.
    pub async fn get_by_hackathon(&self, hackathon_id: i32) -> Result<Vec<TeamWithMembers>, DbErr> {
        let teams: Vec<Team> = entity::prelude::Team::find()
            .filter(entity::team::Column::HackathonId.eq(hackathon_id))
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Team::from_entity)
            .collect();

        let mut rosters = self.rosters_for(&teams).await?;

        Ok(teams
            .into_iter()
            .map(|team| {
                let members = rosters.remove(&team.id).unwrap_or_default();
                TeamWithMembers { team, members }
            })
            .collect())
    }

    async fn insert_membership(&self, team_id: i32, participant_id: i32) -> Result<(), DbErr> {
        entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            participant_id: ActiveValue::Set(participant_id),
            joined_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Loads the rosters of many teams with one membership query and one participant query.
    async fn rosters_for(&self, teams: &[Team]) -> Result<HashMap<i32, Vec<TeamMember>>, DbErr> {
        let mut rosters: HashMap<i32, Vec<TeamMember>> = HashMap::new();
        if teams.is_empty() {
            return Ok(rosters);
        }

        let leaders: HashMap<i32, i32> = teams.iter().map(|t| (t.id, t.leader_id)).collect();
        let memberships = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.is_in(leaders.keys().copied()))
            .order_by_asc(entity::team_member::Column::JoinedAt)
            .order_by_asc(entity::team_member::Column::Id)
            .all(self.db)
            .await?;

        let participant_ids: Vec<i32> = memberships.iter().map(|m| m.participant_id).collect();
        let mut participants: HashMap<i32, entity::participant::Model> =
            entity::prelude::Participant::find()
                .filter(entity::participant::Column::Id.is_in(participant_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect();

        for membership in memberships {
            let Some(participant) = participants.remove(&membership.participant_id) else {
                continue;
            };
            let leader_id = leaders.get(&membership.team_id).copied().unwrap_or_default();
            rosters
                .entry(membership.team_id)
                .or_default()
                .push(TeamMember::from_entity(membership, participant, leader_id));
        }

        // Leader first, then by join order
        for roster in rosters.values_mut() {
            roster.sort_by_key(|m| m.role != TeamRole::Leader);
        }

        Ok(rosters)
    }
}
