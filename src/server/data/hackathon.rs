use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::hackathon::HackathonStatus,
    server::{
        model::hackathon::{
            CreateHackathonParams, Hackathon, HackathonDetails, JudgingCriterion, Prize,
        },
        util::parse::encode_json,
    },
};

type PrizeRows = Vec<entity::hackathon_prize::Model>;
type CriterionRows = Vec<entity::hackathon_judging_criterion::Model>;

/// Hackathon persistence. A hackathon row and its prize and criterion rows are written
/// together, so writers should run inside a transaction.
pub struct HackathonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HackathonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a hackathon in `upcoming` state with no participants.
    pub async fn create(&self, params: CreateHackathonParams) -> Result<Hackathon, DbErr> {
        let now = Utc::now();
        let details = params.details;
        let prizes = details.prizes.clone();
        let criteria = details.judging_criteria.clone();

        let mut model = active_model(details)?;
        model.organizer_id = ActiveValue::Set(params.organizer_id);
        model.current_participants = ActiveValue::Set(0);
        model.status = ActiveValue::Set(HackathonStatus::Upcoming.as_str().to_string());
        model.created_at = ActiveValue::Set(now);
        model.updated_at = ActiveValue::Set(now);

        let entity = model.insert(self.db).await?;
        let (prizes, criteria) = self.insert_children(entity.id, prizes, criteria).await?;

        Hackathon::from_entity(entity, prizes, criteria)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Hackathon>, DbErr> {
        let Some(entity) = entity::prelude::Hackathon::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut children = self.children_for(vec![id]).await?;
        let (prizes, criteria) = children.remove(&id).unwrap_or_default();

        Hackathon::from_entity(entity, prizes, criteria).map(Some)
    }

    /// Gets hackathons ordered by start date, optionally filtered by status.
    pub async fn get_paginated(
        &self,
        status: Option<HackathonStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Hackathon>, u64), DbErr> {
        let mut query = entity::prelude::Hackathon::find();
        if let Some(status) = status {
            query = query.filter(entity::hackathon::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_asc(entity::hackathon::Column::StartDate)
            .order_by_asc(entity::hackathon::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((self.with_children(entities).await?, total))
    }

    /// Gets every hackathon created by an organizer, newest first.
    pub async fn get_by_organizer(&self, organizer_id: i32) -> Result<Vec<Hackathon>, DbErr> {
        let entities = entity::prelude::Hackathon::find()
            .filter(entity::hackathon::Column::OrganizerId.eq(organizer_id))
            .order_by_desc(entity::hackathon::Column::CreatedAt)
            .order_by_desc(entity::hackathon::Column::Id)
            .all(self.db)
            .await?;

        self.with_children(entities).await
    }

    /// Overwrites the organizer-editable fields and replaces prizes and criteria.
    pub async fn update(&self, id: i32, details: HackathonDetails) -> Result<Hackathon, DbErr> {
        let prizes = details.prizes.clone();
        let criteria = details.judging_criteria.clone();

        let mut model = active_model(details)?;
        model.id = ActiveValue::Unchanged(id);
        model.updated_at = ActiveValue::Set(Utc::now());
        let entity = model.update(self.db).await?;

        entity::prelude::HackathonPrize::delete_many()
            .filter(entity::hackathon_prize::Column::HackathonId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::HackathonJudgingCriterion::delete_many()
            .filter(entity::hackathon_judging_criterion::Column::HackathonId.eq(id))
            .exec(self.db)
            .await?;
        let (prizes, criteria) = self.insert_children(id, prizes, criteria).await?;

        Hackathon::from_entity(entity, prizes, criteria)
    }

    /// Sets the status.
    ///
    /// # Returns
    /// - `Ok(true)` - Status updated
    /// - `Ok(false)` - No hackathon with that ID
    pub async fn update_status(&self, id: i32, status: HackathonStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Hackathon::update_many()
            .col_expr(
                entity::hackathon::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(entity::hackathon::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::hackathon::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a hackathon; timeline, teams and registrations cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Hackathon::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Reserves one participant slot.
    ///
    /// A single conditional UPDATE: the counter only moves while the hackathon is uncapped
    /// or below its cap, so concurrent joins can never overshoot.
    ///
    /// # Returns
    /// - `Ok(true)` - Slot reserved
    /// - `Ok(false)` - Hackathon is full (or does not exist)
    pub async fn try_reserve_slot(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Hackathon::update_many()
            .col_expr(
                entity::hackathon::Column::CurrentParticipants,
                Expr::cust("current_participants + 1"),
            )
            .filter(entity::hackathon::Column::Id.eq(id))
            .filter(
                Condition::any()
                    .add(entity::hackathon::Column::MaxParticipants.is_null())
                    .add(Expr::cust("current_participants < max_participants")),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gives back `count` slots, e.g. when registered participants delete their account.
    ///
    /// Never drops the counter below zero.
    pub async fn release_slots(&self, id: i32, count: i32) -> Result<(), DbErr> {
        entity::prelude::Hackathon::update_many()
            .col_expr(
                entity::hackathon::Column::CurrentParticipants,
                Expr::cust_with_values("MAX(current_participants - ?, 0)", [count]),
            )
            .filter(entity::hackathon::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets the capacity unless more participants than that are already registered.
    ///
    /// Single conditional UPDATE on `current_participants <= max_participants`, so a join
    /// committing concurrently cannot leave the hackathon over capacity.
    ///
    /// # Returns
    /// - `Ok(true)` - Capacity set
    /// - `Ok(false)` - No hackathon with that ID, or the new capacity is too low
    pub async fn try_set_capacity(
        &self,
        id: i32,
        max_participants: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut update = entity::prelude::Hackathon::update_many()
            .col_expr(
                entity::hackathon::Column::MaxParticipants,
                Expr::value(max_participants),
            )
            .filter(entity::hackathon::Column::Id.eq(id));
        if let Some(max_participants) = max_participants {
            update = update
                .filter(entity::hackathon::Column::CurrentParticipants.lte(max_participants));
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected == 1)
    }

    /// Moves hackathons along their schedule.
    ///
    /// Upcoming hackathons whose start has passed become ongoing; upcoming or ongoing
    /// hackathons whose end has passed become completed. Cancelled ones are left alone.
    ///
    /// # Returns
    /// - `Ok((started, completed))` - Number of rows moved into each state
    pub async fn advance_statuses(&self, now: DateTime<Utc>) -> Result<(u64, u64), DbErr> {
        let completed = entity::prelude::Hackathon::update_many()
            .col_expr(
                entity::hackathon::Column::Status,
                Expr::value(HackathonStatus::Completed.as_str()),
            )
            .col_expr(entity::hackathon::Column::UpdatedAt, Expr::value(now))
            .filter(entity::hackathon::Column::Status.is_in([
                HackathonStatus::Upcoming.as_str(),
                HackathonStatus::Ongoing.as_str(),
            ]))
            .filter(entity::hackathon::Column::EndDate.lte(now))
            .exec(self.db)
            .await?;

        let started = entity::prelude::Hackathon::update_many()
            .col_expr(
                entity::hackathon::Column::Status,
                Expr::value(HackathonStatus::Ongoing.as_str()),
            )
            .col_expr(entity::hackathon::Column::UpdatedAt, Expr::value(now))
            .filter(entity::hackathon::Column::Status.eq(HackathonStatus::Upcoming.as_str()))
            .filter(entity::hackathon::Column::StartDate.lte(now))
            .exec(self.db)
            .await?;

        Ok((started.rows_affected, completed.rows_affected))
    }

    async fn with_children(
        &self,
        entities: Vec<entity::hackathon::Model>,
    ) -> Result<Vec<Hackathon>, DbErr> {
        let ids = entities.iter().map(|e| e.id).collect();
        let mut children = self.children_for(ids).await?;

        entities
            .into_iter()
            .map(|entity| {
                let (prizes, criteria) = children.remove(&entity.id).unwrap_or_default();
                Hackathon::from_entity(entity, prizes, criteria)
            })
            .collect()
    }

    /// Fetches prizes and criteria for many hackathons in two queries.
    async fn children_for(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, (PrizeRows, CriterionRows)>, DbErr> {
        let mut children: HashMap<i32, (PrizeRows, CriterionRows)> = HashMap::new();
        if ids.is_empty() {
            return Ok(children);
        }

        for prize in entity::prelude::HackathonPrize::find()
            .filter(entity::hackathon_prize::Column::HackathonId.is_in(ids.clone()))
            .all(self.db)
            .await?
        {
            children.entry(prize.hackathon_id).or_default().0.push(prize);
        }

        for criterion in entity::prelude::HackathonJudgingCriterion::find()
            .filter(entity::hackathon_judging_criterion::Column::HackathonId.is_in(ids))
            .all(self.db)
            .await?
        {
            children
                .entry(criterion.hackathon_id)
                .or_default()
                .1
                .push(criterion);
        }

        Ok(children)
    }

    async fn insert_children(
        &self,
        hackathon_id: i32,
        prizes: Vec<Prize>,
        criteria: Vec<JudgingCriterion>,
    ) -> Result<(PrizeRows, CriterionRows), DbErr> {
        let mut prize_rows = Vec::with_capacity(prizes.len());
        for (ordinal, prize) in prizes.into_iter().enumerate() {
            let row = entity::hackathon_prize::ActiveModel {
                hackathon_id: ActiveValue::Set(hackathon_id),
                ordinal: ActiveValue::Set(ordinal as i32),
                position: ActiveValue::Set(prize.position),
                amount: ActiveValue::Set(prize.amount),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            prize_rows.push(row);
        }

        let mut criterion_rows = Vec::with_capacity(criteria.len());
        for (ordinal, criterion) in criteria.into_iter().enumerate() {
            let row = entity::hackathon_judging_criterion::ActiveModel {
                hackathon_id: ActiveValue::Set(hackathon_id),
                ordinal: ActiveValue::Set(ordinal as i32),
                criterion: ActiveValue::Set(criterion.criterion),
                weightage: ActiveValue::Set(criterion.weightage),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            criterion_rows.push(row);
        }

        Ok((prize_rows, criterion_rows))
    }
}

/// Maps organizer-editable fields onto an active model.
fn active_model(details: HackathonDetails) -> Result<entity::hackathon::ActiveModel, DbErr> {
    Ok(entity::hackathon::ActiveModel {
        name: ActiveValue::Set(details.name),
        description: ActiveValue::Set(details.description),
        theme: ActiveValue::Set(details.theme),
        start_date: ActiveValue::Set(details.start_date),
        end_date: ActiveValue::Set(details.end_date),
        registration_start_date: ActiveValue::Set(details.registration_start_date),
        registration_end_date: ActiveValue::Set(details.registration_end_date),
        duration: ActiveValue::Set(details.duration),
        start_time: ActiveValue::Set(details.start_time),
        end_time: ActiveValue::Set(details.end_time),
        location_type: ActiveValue::Set(details.location_type.as_str().to_string()),
        venue: ActiveValue::Set(details.venue),
        online_platform: ActiveValue::Set(details.online_platform),
        registration_fee: ActiveValue::Set(details.registration_fee),
        prize_pool: ActiveValue::Set(details.prize_pool),
        domains: ActiveValue::Set(encode_json(&details.domains)?),
        rules: ActiveValue::Set(encode_json(&details.rules)?),
        min_team_size: ActiveValue::Set(details.min_team_size),
        max_team_size: ActiveValue::Set(details.max_team_size),
        max_participants: ActiveValue::Set(details.max_participants),
        banner_image: ActiveValue::Set(details.banner_image),
        ..Default::default()
    })
}
