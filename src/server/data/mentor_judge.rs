use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::mentor_judge::MentorJudgeRole,
    server::{
        model::mentor_judge::{MentorJudge, MentorJudgeProfile, PreviousEvent},
        util::parse::encode_json,
    },
};

/// Mentor/judge persistence. The profile row and its previous-event rows are written together,
/// so writers should run inside a transaction.
pub struct MentorJudgeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MentorJudgeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        profile: MentorJudgeProfile,
        password_hash: String,
    ) -> Result<MentorJudge, DbErr> {
        let events = profile.previous_events.clone();
        let mut model = active_model(profile)?;
        model.password_hash = ActiveValue::Set(password_hash);
        model.created_at = ActiveValue::Set(Utc::now());

        let entity = model.insert(self.db).await?;
        let events = self.insert_events(entity.id, events).await?;

        MentorJudge::from_entity(entity, events)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MentorJudge>, DbErr> {
        let Some(entity) = entity::prelude::MentorJudge::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let events = self.events_for(id).await?;

        MentorJudge::from_entity(entity, events).map(Some)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<MentorJudge>, DbErr> {
        let Some(entity) = entity::prelude::MentorJudge::find()
            .filter(entity::mentor_judge::Column::Email.eq(email))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let events = self.events_for(entity.id).await?;

        MentorJudge::from_entity(entity, events).map(Some)
    }

    pub async fn email_taken(&self, email: &str, excluding: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::MentorJudge::find()
            .filter(entity::mentor_judge::Column::Email.eq(email));
        if let Some(id) = excluding {
            query = query.filter(entity::mentor_judge::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets profiles ordered by ID, optionally only those offering `role`.
    pub async fn get_paginated(
        &self,
        role: Option<MentorJudgeRole>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<MentorJudge>, u64), DbErr> {
        let mut query = entity::prelude::MentorJudge::find();
        query = match role {
            Some(MentorJudgeRole::Mentor) => {
                query.filter(entity::mentor_judge::Column::IsMentor.eq(true))
            }
            Some(MentorJudgeRole::Judge) => {
                query.filter(entity::mentor_judge::Column::IsJudge.eq(true))
            }
            None => query,
        };

        let paginator = query
            .order_by_asc(entity::mentor_judge::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        // Fetch previous events for the whole page in one query
        let ids: Vec<i32> = entities.iter().map(|e| e.id).collect();
        let mut events_by_owner: HashMap<i32, Vec<entity::mentor_judge_event::Model>> =
            HashMap::new();
        if !ids.is_empty() {
            for event in entity::prelude::MentorJudgeEvent::find()
                .filter(entity::mentor_judge_event::Column::MentorJudgeId.is_in(ids))
                .order_by_asc(entity::mentor_judge_event::Column::Id)
                .all(self.db)
                .await?
            {
                events_by_owner
                    .entry(event.mentor_judge_id)
                    .or_default()
                    .push(event);
            }
        }

        let mentor_judges = entities
            .into_iter()
            .map(|entity| {
                let events = events_by_owner.remove(&entity.id).unwrap_or_default();
                MentorJudge::from_entity(entity, events)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((mentor_judges, total))
    }

    /// Overwrites the profile and replaces the previous-event rows.
    pub async fn update(
        &self,
        id: i32,
        profile: MentorJudgeProfile,
        password_hash: Option<String>,
    ) -> Result<MentorJudge, DbErr> {
        let events = profile.previous_events.clone();
        let mut model = active_model(profile)?;
        model.id = ActiveValue::Unchanged(id);
        if let Some(hash) = password_hash {
            model.password_hash = ActiveValue::Set(hash);
        }

        let entity = model.update(self.db).await?;

        entity::prelude::MentorJudgeEvent::delete_many()
            .filter(entity::mentor_judge_event::Column::MentorJudgeId.eq(id))
            .exec(self.db)
            .await?;
        let events = self.insert_events(id, events).await?;

        MentorJudge::from_entity(entity, events)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MentorJudge::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn events_for(
        &self,
        mentor_judge_id: i32,
    ) -> Result<Vec<entity::mentor_judge_event::Model>, DbErr> {
        entity::prelude::MentorJudgeEvent::find()
            .filter(entity::mentor_judge_event::Column::MentorJudgeId.eq(mentor_judge_id))
            .order_by_asc(entity::mentor_judge_event::Column::Id)
            .all(self.db)
            .await
    }

    async fn insert_events(
        &self,
        mentor_judge_id: i32,
        events: Vec<PreviousEvent>,
    ) -> Result<Vec<entity::mentor_judge_event::Model>, DbErr> {
        let mut inserted = Vec::with_capacity(events.len());
        for event in events {
            let model = entity::mentor_judge_event::ActiveModel {
                mentor_judge_id: ActiveValue::Set(mentor_judge_id),
                event_name: ActiveValue::Set(event.event_name),
                role: ActiveValue::Set(event.role),
                year: ActiveValue::Set(event.year),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            inserted.push(model);
        }

        Ok(inserted)
    }
}

fn active_model(profile: MentorJudgeProfile) -> Result<entity::mentor_judge::ActiveModel, DbErr> {
    Ok(entity::mentor_judge::ActiveModel {
        name: ActiveValue::Set(profile.name),
        email: ActiveValue::Set(profile.email),
        phone: ActiveValue::Set(profile.phone),
        experience: ActiveValue::Set(profile.experience),
        current_organization: ActiveValue::Set(profile.current_organization),
        expertise: ActiveValue::Set(encode_json(&profile.expertise)?),
        is_mentor: ActiveValue::Set(profile.is_mentor),
        is_judge: ActiveValue::Set(profile.is_judge),
        profile_picture: ActiveValue::Set(profile.profile_picture),
        ..Default::default()
    })
}
