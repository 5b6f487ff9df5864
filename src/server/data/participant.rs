use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::participant::{Participant, ParticipantProfile},
    util::parse::encode_json,
};

pub struct ParticipantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipantRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new participant with an already hashed password.
    pub async fn create(
        &self,
        profile: ParticipantProfile,
        password_hash: String,
    ) -> Result<Participant, DbErr> {
        let mut model = active_model(profile)?;
        model.password_hash = ActiveValue::Set(password_hash);
        model.created_at = ActiveValue::Set(Utc::now());

        let entity = model.insert(self.db).await?;

        Participant::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Participant>, DbErr> {
        entity::prelude::Participant::find_by_id(id)
            .one(self.db)
            .await?
            .map(Participant::from_entity)
            .transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Participant>, DbErr> {
        entity::prelude::Participant::find()
            .filter(entity::participant::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(Participant::from_entity)
            .transpose()
    }

    /// Checks whether another participant already uses `email`.
    pub async fn email_taken(&self, email: &str, excluding: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Participant::find()
            .filter(entity::participant::Column::Email.eq(email));
        if let Some(id) = excluding {
            query = query.filter(entity::participant::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether another participant already uses `username`.
    pub async fn username_taken(
        &self,
        username: &str,
        excluding: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Participant::find()
            .filter(entity::participant::Column::Username.eq(username));
        if let Some(id) = excluding {
            query = query.filter(entity::participant::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Participant>, u64), DbErr> {
        let paginator = entity::prelude::Participant::find()
            .order_by_asc(entity::participant::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let participants = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Participant::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((participants, total))
    }

    /// Overwrites the profile, and the password hash when one is given.
    pub async fn update(
        &self,
        id: i32,
        profile: ParticipantProfile,
        password_hash: Option<String>,
    ) -> Result<Participant, DbErr> {
        let mut model = active_model(profile)?;
        model.id = ActiveValue::Unchanged(id);
        if let Some(hash) = password_hash {
            model.password_hash = ActiveValue::Set(hash);
        }

        let entity = model.update(self.db).await?;

        Participant::from_entity(entity)
    }

    /// Deletes a participant; teams they lead, memberships and registrations cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Participant::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Maps profile fields onto an active model; ID, hash and timestamps are left unset.
fn active_model(profile: ParticipantProfile) -> Result<entity::participant::ActiveModel, DbErr> {
    Ok(entity::participant::ActiveModel {
        name: ActiveValue::Set(profile.name),
        username: ActiveValue::Set(profile.username),
        email: ActiveValue::Set(profile.email),
        phone: ActiveValue::Set(profile.phone),
        age: ActiveValue::Set(profile.age),
        experience: ActiveValue::Set(profile.experience),
        skills: ActiveValue::Set(encode_json(&profile.skills)?),
        github_link: ActiveValue::Set(profile.github_link),
        linked_in: ActiveValue::Set(profile.linked_in),
        organization: ActiveValue::Set(profile.organization),
        fields_of_interest: ActiveValue::Set(encode_json(&profile.fields_of_interest)?),
        bio: ActiveValue::Set(profile.bio),
        city: ActiveValue::Set(profile.city),
        country: ActiveValue::Set(profile.country),
        resume: ActiveValue::Set(profile.resume),
        profile_picture: ActiveValue::Set(profile.profile_picture),
        ..Default::default()
    })
}
