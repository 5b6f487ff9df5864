use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::organizer::{Organizer, OrganizerProfile};

pub struct OrganizerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrganizerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new organizer with an already hashed password.
    pub async fn create(
        &self,
        profile: OrganizerProfile,
        password_hash: String,
    ) -> Result<Organizer, DbErr> {
        let entity = entity::organizer::ActiveModel {
            name: ActiveValue::Set(profile.name),
            email: ActiveValue::Set(profile.email),
            password_hash: ActiveValue::Set(password_hash),
            profile_picture: ActiveValue::Set(profile.profile_picture),
            organization_type: ActiveValue::Set(profile.organization_type.as_str().to_string()),
            organization_name: ActiveValue::Set(profile.organization_name),
            description: ActiveValue::Set(profile.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Organizer::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Organizer>, DbErr> {
        entity::prelude::Organizer::find_by_id(id)
            .one(self.db)
            .await?
            .map(Organizer::from_entity)
            .transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Organizer>, DbErr> {
        entity::prelude::Organizer::find()
            .filter(entity::organizer::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(Organizer::from_entity)
            .transpose()
    }

    /// Checks whether another organizer already uses `email`.
    ///
    /// # Arguments
    /// - `email` - Normalized email address
    /// - `excluding` - Organizer ID to ignore, used when the owner keeps their email
    pub async fn email_taken(&self, email: &str, excluding: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Organizer::find().filter(entity::organizer::Column::Email.eq(email));
        if let Some(id) = excluding {
            query = query.filter(entity::organizer::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets organizers ordered by ID.
    ///
    /// # Returns
    /// - `Ok((organizers, total))` - Requested page and total organizer count
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Organizer>, u64), DbErr> {
        let paginator = entity::prelude::Organizer::find()
            .order_by_asc(entity::organizer::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let organizers = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Organizer::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((organizers, total))
    }

    /// Overwrites the profile, and the password hash when one is given.
    pub async fn update(
        &self,
        id: i32,
        profile: OrganizerProfile,
        password_hash: Option<String>,
    ) -> Result<Organizer, DbErr> {
        let mut model = entity::organizer::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(profile.name),
            email: ActiveValue::Set(profile.email),
            profile_picture: ActiveValue::Set(profile.profile_picture),
            organization_type: ActiveValue::Set(profile.organization_type.as_str().to_string()),
            organization_name: ActiveValue::Set(profile.organization_name),
            description: ActiveValue::Set(profile.description),
            ..Default::default()
        };
        if let Some(hash) = password_hash {
            model.password_hash = ActiveValue::Set(hash);
        }

        let entity = model.update(self.db).await?;

        Organizer::from_entity(entity)
    }

    /// Deletes an organizer; their hackathons cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Organizer deleted
    /// - `Ok(false)` - No organizer with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Organizer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
