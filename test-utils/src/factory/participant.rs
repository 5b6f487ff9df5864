//! Participant factory.

use crate::{factory::helpers::next_id, fixture};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ParticipantFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    username: String,
    email: String,
    password_hash: String,
    age: i32,
}

impl<'a> ParticipantFactory<'a> {
    /// Defaults: username `participant{id}`, matching email, age 21, placeholder hash.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Participant {}", id),
            username: format!("participant{}", id),
            email: format!("participant{}@example.com", id),
            password_hash: "unhashed".to_string(),
            age: fixture::participant::DEFAULT_AGE,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub async fn build(self) -> Result<entity::participant::Model, DbErr> {
        let defaults = fixture::participant::entity();

        entity::participant::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            phone: ActiveValue::Set(defaults.phone),
            age: ActiveValue::Set(self.age),
            experience: ActiveValue::Set(defaults.experience),
            skills: ActiveValue::Set(defaults.skills),
            github_link: ActiveValue::Set(defaults.github_link),
            linked_in: ActiveValue::Set(defaults.linked_in),
            organization: ActiveValue::Set(defaults.organization),
            fields_of_interest: ActiveValue::Set(defaults.fields_of_interest),
            bio: ActiveValue::Set(defaults.bio),
            city: ActiveValue::Set(defaults.city),
            country: ActiveValue::Set(defaults.country),
            resume: ActiveValue::Set(None),
            profile_picture: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_participant(
    db: &DatabaseConnection,
) -> Result<entity::participant::Model, DbErr> {
    ParticipantFactory::new(db).build().await
}
