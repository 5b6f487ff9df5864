//! Organizer factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct OrganizerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password_hash: String,
    organization_type: String,
}

impl<'a> OrganizerFactory<'a> {
    /// Defaults: email `organizer{id}@example.com`, type `company`, placeholder hash.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Organizer {}", id),
            email: format!("organizer{}@example.com", id),
            password_hash: "unhashed".to_string(),
            organization_type: "company".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
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

    pub fn organization_type(mut self, organization_type: impl Into<String>) -> Self {
        self.organization_type = organization_type.into();
        self
    }

    pub async fn build(self) -> Result<entity::organizer::Model, DbErr> {
        entity::organizer::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            profile_picture: ActiveValue::Set(None),
            organization_type: ActiveValue::Set(self.organization_type),
            organization_name: ActiveValue::Set("Test Org".to_string()),
            description: ActiveValue::Set("Runs hackathons".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_organizer(db: &DatabaseConnection) -> Result<entity::organizer::Model, DbErr> {
    OrganizerFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_organizers_with_unique_emails() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_account_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_organizer(db).await?;
        let second = create_organizer(db).await?;

        assert_ne!(first.email, second.email);
        assert_eq!(first.organization_type, "company");

        Ok(())
    }
}
