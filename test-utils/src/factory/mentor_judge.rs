//! Mentor/judge factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

pub struct MentorJudgeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password_hash: String,
    is_mentor: bool,
    is_judge: bool,
}

impl<'a> MentorJudgeFactory<'a> {
    /// Defaults: email `mentor{id}@example.com`, mentor only, placeholder hash.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Mentor {}", id),
            email: format!("mentor{}@example.com", id),
            password_hash: "unhashed".to_string(),
            is_mentor: true,
            is_judge: false,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn roles(mut self, is_mentor: bool, is_judge: bool) -> Self {
        self.is_mentor = is_mentor;
        self.is_judge = is_judge;
        self
    }

    /// Inserts the mentor/judge without any previous event rows.
    pub async fn build(self) -> Result<entity::mentor_judge::Model, DbErr> {
        entity::mentor_judge::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            phone: ActiveValue::Set("+91 98765 43210".to_string()),
            experience: ActiveValue::Set("8 years".to_string()),
            current_organization: ActiveValue::Set("Test Corp".to_string()),
            expertise: ActiveValue::Set(json!(["Rust"])),
            is_mentor: ActiveValue::Set(self.is_mentor),
            is_judge: ActiveValue::Set(self.is_judge),
            profile_picture: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_mentor_judge(
    db: &DatabaseConnection,
) -> Result<entity::mentor_judge::Model, DbErr> {
    MentorJudgeFactory::new(db).build().await
}
