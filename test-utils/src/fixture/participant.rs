//! Participant fixtures.

use chrono::Utc;
use entity::participant;
use serde_json::json;

pub const DEFAULT_AGE: i32 = 21;
pub const DEFAULT_EXPERIENCE: &str = "beginner";

/// Creates participant 1 with a placeholder password hash.
pub fn entity() -> participant::Model {
    participant::Model {
        id: 1,
        name: "Test Participant".to_string(),
        username: "participant1".to_string(),
        email: "participant1@example.com".to_string(),
        password_hash: "unhashed".to_string(),
        phone: None,
        age: DEFAULT_AGE,
        experience: DEFAULT_EXPERIENCE.to_string(),
        skills: json!(["rust"]),
        github_link: "https://github.com/participant1".to_string(),
        linked_in: "https://linkedin.com/in/participant1".to_string(),
        organization: "Test University".to_string(),
        fields_of_interest: json!(["Web Development"]),
        bio: "Likes building things".to_string(),
        city: "Pune".to_string(),
        country: "India".to_string(),
        resume: None,
        profile_picture: None,
        created_at: Utc::now(),
    }
}
