//! Hackathon fixtures.

use chrono::{DateTime, Duration, Utc};
use entity::hackathon;
use serde_json::json;

pub const DEFAULT_NAME: &str = "Test Hackathon";
pub const DEFAULT_MIN_TEAM_SIZE: i32 = 1;
pub const DEFAULT_MAX_TEAM_SIZE: i32 = 4;

/// Registration window and event dates relative to `now`.
///
/// Registration opened a day ago and closes in six days; the event runs from day seven
/// to day nine.
pub struct Schedule {
    pub registration_start_date: DateTime<Utc>,
    pub registration_end_date: DateTime<Utc>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Schedule {
    pub fn from(now: DateTime<Utc>) -> Self {
        Self {
            registration_start_date: now - Duration::days(1),
            registration_end_date: now + Duration::days(6),
            start_date: now + Duration::days(7),
            end_date: now + Duration::days(9),
        }
    }
}

/// Creates an upcoming online hackathon owned by organizer 1.
///
/// # Example
///
/// ```rust,ignore
/// let mut hackathon = fixture::hackathon::entity();
/// hackathon.max_participants = Some(2);
/// ```
pub fn entity() -> hackathon::Model {
    let now = Utc::now();
    let schedule = Schedule::from(now);

    hackathon::Model {
        id: 1,
        organizer_id: 1,
        name: DEFAULT_NAME.to_string(),
        description: "A weekend of building".to_string(),
        theme: "Open Innovation".to_string(),
        start_date: schedule.start_date,
        end_date: schedule.end_date,
        registration_start_date: schedule.registration_start_date,
        registration_end_date: schedule.registration_end_date,
        duration: "48 hours".to_string(),
        start_time: "09:00".to_string(),
        end_time: "18:00".to_string(),
        location_type: "online".to_string(),
        venue: None,
        online_platform: Some("Discord".to_string()),
        registration_fee: 0.0,
        prize_pool: 0.0,
        domains: json!(["AI", "Web"]),
        rules: json!(["Be kind"]),
        min_team_size: DEFAULT_MIN_TEAM_SIZE,
        max_team_size: DEFAULT_MAX_TEAM_SIZE,
        max_participants: None,
        current_participants: 0,
        status: "upcoming".to_string(),
        banner_image: None,
        created_at: now,
        updated_at: now,
    }
}
