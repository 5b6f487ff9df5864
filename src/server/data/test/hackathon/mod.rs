use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::hackathon::{HackathonStatus, LocationType},
    server::{
        data::hackathon::HackathonRepository,
        model::hackathon::{CreateHackathonParams, HackathonDetails, JudgingCriterion, Prize},
    },
};

mod advance_statuses;
mod create;
mod get_paginated;
mod release_slots;
mod try_reserve_slot;
mod try_set_capacity;
mod update;
mod update_status;

fn details(name: &str) -> HackathonDetails {
    let now = Utc::now();
    HackathonDetails {
        name: name.to_string(),
        description: "Build for good".to_string(),
        theme: "Climate".to_string(),
        start_date: now + Duration::days(10),
        end_date: now + Duration::days(12),
        registration_start_date: now,
        registration_end_date: now + Duration::days(9),
        duration: "48 hours".to_string(),
        start_time: "09:00".to_string(),
        end_time: "18:00".to_string(),
        location_type: LocationType::Offline,
        venue: Some("COEP Auditorium".to_string()),
        online_platform: None,
        registration_fee: 0.0,
        prize_pool: 1000.0,
        prizes: vec![
            Prize {
                position: "First".to_string(),
                amount: 600.0,
            },
            Prize {
                position: "Second".to_string(),
                amount: 400.0,
            },
        ],
        domains: vec!["Climate".to_string()],
        rules: vec!["Original work only".to_string()],
        min_team_size: 2,
        max_team_size: 4,
        max_participants: Some(100),
        judging_criteria: vec![
            JudgingCriterion {
                criterion: "Impact".to_string(),
                weightage: 60,
            },
            JudgingCriterion {
                criterion: "Execution".to_string(),
                weightage: 40,
            },
        ],
        banner_image: None,
    }
}
