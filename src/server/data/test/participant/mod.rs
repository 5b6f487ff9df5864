use crate::server::{
    data::participant::ParticipantRepository, model::participant::ParticipantProfile,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod username_taken;

fn profile(username: &str, email: &str) -> ParticipantProfile {
    ParticipantProfile {
        name: "Asha Rao".to_string(),
        username: username.to_string(),
        email: email.to_string(),
        phone: Some("+91 98765 43210".to_string()),
        age: 20,
        experience: "1 year".to_string(),
        skills: vec!["rust".to_string(), "sql".to_string()],
        github_link: "https://github.com/asha".to_string(),
        linked_in: "https://linkedin.com/in/asha".to_string(),
        organization: "COEP".to_string(),
        fields_of_interest: vec!["Web Development".to_string()],
        bio: "Builds things".to_string(),
        city: "Pune".to_string(),
        country: "India".to_string(),
        resume: None,
        profile_picture: None,
    }
}
