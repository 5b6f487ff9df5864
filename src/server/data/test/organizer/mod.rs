use crate::{
    model::organizer::OrganizationType,
    server::{data::organizer::OrganizerRepository, model::organizer::OrganizerProfile},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod email_taken;
mod get_paginated;
mod update;

fn profile(email: &str) -> OrganizerProfile {
    OrganizerProfile {
        name: "Hack Club".to_string(),
        email: email.to_string(),
        profile_picture: None,
        organization_type: OrganizationType::Committee,
        organization_name: "Hack Club Pune".to_string(),
        description: "Student run hackathons".to_string(),
    }
}
