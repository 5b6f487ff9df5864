use crate::{
    model::mentor_judge::MentorJudgeRole,
    server::{
        data::mentor_judge::MentorJudgeRepository,
        model::mentor_judge::{MentorJudgeProfile, PreviousEvent},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update;

fn profile(email: &str, events: Vec<PreviousEvent>) -> MentorJudgeProfile {
    MentorJudgeProfile {
        name: "Meera Iyer".to_string(),
        email: email.to_string(),
        phone: "+91 98765 43210".to_string(),
        experience: "12 years".to_string(),
        current_organization: "Acme".to_string(),
        expertise: vec!["Distributed Systems".to_string()],
        previous_events: events,
        is_mentor: true,
        is_judge: true,
        profile_picture: None,
    }
}

fn event(name: &str, year: i32) -> PreviousEvent {
    PreviousEvent {
        event_name: name.to_string(),
        role: "judge".to_string(),
        year,
    }
}
