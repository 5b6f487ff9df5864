//! SeaORM entity definitions for every HackathonHub table.

pub mod prelude;

pub mod hackathon;
pub mod hackathon_judging_criterion;
pub mod hackathon_prize;
pub mod hackathon_registration;
pub mod hackathon_timeline;
pub mod mentor_judge;
pub mod mentor_judge_event;
pub mod organizer;
pub mod participant;
pub mod team;
pub mod team_member;
pub mod timeline_event;
