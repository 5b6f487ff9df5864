//! HTTP request handlers.
//!
//! Handlers check access through `AuthGuard`, convert DTOs into parameter types, call one
//! service and convert the result back into a DTO. They hold no business rules.

pub mod auth;
pub mod hackathon;
pub mod health;
pub mod mentor_judge;
pub mod organizer;
pub mod participant;
pub mod team;
pub mod timeline;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

pub(crate) fn default_entries() -> u64 {
    10
}
