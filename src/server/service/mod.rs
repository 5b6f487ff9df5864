//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They run validation, enforce
//! uniqueness and capacity rules, hash passwords and open transactions for writes that span
//! several rows. They take and return domain models, never DTOs or entity models.

pub mod auth;
pub mod hackathon;
pub mod mentor_judge;
pub mod organizer;
pub mod participant;
pub mod team;
pub mod timeline;

use sea_orm::DbErr;

use crate::server::{data::is_unique_violation, error::AppError};

/// Maps a unique index violation to a 400 with `message`, anything else to a database error.
///
/// Duplicate checks run before writes; this catches the race where two requests pass the
/// check together and the index rejects the second insert.
fn duplicate_as_bad_request(err: DbErr, message: &str) -> AppError {
    if is_unique_violation(&err) {
        AppError::BadRequest(message.to_string())
    } else {
        AppError::DbErr(err)
    }
}
