//! Database repository layer for all domain entities.
//!
//! Repositories own every query and return domain models from `server::model`. Each is
//! generic over `ConnectionTrait` so the same code runs against the pool or inside a
//! transaction opened by a service.

pub mod account;
pub mod hackathon;
pub mod mentor_judge;
pub mod organizer;
pub mod participant;
pub mod registration;
pub mod team;
pub mod timeline;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Whether a write failed on a unique index (duplicate email, code or registration).
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
