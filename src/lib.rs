//! HackathonHub backend.
//!
//! `model` holds the JSON wire types shared by every endpoint; `server` holds the axum
//! backend built on top of the `entity` and `migration` crates.

pub mod model;
pub mod server;
