//! In-memory entity models for unit tests and factory defaults.
//!
//! Unlike factories, fixtures never touch the database. Use them to exercise entity to
//! domain conversions or to share default values with the factories.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let hackathon = fixture::hackathon::entity();
//! assert_eq!(hackathon.status, "upcoming");
//! ```

pub mod hackathon;
pub mod participant;
