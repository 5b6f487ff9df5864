//! Factory methods for inserting test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` function for the
//! defaults. Unique columns (emails, usernames, team codes) are derived from a shared
//! counter so factories can be called repeatedly in one test.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let organizer = factory::create_organizer(db).await?;
//! let hackathon = factory::hackathon::HackathonFactory::new(db, organizer.id)
//!     .max_participants(Some(2))
//!     .build()
//!     .await?;
//! ```

pub mod hackathon;
pub mod helpers;
pub mod mentor_judge;
pub mod organizer;
pub mod participant;
pub mod team;

pub use hackathon::create_hackathon;
pub use mentor_judge::create_mentor_judge;
pub use organizer::create_organizer;
pub use participant::create_participant;
pub use team::create_team;
