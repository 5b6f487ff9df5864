//! HackathonHub Test Utils
//!
//! Shared testing utilities for the HackathonHub server. Tests build an in-memory SQLite
//! database with only the tables they need, then seed it through factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Database connection and session for one test
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Inserts entities with sensible defaults
//! - **fixture**: In-memory entity models, no database involved
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn joins_hackathon() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_team_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (organizer, hackathon) = factory::helpers::create_hackathon_with_organizer(db).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
