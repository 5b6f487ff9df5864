use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with only the tables a test needs.
///
/// Tables are created from the SeaORM entities, so they carry columns, primary keys and
/// foreign keys but none of the migration's column defaults or secondary indexes.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::Organizer;
///
/// let test = TestBuilder::new()
///     .with_table(Organizer)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds one entity table. Add referenced tables before the tables that point at them.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the three account tables and mentor/judge event history.
    ///
    /// - Organizer
    /// - Participant
    /// - MentorJudge
    /// - MentorJudgeEvent
    pub fn with_account_tables(self) -> Self {
        self.with_table(Organizer)
            .with_table(Participant)
            .with_table(MentorJudge)
            .with_table(MentorJudgeEvent)
    }

    /// Adds account tables plus hackathons, their child rows and timelines.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_hackathon_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_hackathon_tables(self) -> Self {
        self.with_account_tables()
            .with_table(Hackathon)
            .with_table(HackathonPrize)
            .with_table(HackathonJudgingCriterion)
            .with_table(HackathonTimeline)
            .with_table(TimelineEvent)
    }

    /// Adds everything needed for joining hackathons: hackathon tables plus teams,
    /// team members and registrations.
    pub fn with_team_tables(self) -> Self {
        self.with_hackathon_tables()
            .with_table(Team)
            .with_table(TeamMember)
            .with_table(HackathonRegistration)
    }

    /// Connects to a fresh in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
