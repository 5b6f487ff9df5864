pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_organizer_table;
mod m20250601_000002_create_participant_table;
mod m20250601_000003_create_mentor_judge_table;
mod m20250601_000004_create_mentor_judge_event_table;
mod m20250602_000005_create_hackathon_table;
mod m20250602_000006_create_hackathon_prize_table;
mod m20250602_000007_create_hackathon_judging_criterion_table;
mod m20250603_000008_create_hackathon_timeline_table;
mod m20250603_000009_create_timeline_event_table;
mod m20250604_000010_create_team_table;
mod m20250604_000011_create_team_member_table;
mod m20250604_000012_create_hackathon_registration_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_organizer_table::Migration),
            Box::new(m20250601_000002_create_participant_table::Migration),
            Box::new(m20250601_000003_create_mentor_judge_table::Migration),
            Box::new(m20250601_000004_create_mentor_judge_event_table::Migration),
            Box::new(m20250602_000005_create_hackathon_table::Migration),
            Box::new(m20250602_000006_create_hackathon_prize_table::Migration),
            Box::new(m20250602_000007_create_hackathon_judging_criterion_table::Migration),
            Box::new(m20250603_000008_create_hackathon_timeline_table::Migration),
            Box::new(m20250603_000009_create_timeline_event_table::Migration),
            Box::new(m20250604_000010_create_team_table::Migration),
            Box::new(m20250604_000011_create_team_member_table::Migration),
            Box::new(m20250604_000012_create_hackathon_registration_table::Migration),
        ]
    }
}
