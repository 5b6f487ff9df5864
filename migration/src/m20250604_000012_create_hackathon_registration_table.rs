use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000002_create_participant_table::Participant,
    m20250602_000005_create_hackathon_table::Hackathon,
    m20250604_000010_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HackathonRegistration::Table)
                    .if_not_exists()
                    .col(pk_auto(HackathonRegistration::Id))
                    .col(integer(HackathonRegistration::HackathonId))
                    .col(integer(HackathonRegistration::ParticipantId))
                    .col(integer(HackathonRegistration::TeamId))
                    .col(string(HackathonRegistration::Role))
                    .col(
                        timestamp_with_time_zone(HackathonRegistration::RegisteredAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hackathon_registration_hackathon_id")
                            .from(
                                HackathonRegistration::Table,
                                HackathonRegistration::HackathonId,
                            )
                            .to(Hackathon::Table, Hackathon::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hackathon_registration_participant_id")
                            .from(
                                HackathonRegistration::Table,
                                HackathonRegistration::ParticipantId,
                            )
                            .to(Participant::Table, Participant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hackathon_registration_team_id")
                            .from(HackathonRegistration::Table, HackathonRegistration::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One registration per participant per hackathon, whatever the role.
        manager
            .create_index(
                Index::create()
                    .name("idx_hackathon_registration_hackathon_participant")
                    .table(HackathonRegistration::Table)
                    .col(HackathonRegistration::HackathonId)
                    .col(HackathonRegistration::ParticipantId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HackathonRegistration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HackathonRegistration {
    Table,
    Id,
    HackathonId,
    ParticipantId,
    TeamId,
    Role,
    RegisteredAt,
}
