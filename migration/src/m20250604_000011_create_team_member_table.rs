use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000002_create_participant_table::Participant,
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
                    .table(TeamMember::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamMember::Id))
                    .col(integer(TeamMember::TeamId))
                    .col(integer(TeamMember::ParticipantId))
                    .col(
                        timestamp_with_time_zone(TeamMember::JoinedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_member_team_id")
                            .from(TeamMember::Table, TeamMember::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_member_participant_id")
                            .from(TeamMember::Table, TeamMember::ParticipantId)
                            .to(Participant::Table, Participant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_team_member_team_participant")
                    .table(TeamMember::Table)
                    .col(TeamMember::TeamId)
                    .col(TeamMember::ParticipantId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamMember {
    Table,
    Id,
    TeamId,
    ParticipantId,
    JoinedAt,
}
