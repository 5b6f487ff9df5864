use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000002_create_participant_table::Participant,
    m20250602_000005_create_hackathon_table::Hackathon,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(integer(Team::HackathonId))
                    .col(integer(Team::LeaderId))
                    .col(string_uniq(Team::TeamCode))
                    .col(integer(Team::MaxMembers))
                    .col(integer(Team::MinMembers))
                    .col(integer(Team::MemberCount).default(1))
                    .col(
                        timestamp_with_time_zone(Team::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_hackathon_id")
                            .from(Team::Table, Team::HackathonId)
                            .to(Hackathon::Table, Hackathon::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_leader_id")
                            .from(Team::Table, Team::LeaderId)
                            .to(Participant::Table, Participant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    HackathonId,
    LeaderId,
    TeamCode,
    MaxMembers,
    MinMembers,
    MemberCount,
    CreatedAt,
}
