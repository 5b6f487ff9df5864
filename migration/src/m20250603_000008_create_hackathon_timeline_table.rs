use sea_orm_migration::{prelude::*, schema::*};

use super::m20250602_000005_create_hackathon_table::Hackathon;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HackathonTimeline::Table)
                    .if_not_exists()
                    .col(pk_auto(HackathonTimeline::Id))
                    .col(integer_uniq(HackathonTimeline::HackathonId))
                    .col(string(HackathonTimeline::Timezone).default("UTC"))
                    .col(
                        timestamp_with_time_zone(HackathonTimeline::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(HackathonTimeline::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hackathon_timeline_hackathon_id")
                            .from(HackathonTimeline::Table, HackathonTimeline::HackathonId)
                            .to(Hackathon::Table, Hackathon::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HackathonTimeline::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HackathonTimeline {
    Table,
    Id,
    HackathonId,
    Timezone,
    CreatedAt,
    UpdatedAt,
}
