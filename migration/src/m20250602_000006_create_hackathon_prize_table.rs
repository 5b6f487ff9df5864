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
                    .table(HackathonPrize::Table)
                    .if_not_exists()
                    .col(pk_auto(HackathonPrize::Id))
                    .col(integer(HackathonPrize::HackathonId))
                    .col(integer(HackathonPrize::Ordinal))
                    .col(string(HackathonPrize::Position))
                    .col(double(HackathonPrize::Amount))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hackathon_prize_hackathon_id")
                            .from(HackathonPrize::Table, HackathonPrize::HackathonId)
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
            .drop_table(Table::drop().table(HackathonPrize::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HackathonPrize {
    Table,
    Id,
    HackathonId,
    Ordinal,
    Position,
    Amount,
}
