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
                    .table(HackathonJudgingCriterion::Table)
                    .if_not_exists()
                    .col(pk_auto(HackathonJudgingCriterion::Id))
                    .col(integer(HackathonJudgingCriterion::HackathonId))
                    .col(integer(HackathonJudgingCriterion::Ordinal))
                    .col(string(HackathonJudgingCriterion::Criterion))
                    .col(integer(HackathonJudgingCriterion::Weightage))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hackathon_judging_criterion_hackathon_id")
                            .from(
                                HackathonJudgingCriterion::Table,
                                HackathonJudgingCriterion::HackathonId,
                            )
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
            .drop_table(
                Table::drop()
                    .table(HackathonJudgingCriterion::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum HackathonJudgingCriterion {
    Table,
    Id,
    HackathonId,
    Ordinal,
    Criterion,
    Weightage,
}
