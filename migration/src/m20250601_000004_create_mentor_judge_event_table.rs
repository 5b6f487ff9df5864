use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000003_create_mentor_judge_table::MentorJudge;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MentorJudgeEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(MentorJudgeEvent::Id))
                    .col(integer(MentorJudgeEvent::MentorJudgeId))
                    .col(string(MentorJudgeEvent::EventName))
                    .col(string(MentorJudgeEvent::Role))
                    .col(integer(MentorJudgeEvent::Year))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mentor_judge_event_mentor_judge_id")
                            .from(MentorJudgeEvent::Table, MentorJudgeEvent::MentorJudgeId)
                            .to(MentorJudge::Table, MentorJudge::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MentorJudgeEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MentorJudgeEvent {
    Table,
    Id,
    MentorJudgeId,
    EventName,
    Role,
    Year,
}
