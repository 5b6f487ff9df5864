use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MentorJudge::Table)
                    .if_not_exists()
                    .col(pk_auto(MentorJudge::Id))
                    .col(string(MentorJudge::Name))
                    .col(string_uniq(MentorJudge::Email))
                    .col(string(MentorJudge::PasswordHash))
                    .col(string(MentorJudge::Phone))
                    .col(string(MentorJudge::Experience))
                    .col(string(MentorJudge::CurrentOrganization))
                    .col(json(MentorJudge::Expertise))
                    .col(boolean(MentorJudge::IsMentor))
                    .col(boolean(MentorJudge::IsJudge))
                    .col(string_null(MentorJudge::ProfilePicture))
                    .col(
                        timestamp_with_time_zone(MentorJudge::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MentorJudge::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MentorJudge {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Phone,
    Experience,
    CurrentOrganization,
    Expertise,
    IsMentor,
    IsJudge,
    ProfilePicture,
    CreatedAt,
}
