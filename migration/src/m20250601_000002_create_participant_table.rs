use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Participant::Table)
                    .if_not_exists()
                    .col(pk_auto(Participant::Id))
                    .col(string(Participant::Name))
                    .col(string_uniq(Participant::Username))
                    .col(string_uniq(Participant::Email))
                    .col(string(Participant::PasswordHash))
                    .col(string_null(Participant::Phone))
                    .col(integer(Participant::Age))
                    .col(string(Participant::Experience))
                    .col(json(Participant::Skills))
                    .col(string(Participant::GithubLink))
                    .col(string(Participant::LinkedIn))
                    .col(string(Participant::Organization))
                    .col(json(Participant::FieldsOfInterest))
                    .col(text(Participant::Bio))
                    .col(string(Participant::City))
                    .col(string(Participant::Country))
                    .col(string_null(Participant::Resume))
                    .col(string_null(Participant::ProfilePicture))
                    .col(
                        timestamp_with_time_zone(Participant::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Participant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Participant {
    Table,
    Id,
    Name,
    Username,
    Email,
    PasswordHash,
    Phone,
    Age,
    Experience,
    Skills,
    GithubLink,
    LinkedIn,
    Organization,
    FieldsOfInterest,
    Bio,
    City,
    Country,
    Resume,
    ProfilePicture,
    CreatedAt,
}
