use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organizer::Table)
                    .if_not_exists()
                    .col(pk_auto(Organizer::Id))
                    .col(string(Organizer::Name))
                    .col(string_uniq(Organizer::Email))
                    .col(string(Organizer::PasswordHash))
                    .col(string_null(Organizer::ProfilePicture))
                    .col(string(Organizer::OrganizationType))
                    .col(string(Organizer::OrganizationName))
                    .col(text(Organizer::Description))
                    .col(
                        timestamp_with_time_zone(Organizer::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Organizer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Organizer {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    ProfilePicture,
    OrganizationType,
    OrganizationName,
    Description,
    CreatedAt,
}
