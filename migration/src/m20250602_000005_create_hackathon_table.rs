use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_organizer_table::Organizer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hackathon::Table)
                    .if_not_exists()
                    .col(pk_auto(Hackathon::Id))
                    .col(integer(Hackathon::OrganizerId))
                    .col(string(Hackathon::Name))
                    .col(text(Hackathon::Description))
                    .col(string(Hackathon::Theme))
                    .col(timestamp_with_time_zone(Hackathon::StartDate))
                    .col(timestamp_with_time_zone(Hackathon::EndDate))
                    .col(timestamp_with_time_zone(Hackathon::RegistrationStartDate))
                    .col(timestamp_with_time_zone(Hackathon::RegistrationEndDate))
                    .col(string(Hackathon::Duration))
                    .col(string(Hackathon::StartTime))
                    .col(string(Hackathon::EndTime))
                    .col(string(Hackathon::LocationType))
                    .col(string_null(Hackathon::Venue))
                    .col(string_null(Hackathon::OnlinePlatform))
                    .col(double(Hackathon::RegistrationFee))
                    .col(double(Hackathon::PrizePool))
                    .col(json(Hackathon::Domains))
                    .col(json(Hackathon::Rules))
                    .col(integer(Hackathon::MinTeamSize))
                    .col(integer(Hackathon::MaxTeamSize))
                    .col(integer_null(Hackathon::MaxParticipants))
                    .col(integer(Hackathon::CurrentParticipants).default(0))
                    .col(string(Hackathon::Status).default("upcoming"))
                    .col(string_null(Hackathon::BannerImage))
                    .col(
                        timestamp_with_time_zone(Hackathon::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Hackathon::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hackathon_organizer_id")
                            .from(Hackathon::Table, Hackathon::OrganizerId)
                            .to(Organizer::Table, Organizer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hackathon_organizer_id")
                    .table(Hackathon::Table)
                    .col(Hackathon::OrganizerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hackathon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hackathon {
    Table,
    Id,
    OrganizerId,
    Name,
    Description,
    Theme,
    StartDate,
    EndDate,
    RegistrationStartDate,
    RegistrationEndDate,
    Duration,
    StartTime,
    EndTime,
    LocationType,
    Venue,
    OnlinePlatform,
    RegistrationFee,
    PrizePool,
    Domains,
    Rules,
    MinTeamSize,
    MaxTeamSize,
    MaxParticipants,
    CurrentParticipants,
    Status,
    BannerImage,
    CreatedAt,
    UpdatedAt,
}
