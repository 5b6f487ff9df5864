use sea_orm_migration::{prelude::*, schema::*};

use super::m20250603_000008_create_hackathon_timeline_table::HackathonTimeline;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TimelineEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(TimelineEvent::Id))
                    .col(integer(TimelineEvent::TimelineId))
                    .col(string(TimelineEvent::Title))
                    .col(text(TimelineEvent::Description))
                    .col(timestamp_with_time_zone(TimelineEvent::StartTime))
                    .col(timestamp_with_time_zone(TimelineEvent::EndTime))
                    .col(string(TimelineEvent::EventType))
                    .col(string(TimelineEvent::LocationType))
                    .col(string_null(TimelineEvent::Venue))
                    .col(string_null(TimelineEvent::OnlinePlatform))
                    .col(json(TimelineEvent::Speakers))
                    .col(json(TimelineEvent::Resources))
                    .col(boolean(TimelineEvent::IsMandatory).default(false))
                    .col(string(TimelineEvent::Status).default("upcoming"))
                    .col(
                        timestamp_with_time_zone(TimelineEvent::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(TimelineEvent::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_timeline_event_timeline_id")
                            .from(TimelineEvent::Table, TimelineEvent::TimelineId)
                            .to(HackathonTimeline::Table, HackathonTimeline::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TimelineEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TimelineEvent {
    Table,
    Id,
    TimelineId,
    Title,
    Description,
    StartTime,
    EndTime,
    EventType,
    LocationType,
    Venue,
    OnlinePlatform,
    Speakers,
    Resources,
    IsMandatory,
    Status,
    CreatedAt,
    UpdatedAt,
}
