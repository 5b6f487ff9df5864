use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "timeline_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub timeline_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub event_type: String,
    pub location_type: String,
    pub venue: Option<String>,
    pub online_platform: Option<String>,
    pub speakers: Json,
    pub resources: Json,
    pub is_mandatory: bool,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hackathon_timeline::Entity",
        from = "Column::TimelineId",
        to = "super::hackathon_timeline::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    HackathonTimeline,
}

impl Related<super::hackathon_timeline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HackathonTimeline.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
