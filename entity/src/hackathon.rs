use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hackathon")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub organizer_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub theme: String,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    pub registration_start_date: DateTimeUtc,
    pub registration_end_date: DateTimeUtc,
    pub duration: String,
    pub start_time: String,
    pub end_time: String,
    pub location_type: String,
    pub venue: Option<String>,
    pub online_platform: Option<String>,
    pub registration_fee: f64,
    pub prize_pool: f64,
    pub domains: Json,
    pub rules: Json,
    pub min_team_size: i32,
    pub max_team_size: i32,
    pub max_participants: Option<i32>,
    pub current_participants: i32,
    pub status: String,
    pub banner_image: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organizer::Entity",
        from = "Column::OrganizerId",
        to = "super::organizer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Organizer,
    #[sea_orm(has_many = "super::hackathon_prize::Entity")]
    HackathonPrize,
    #[sea_orm(has_many = "super::hackathon_judging_criterion::Entity")]
    HackathonJudgingCriterion,
    #[sea_orm(has_one = "super::hackathon_timeline::Entity")]
    HackathonTimeline,
    #[sea_orm(has_many = "super::team::Entity")]
    Team,
    #[sea_orm(has_many = "super::hackathon_registration::Entity")]
    HackathonRegistration,
}

impl Related<super::organizer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organizer.def()
    }
}

impl Related<super::hackathon_prize::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HackathonPrize.def()
    }
}

impl Related<super::hackathon_judging_criterion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HackathonJudgingCriterion.def()
    }
}

impl Related<super::hackathon_timeline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HackathonTimeline.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::hackathon_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HackathonRegistration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
