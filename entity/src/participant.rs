use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "participant")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub age: i32,
    pub experience: String,
    pub skills: Json,
    pub github_link: String,
    pub linked_in: String,
    pub organization: String,
    pub fields_of_interest: Json,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub city: String,
    pub country: String,
    pub resume: Option<String>,
    pub profile_picture: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team::Entity")]
    Team,
    #[sea_orm(has_many = "super::team_member::Entity")]
    TeamMember,
    #[sea_orm(has_many = "super::hackathon_registration::Entity")]
    HackathonRegistration,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::team_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMember.def()
    }
}

impl Related<super::hackathon_registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HackathonRegistration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
