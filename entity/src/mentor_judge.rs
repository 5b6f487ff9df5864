use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mentor_judge")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub experience: String,
    pub current_organization: String,
    pub expertise: Json,
    pub is_mentor: bool,
    pub is_judge: bool,
    pub profile_picture: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mentor_judge_event::Entity")]
    MentorJudgeEvent,
}

impl Related<super::mentor_judge_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MentorJudgeEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
