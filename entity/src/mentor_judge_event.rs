use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mentor_judge_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mentor_judge_id: i32,
    pub event_name: String,
    pub role: String,
    pub year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mentor_judge::Entity",
        from = "Column::MentorJudgeId",
        to = "super::mentor_judge::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MentorJudge,
}

impl Related<super::mentor_judge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MentorJudge.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
