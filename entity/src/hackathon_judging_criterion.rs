use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hackathon_judging_criterion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hackathon_id: i32,
    pub ordinal: i32,
    pub criterion: String,
    pub weightage: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hackathon::Entity",
        from = "Column::HackathonId",
        to = "super::hackathon::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Hackathon,
}

impl Related<super::hackathon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hackathon.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
