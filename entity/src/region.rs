use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "region")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub province: String,
    pub city: Option<String>,
    #[sea_orm(unique)]
    pub full_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::report::Entity")]
    Report,
    #[sea_orm(has_many = "super::official_stat::Entity")]
    OfficialStat,
}

impl Related<super::report::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Report.def()
    }
}

impl Related<super::official_stat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OfficialStat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
