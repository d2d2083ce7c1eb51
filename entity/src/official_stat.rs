use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "official_stat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub region_id: i32,
    pub crime_type_id: Option<i32>,
    pub year: i32,
    pub count: i32,
    pub last_updated: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::RegionId",
        to = "super::region::Column::Id"
    )]
    Region,
    #[sea_orm(
        belongs_to = "super::crime_type::Entity",
        from = "Column::CrimeTypeId",
        to = "super::crime_type::Column::Id",
        on_delete = "Restrict"
    )]
    CrimeType,
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl Related<super::crime_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CrimeType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
