use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ReportStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "report")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub region_id: i32,
    pub crime_type_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub status: ReportStatus,
    pub created_at: DateTime,
    pub updated_at: Option<DateTime>,
    pub approved_at: Option<DateTime>,
    pub rejected_at: Option<DateTime>,
    pub official_stat_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::UserId",
        to = "super::app_user::Column::Id"
    )]
    AppUser,
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::RegionId",
        to = "super::region::Column::Id"
    )]
    Region,
    #[sea_orm(
        belongs_to = "super::crime_type::Entity",
        from = "Column::CrimeTypeId",
        to = "super::crime_type::Column::Id"
    )]
    CrimeType,
    #[sea_orm(
        belongs_to = "super::official_stat::Entity",
        from = "Column::OfficialStatId",
        to = "super::official_stat::Column::Id"
    )]
    OfficialStat,
}

impl Related<super::app_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppUser.def()
    }
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

impl Related<super::official_stat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OfficialStat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
