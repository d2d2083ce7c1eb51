use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct RegionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegionRepository<'a, C> {
    /// Creates a new instance of [`RegionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, region_id: i32) -> Result<Option<entity::region::Model>, DbErr> {
        entity::prelude::Region::find_by_id(region_id)
            .one(self.db)
            .await
    }

    /// Finds a region by its full name, e.g. `Seoul Jongno-gu`
    pub async fn get_by_full_name(
        &self,
        full_name: &str,
    ) -> Result<Option<entity::region::Model>, DbErr> {
        entity::prelude::Region::find()
            .filter(entity::region::Column::FullName.eq(full_name))
            .one(self.db)
            .await
    }

    pub async fn get_many_by_ids(
        &self,
        region_ids: Vec<i32>,
    ) -> Result<Vec<entity::region::Model>, DbErr> {
        entity::prelude::Region::find()
            .filter(entity::region::Column::Id.is_in(region_ids))
            .all(self.db)
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<entity::region::Model>, DbErr> {
        entity::prelude::Region::find()
            .order_by_asc(entity::region::Column::FullName)
            .all(self.db)
            .await
    }
}
