use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct CrimeTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CrimeTypeRepository<'a, C> {
    /// Creates a new instance of [`CrimeTypeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        crime_type_id: i32,
    ) -> Result<Option<entity::crime_type::Model>, DbErr> {
        entity::prelude::CrimeType::find_by_id(crime_type_id)
            .one(self.db)
            .await
    }

    pub async fn get_many_by_ids(
        &self,
        crime_type_ids: Vec<i32>,
    ) -> Result<Vec<entity::crime_type::Model>, DbErr> {
        entity::prelude::CrimeType::find()
            .filter(entity::crime_type::Column::Id.is_in(crime_type_ids))
            .all(self.db)
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<entity::crime_type::Model>, DbErr> {
        entity::prelude::CrimeType::find()
            .order_by_asc(entity::crime_type::Column::Major)
            .order_by_asc(entity::crime_type::Column::Minor)
            .order_by_asc(entity::crime_type::Column::Id)
            .all(self.db)
            .await
    }
}
