use chrono::Utc;
use entity::app_user::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Value stored in `auth_provider` for accounts signed in through Google
pub static GOOGLE_AUTH_PROVIDER: &str = "google";

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_google_id(
        &self,
        google_id: &str,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::GoogleId.eq(google_id))
            .one(self.db)
            .await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Creates a `user` role account linked to a Google account, without a password
    pub async fn create_google_user(
        &self,
        email: &str,
        nickname: &str,
        google_id: &str,
    ) -> Result<entity::app_user::Model, DbErr> {
        let user = entity::app_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            nickname: ActiveValue::Set(nickname.to_string()),
            role: ActiveValue::Set(UserRole::User),
            auth_provider: ActiveValue::Set(GOOGLE_AUTH_PROVIDER.to_string()),
            password_hash: ActiveValue::Set(None),
            google_id: ActiveValue::Set(Some(google_id.to_string())),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Links an existing account to a Google account & switches its provider to Google
    pub async fn link_google_account(
        &self,
        user: entity::app_user::Model,
        google_id: &str,
        nickname: &str,
    ) -> Result<entity::app_user::Model, DbErr> {
        let mut user_am = user.into_active_model();
        user_am.google_id = ActiveValue::Set(Some(google_id.to_string()));
        user_am.auth_provider = ActiveValue::Set(GOOGLE_AUTH_PROVIDER.to_string());
        user_am.nickname = ActiveValue::Set(nickname.to_string());

        user_am.update(self.db).await
    }

    /// Refreshes the email & nickname of an account from its identity provider profile
    pub async fn update_profile(
        &self,
        user: entity::app_user::Model,
        email: &str,
        nickname: &str,
    ) -> Result<entity::app_user::Model, DbErr> {
        let mut user_am = user.into_active_model();
        user_am.email = ActiveValue::Set(email.to_string());
        user_am.nickname = ActiveValue::Set(nickname.to_string());

        user_am.update(self.db).await
    }
}
