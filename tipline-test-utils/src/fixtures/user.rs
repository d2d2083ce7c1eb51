use chrono::Utc;
use entity::app_user::UserRole;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a locally registered user with the given role.
    pub async fn insert_user(
        &self,
        email: &str,
        role: UserRole,
    ) -> Result<entity::app_user::Model, TestError> {
        let nickname = email.split('@').next().unwrap_or(email).to_string();

        Ok(
            entity::prelude::AppUser::insert(entity::app_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                nickname: ActiveValue::Set(nickname),
                role: ActiveValue::Set(role),
                auth_provider: ActiveValue::Set("local".to_string()),
                password_hash: ActiveValue::Set(Some("password_hash".to_string())),
                google_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_admin(&self, email: &str) -> Result<entity::app_user::Model, TestError> {
        self.insert_user(email, UserRole::Admin).await
    }

    /// Insert a user already linked to a Google account.
    pub async fn insert_google_user(
        &self,
        email: &str,
        google_id: &str,
    ) -> Result<entity::app_user::Model, TestError> {
        Ok(
            entity::prelude::AppUser::insert(entity::app_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                nickname: ActiveValue::Set("google user".to_string()),
                role: ActiveValue::Set(UserRole::User),
                auth_provider: ActiveValue::Set("google".to_string()),
                password_hash: ActiveValue::Set(None),
                google_id: ActiveValue::Set(Some(google_id.to_string())),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
