use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRoleDto {
    User,
    Admin,
}

impl From<entity::app_user::UserRole> for UserRoleDto {
    fn from(role: entity::app_user::UserRole) -> Self {
        match role {
            entity::app_user::UserRole::User => Self::User,
            entity::app_user::UserRole::Admin => Self::Admin,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub nickname: String,
    pub role: UserRoleDto,
    /// `local` or `google`
    pub auth_provider: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::app_user::Model> for UserDto {
    fn from(user: entity::app_user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            nickname: user.nickname,
            role: user.role.into(),
            auth_provider: user.auth_provider,
            created_at: user.created_at,
        }
    }
}
