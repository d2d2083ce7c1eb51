//! User service layer.
//!
//! Lookup of signed in users and provisioning of accounts from Google profiles.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::db::UserModel,
    service::{auth::google::GoogleProfile, retry::RetryContext},
};

/// Longest nickname accepted by the user table
const MAX_NICKNAME_LEN: usize = 50;

/// Service for managing user account operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID.
    ///
    /// Uses automatic retry logic to handle transient database failures.
    ///
    /// # Returns
    /// - `Ok(Some(UserModel))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        let ctx = RetryContext::new();
        let db = self.db;

        ctx.execute_with_retry(&format!("get user ID {}", user_id), move || async move {
            let user = UserRepository::new(db).get_by_id(user_id).await?;

            Ok::<_, Error>(user)
        })
        .await
    }

    /// Finds or creates the account for a Google profile.
    ///
    /// Matching happens in one transaction, in order:
    /// 1. An account already linked to the Google ID has its email & nickname refreshed
    /// 2. An account with the same email is linked to the Google ID
    /// 3. Otherwise a new `user` role account without a password is created
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The matched or created account
    /// - `Err(Error::AuthError(AuthError::EmailInUse))` - The linked account's new email
    ///   belongs to a different account
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was changed
    pub async fn provision_google_user(&self, profile: &GoogleProfile) -> Result<UserModel, Error> {
        let nickname = nickname_for(profile);

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let user = if let Some(user) = user_repo.get_by_google_id(&profile.id).await? {
            if user.email != profile.email {
                if let Some(other) = user_repo.get_by_email(&profile.email).await? {
                    return Err(AuthError::EmailInUse {
                        user_id: user.id,
                        email: other.email,
                    }
                    .into());
                }
            }

            user_repo
                .update_profile(user, &profile.email, &nickname)
                .await?
        } else if let Some(user) = user_repo.get_by_email(&profile.email).await? {
            tracing::info!(user_id = user.id, "Linking existing account to Google");

            user_repo
                .link_google_account(user, &profile.id, &nickname)
                .await?
        } else {
            let user = user_repo
                .create_google_user(&profile.email, &nickname, &profile.id)
                .await?;

            tracing::info!(user_id = user.id, "Created account for Google user");

            user
        };

        txn.commit().await?;

        Ok(user)
    }
}

/// Display name from the profile, falling back to the local part of the email
fn nickname_for(profile: &GoogleProfile) -> String {
    let nickname = profile
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| profile.email.split('@').next().unwrap_or(&profile.email));

    nickname.chars().take(MAX_NICKNAME_LEN).collect()
}
