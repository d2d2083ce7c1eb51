use sea_orm::DatabaseConnection;

use crate::server::{
    error::Error,
    service::{auth::google::GoogleClient, user::UserService},
};

pub struct CallbackService<'a> {
    db: &'a DatabaseConnection,
    google: &'a GoogleClient,
}

impl<'a> CallbackService<'a> {
    /// Creates a new instance of [`CallbackService`]
    pub fn new(db: &'a DatabaseConnection, google: &'a GoogleClient) -> Self {
        Self { db, google }
    }

    /// Completes a Google sign in & returns the ID of the signed in user
    ///
    /// # Arguments
    /// - `code`: Authorization code Google redirected the user back with
    pub async fn handle_callback(&self, code: &str) -> Result<i32, Error> {
        let profile = self.google.fetch_profile(code).await?;

        let user = UserService::new(self.db)
            .provision_google_user(&profile)
            .await?;

        tracing::info!(user_id = user.id, "User signed in with Google");

        Ok(user.id)
    }
}
