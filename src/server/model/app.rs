use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::{auth::google::GoogleClient, classifier::CrimeTypeAdvisor};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub google: GoogleClient,
    pub advisor: Arc<dyn CrimeTypeAdvisor>,
    /// Where users land after a successful login
    pub frontend_url: String,
}
