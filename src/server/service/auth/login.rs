use crate::server::service::auth::google::{GoogleClient, LoginData};

pub fn login_service(google: &GoogleClient) -> LoginData {
    google.login_url()
}
