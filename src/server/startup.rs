use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::server::{
    config::Config,
    error::Error,
    service::{
        auth::google::GoogleClient,
        classifier::{openai::OpenAiAdvisor, CrimeTypeAdvisor, NoAdvisor},
    },
};

/// Timeout for a single advisor request
const ADVISOR_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the Google OAuth2 client from the configured credentials & endpoints
pub fn build_google_client(config: &Config) -> Result<GoogleClient, Error> {
    GoogleClient::new(
        &config.google_client_id,
        &config.google_client_secret,
        &config.google_auth_url,
        &config.google_token_url,
        &config.google_redirect_url,
        &config.google_userinfo_url,
    )
}

/// Build the crime type advisor, OpenAI when an API key is configured
pub fn build_advisor(config: &Config) -> Result<Arc<dyn CrimeTypeAdvisor>, Error> {
    let Some(api_key) = &config.openai_api_key else {
        tracing::info!("OPENAI_API_KEY not set, crime type advisor disabled");

        return Ok(Arc::new(NoAdvisor));
    };

    let http_client = reqwest::ClientBuilder::new()
        .timeout(ADVISOR_TIMEOUT)
        .build()?;

    tracing::info!("Crime type advisor enabled");

    Ok(Arc::new(OpenAiAdvisor::new(
        http_client,
        api_key.clone(),
        &config.openai_base_url,
    )))
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database & applied migrations");

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
    use tower_sessions_redis_store::fred::prelude::{ClientLike, Config as ValkeyConfig, Pool};

    let valkey_config = ValkeyConfig::from_url(&config.valkey_url)?;
    let pool = Pool::new(valkey_config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Plain HTTP during local development
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}
