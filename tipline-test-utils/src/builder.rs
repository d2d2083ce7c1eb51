//! Declarative test builder.
//!
//! The builder queues database tables, mock HTTP endpoints and fixtures, then executes
//! all of them in the final `build()` call.

use mockito::Mock;
use sea_orm::{
    sea_query::{Index, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Name of the unique index backing the official statistics upsert in tests.
pub static IDX_OFFICIAL_STAT_TRIPLE: &str = "idx-official_stat-region_id-crime_type_id-year";

/// Profile returned by the mock Google userinfo endpoint.
struct GoogleProfileConfig {
    google_id: String,
    email: String,
    name: Option<String>,
}

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()` to create a complete
/// test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_report_tables: bool,
    include_user_tables: bool,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    google_profiles: Vec<GoogleProfileConfig>,
    advisor_answers: Vec<(usize, String)>, // (status, answer)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_report_tables: false,
            include_user_tables: false,
            mock_builders: Vec::new(),
            google_profiles: Vec::new(),
            advisor_answers: Vec::new(),
        }
    }

    /// Add the user table to the test database.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add every table used by the report workflow to the test database.
    ///
    /// Creates Region, CrimeType, AppUser, OfficialStat and Report in dependency order,
    /// plus the unique `(region_id, crime_type_id, year)` index on OfficialStat that the
    /// statistics upsert targets.
    pub fn with_report_tables(mut self) -> Self {
        self.include_report_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tipline_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), tipline_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Region)
    ///     .with_table(CrimeType)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add mock Google token & userinfo endpoints to the test server.
    ///
    /// The token endpoint hands out [`TEST_ACCESS_TOKEN`](crate::constant::TEST_ACCESS_TOKEN)
    /// and the userinfo endpoint returns the given profile once for that bearer token.
    pub fn with_google_endpoints(
        mut self,
        google_id: impl Into<String>,
        email: impl Into<String>,
        name: Option<&str>,
    ) -> Self {
        self.google_profiles.push(GoogleProfileConfig {
            google_id: google_id.into(),
            email: email.into(),
            name: name.map(str::to_string),
        });
        self
    }

    /// Add a mock chat completions endpoint answering with `answer`.
    pub fn with_advisor_endpoint(mut self, status: usize, answer: impl Into<String>) -> Self {
        self.advisor_answers.push((status, answer.into()));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables and mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table or index creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        // 1. Create tables
        let mut all_tables = Vec::new();
        let mut all_indexes = Vec::new();

        if self.include_report_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Region),
                schema.create_table_from_entity(entity::prelude::CrimeType),
                schema.create_table_from_entity(entity::prelude::AppUser),
                schema.create_table_from_entity(entity::prelude::OfficialStat),
                schema.create_table_from_entity(entity::prelude::Report),
            ]);

            all_indexes.push(
                Index::create()
                    .name(IDX_OFFICIAL_STAT_TRIPLE)
                    .table(entity::official_stat::Entity)
                    .col(entity::official_stat::Column::RegionId)
                    .col(entity::official_stat::Column::CrimeTypeId)
                    .col(entity::official_stat::Column::Year)
                    .unique()
                    .to_owned(),
            );
        } else if self.include_user_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::AppUser));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;
        setup.with_indexes(all_indexes).await?;

        // 2. Create mock endpoints
        // Custom endpoints are created first so tests can stack an error mock ahead of a
        // success mock for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for profile in self.google_profiles {
            mocks.extend(setup.google().create_google_endpoints(
                &profile.google_id,
                &profile.email,
                profile.name.as_deref(),
            ));
        }

        for (status, answer) in self.advisor_answers {
            mocks.push(setup.advisor().create_chat_completion_endpoint(status, &answer));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
