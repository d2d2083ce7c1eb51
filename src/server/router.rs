//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs` with the generated document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/auth/google/login` - Start Google sign in
/// - `GET /api/auth/google/callback` - Google OAuth2 callback
/// - `POST /api/auth/logout` - Logout current user
/// - `GET /api/auth/me` - Current user information
/// - `GET|POST /api/reports` - Browse & submit reports
/// - `GET|PUT|PATCH|DELETE /api/reports/{report_id}` - Read & edit a report
/// - `GET /api/admin/reports` - Moderation queue
/// - `POST /api/admin/reports/{report_id}/approve|reject` - Moderate a report
/// - `GET /api/stats` - Region statistics by crime type
/// - `GET /api/official-stats` - Raw statistics rows
/// - `GET /api/regions`, `GET /api/crime-types` - Reference data
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Tipline", description = "Tipline crime report API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Google sign in & session routes"),
        (name = controller::report::REPORT_TAG, description = "Citizen report routes"),
        (name = controller::admin::ADMIN_TAG, description = "Report moderation routes"),
        (name = controller::stat::STAT_TAG, description = "Official statistics routes"),
        (name = controller::reference::REFERENCE_TAG, description = "Region & crime type routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::me))
        .routes(routes!(
            controller::report::list_reports,
            controller::report::create_report
        ))
        .routes(routes!(
            controller::report::get_report,
            controller::report::replace_report,
            controller::report::patch_report,
            controller::report::delete_report
        ))
        .routes(routes!(controller::admin::list_moderation_queue))
        .routes(routes!(controller::admin::approve_report))
        .routes(routes!(controller::admin::reject_report))
        .routes(routes!(controller::stat::get_region_stats))
        .routes(routes!(controller::stat::list_official_stats))
        .routes(routes!(controller::reference::list_regions))
        .routes(routes!(controller::reference::list_crime_types))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
