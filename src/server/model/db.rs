//! Database model type aliases.
//!
//! Short names for the SeaORM entity models used throughout the server, so service and
//! controller signatures don't need to spell out the `entity` crate paths.

/// Citizen report awaiting or past moderation.
///
/// # Fields (from `entity::report::Model`)
/// - `id` - Primary key
/// - `user_id` - Author of the report
/// - `region_id` / `crime_type_id` - Classification of the report
/// - `status` - `pending`, `approved` or `rejected`
/// - `approved_at` / `rejected_at` - Set when the matching transition happens
/// - `official_stat_id` - Statistics row incremented on approval
pub type ReportModel = entity::report::Model;

/// Aggregated incident count for a (region, crime type, year) triple.
pub type OfficialStatModel = entity::official_stat::Model;

pub type RegionModel = entity::region::Model;

pub type CrimeTypeModel = entity::crime_type::Model;

/// Application user account, provisioned through Google login.
pub type UserModel = entity::app_user::Model;
