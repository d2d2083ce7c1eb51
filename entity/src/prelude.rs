pub use super::app_user::Entity as AppUser;
pub use super::crime_type::Entity as CrimeType;
pub use super::official_stat::Entity as OfficialStat;
pub use super::region::Entity as Region;
pub use super::report::Entity as Report;
