pub mod prelude;

pub mod app_user;
pub mod crime_type;
pub mod official_stat;
pub mod region;
pub mod report;
