//! Data access layer repositories.
//!
//! Each repository wraps one table and is generic over `ConnectionTrait`, so the same
//! repository works on the connection pool or inside a `DatabaseTransaction`.

pub mod crime_type;
pub mod official_stat;
pub mod region;
pub mod report;
pub mod user;
