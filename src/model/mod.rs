//! API data transfer objects shared by controllers and services.

pub mod api;
pub mod reference;
pub mod report;
pub mod stat;
pub mod user;
