//! Test fixture modules for database and HTTP mock creation.
//!
//! - `reference` - Region and crime type reference rows
//! - `user` - Application user accounts
//! - `report` - Citizen reports and their dependencies
//! - `stat` - Official statistics rows
//! - `google` - Google OAuth2 token and userinfo endpoints
//! - `advisor` - Chat completion endpoint for the crime type advisor

pub mod advisor;
pub mod google;
pub mod reference;
pub mod report;
pub mod stat;
pub mod user;
