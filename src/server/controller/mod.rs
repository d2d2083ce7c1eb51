//! HTTP controller endpoints for the Tipline web API.
//!
//! Axum handlers for Google sign in, citizen reports, moderation, statistics and reference
//! data. Controllers extract the session & request parameters, call into the service layer
//! and return JSON responses documented with utoipa.

pub mod admin;
pub mod auth;
pub mod reference;
pub mod report;
pub mod stat;
pub mod util;
