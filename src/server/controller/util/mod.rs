//! Utility functions for controller request handling.
//!
//! Reusable helpers used across controllers: CSRF validation for the login callback and
//! retrieval of the signed in user (optionally requiring admin) for protected endpoints.

pub mod csrf;
pub mod get_user;
