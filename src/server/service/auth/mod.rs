//! Authentication service layer.
//!
//! Google OAuth2 sign in: building the login URL and handling the callback by exchanging
//! the authorization code for the user's profile and provisioning their account.

pub mod callback;
pub mod google;
pub mod login;
