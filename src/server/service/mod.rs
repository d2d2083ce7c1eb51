//! Service layer for business logic and orchestration.
//!
//! Services coordinate between repositories and external APIs: report submission and
//! moderation, statistics queries, reference data, Google sign in, user provisioning,
//! the optional crime type advisor and retry logic for idempotent reads.

pub mod auth;
pub mod classifier;
pub mod reference;
pub mod report;
pub mod retry;
pub mod stat;
pub mod user;
