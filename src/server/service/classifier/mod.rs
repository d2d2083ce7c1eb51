//! Optional crime type classification for newly submitted reports.
//!
//! The advisor is consulted once per report submission. It can only ever suggest one of the
//! crime types it was given and is not allowed to fail the submission: every failure is
//! logged and reported as "no suggestion".

pub mod openai;

use async_trait::async_trait;

use crate::server::model::db::CrimeTypeModel;

#[async_trait]
pub trait CrimeTypeAdvisor: Send + Sync {
    /// Suggests the ID of the candidate best matching the report content
    ///
    /// Returns `None` when there is no suggestion, including when the advisor failed.
    async fn suggest(&self, content: &str, candidates: &[CrimeTypeModel]) -> Option<i32>;
}

/// Advisor used when no classification backend is configured
pub struct NoAdvisor;

#[async_trait]
impl CrimeTypeAdvisor for NoAdvisor {
    async fn suggest(&self, _content: &str, _candidates: &[CrimeTypeModel]) -> Option<i32> {
        None
    }
}
