use thiserror::Error;

/// Failure to obtain a crime type suggestion
///
/// Never surfaced to API consumers, the advisor logs it and the submitted crime type is kept.
#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("Advisor API responded with status {0}")]
    Status(u16),
    #[error("Advisor API returned no choices")]
    EmptyResponse,
    #[error("Advisor answer {0:?} is not a crime type ID")]
    UnparseableAnswer(String),
    #[error("Advisor suggested crime type ID {0} which is not a candidate")]
    UnknownCandidate(i32),
}
