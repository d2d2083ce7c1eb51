use chrono::{Datelike, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{official_stat::OfficialStatRepository, report::ReportRepository},
    error::{report::ReportError, Error},
    model::{db::ReportModel, report::ReportDecision},
};

/// Moves reports out of `pending` & keeps the official statistics in step with approvals
///
/// A transition is one database transaction: the guarded status update, the statistics
/// increment and the link between the two either all commit or none do. Any error returned
/// before the commit drops the transaction which rolls it back.
pub struct ReportLifecycleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportLifecycleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies a moderation decision to a pending report
    ///
    /// # Returns
    /// - `Ok(ReportModel)` - The report after the transition
    /// - `Err(Error::ReportError(ReportError::NotFound))` - No report with the ID
    /// - `Err(Error::ReportError(ReportError::InvalidStateTransition))` - The report was
    ///   already approved or rejected, nothing was changed
    /// - `Err(Error::DbErr)` - Store failure, nothing was changed
    pub async fn transition(
        &self,
        report_id: i32,
        decision: ReportDecision,
    ) -> Result<ReportModel, Error> {
        let txn = self.db.begin().await?;
        let report_repo = ReportRepository::new(&txn);
        let now = Utc::now().naive_utc();

        let rows = report_repo.decide(report_id, decision, now).await?;
        if rows == 0 {
            let Some(report) = report_repo.get_by_id(report_id).await? else {
                return Err(ReportError::NotFound(report_id).into());
            };

            return Err(match decision.resolve(report.status) {
                None => ReportError::InvalidStateTransition {
                    report_id,
                    current: report.status,
                    requested: decision.target_status(),
                }
                .into(),
                Some(_) => Error::InternalError(format!(
                    "guarded update of report {} matched no row while it is still {:?}",
                    report_id, report.status
                )),
            });
        }

        let report = report_repo
            .get_by_id(report_id)
            .await?
            .ok_or(ReportError::NotFound(report_id))?;

        let report = match decision {
            ReportDecision::Reject => report,
            ReportDecision::Approve => {
                let stat = OfficialStatRepository::new(&txn)
                    .increment(report.region_id, report.crime_type_id, now.year())
                    .await?;
                report_repo.link_official_stat(report.id, stat.id).await?;

                tracing::debug!(
                    report_id,
                    official_stat_id = stat.id,
                    count = stat.count,
                    "Incremented official statistics for approved report"
                );

                report_repo
                    .get_by_id(report_id)
                    .await?
                    .ok_or(ReportError::NotFound(report_id))?
            }
        };

        txn.commit().await?;

        tracing::info!(report_id, status = ?report.status, "Report moderated");

        Ok(report)
    }

    pub async fn approve(&self, report_id: i32) -> Result<ReportModel, Error> {
        self.transition(report_id, ReportDecision::Approve).await
    }

    pub async fn reject(&self, report_id: i32) -> Result<ReportModel, Error> {
        self.transition(report_id, ReportDecision::Reject).await
    }
}
