//! Report service layer.
//!
//! Submission, browsing & editing of reports by citizens, plus moderation through the
//! [`lifecycle::ReportLifecycleService`].

pub mod lifecycle;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use chrono::Utc;
use entity::app_user::UserRole;
use sea_orm::DatabaseConnection;

use crate::{
    model::report::{CreateReportDto, PatchReportDto, ReportDto, UpdateReportDto},
    server::{
        data::{
            crime_type::CrimeTypeRepository, region::RegionRepository, report::ReportRepository,
        },
        error::{auth::AuthError, report::ReportError, Error},
        model::{
            db::{ReportModel, UserModel},
            report::{NewReport, ReportChanges, ReportDecision, ReportFilter},
        },
        service::{classifier::CrimeTypeAdvisor, report::lifecycle::ReportLifecycleService},
    },
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of [`ReportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a new report on behalf of `author_id`
    ///
    /// The advisor is consulted once with the report content. When it suggests a crime
    /// type, the suggestion replaces the one submitted.
    ///
    /// # Returns
    /// - `Ok(ReportDto)` - The pending report that was created
    /// - `Err(Error::ReportError(ReportError::UnknownRegion))` - Region does not exist
    /// - `Err(Error::ReportError(ReportError::UnknownCrimeType))` - Crime type does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(
        &self,
        author_id: i32,
        report: CreateReportDto,
        advisor: &dyn CrimeTypeAdvisor,
    ) -> Result<ReportDto, Error> {
        let region = RegionRepository::new(self.db)
            .get_by_id(report.region_id)
            .await?
            .ok_or(ReportError::UnknownRegion(report.region_id))?;

        let mut candidates = CrimeTypeRepository::new(self.db).list_all().await?;
        if !candidates.iter().any(|c| c.id == report.crime_type_id) {
            return Err(ReportError::UnknownCrimeType(report.crime_type_id).into());
        }

        let crime_type_id = match advisor.suggest(&report.content, &candidates).await {
            Some(suggested) if suggested == report.crime_type_id => suggested,
            Some(suggested) if candidates.iter().any(|c| c.id == suggested) => {
                tracing::debug!(
                    submitted = report.crime_type_id,
                    suggested,
                    "Advisor replaced submitted crime type"
                );
                suggested
            }
            Some(suggested) => {
                tracing::warn!(
                    submitted = report.crime_type_id,
                    suggested,
                    "Ignoring advisor suggestion outside the known crime types"
                );
                report.crime_type_id
            }
            None => report.crime_type_id,
        };

        let position = candidates
            .iter()
            .position(|c| c.id == crime_type_id)
            .ok_or(ReportError::UnknownCrimeType(crime_type_id))?;
        let crime_type = candidates.swap_remove(position);

        let created = ReportRepository::new(self.db)
            .create(
                author_id,
                NewReport {
                    region_id: region.id,
                    crime_type_id,
                    title: report.title,
                    content: report.content,
                },
            )
            .await?;

        tracing::info!(report_id = created.id, user_id = author_id, "Report submitted");

        Ok(ReportDto::from_models(created, region, crime_type))
    }

    pub async fn get(&self, report_id: i32) -> Result<ReportDto, Error> {
        let report = ReportRepository::new(self.db)
            .get_by_id(report_id)
            .await?
            .ok_or(ReportError::NotFound(report_id))?;

        self.resolve(report).await
    }

    /// Lists reports with their regions & crime types resolved in one lookup each
    pub async fn list(&self, filter: &ReportFilter) -> Result<Vec<ReportDto>, Error> {
        let reports = ReportRepository::new(self.db).find_filtered(filter).await?;
        if reports.is_empty() {
            return Ok(Vec::new());
        }

        let region_ids = reports.iter().map(|r| r.region_id).collect();
        let crime_type_ids = reports.iter().map(|r| r.crime_type_id).collect();

        let regions: HashMap<i32, _> = RegionRepository::new(self.db)
            .get_many_by_ids(region_ids)
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();
        let crime_types: HashMap<i32, _> = CrimeTypeRepository::new(self.db)
            .get_many_by_ids(crime_type_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        reports
            .into_iter()
            .map(|report| {
                let region = regions.get(&report.region_id).cloned();
                let crime_type = crime_types.get(&report.crime_type_id).cloned();

                match (region, crime_type) {
                    (Some(region), Some(crime_type)) => {
                        Ok(ReportDto::from_models(report, region, crime_type))
                    }
                    _ => Err(missing_reference(&report)),
                }
            })
            .collect()
    }

    /// Replaces every editable field of a pending report
    pub async fn replace(
        &self,
        report_id: i32,
        editor: &UserModel,
        update: UpdateReportDto,
    ) -> Result<ReportDto, Error> {
        self.apply_changes(report_id, editor, update.into()).await
    }

    /// Changes only the provided fields of a pending report
    pub async fn patch(
        &self,
        report_id: i32,
        editor: &UserModel,
        patch: PatchReportDto,
    ) -> Result<ReportDto, Error> {
        self.apply_changes(report_id, editor, patch.into()).await
    }

    /// Deletes a report, approved reports included
    ///
    /// Official statistics are left untouched.
    pub async fn delete(&self, report_id: i32, editor: &UserModel) -> Result<(), Error> {
        let report_repo = ReportRepository::new(self.db);

        let report = report_repo
            .get_by_id(report_id)
            .await?
            .ok_or(ReportError::NotFound(report_id))?;
        ensure_can_edit(editor, &report)?;

        let result = report_repo.delete(report_id).await?;
        if result.rows_affected == 0 {
            return Err(ReportError::NotFound(report_id).into());
        }

        tracing::info!(report_id, user_id = editor.id, "Report deleted");

        Ok(())
    }

    /// Approves or rejects a pending report
    pub async fn moderate(
        &self,
        report_id: i32,
        decision: ReportDecision,
    ) -> Result<ReportDto, Error> {
        let report = ReportLifecycleService::new(self.db)
            .transition(report_id, decision)
            .await?;

        self.resolve(report).await
    }

    async fn apply_changes(
        &self,
        report_id: i32,
        editor: &UserModel,
        changes: ReportChanges,
    ) -> Result<ReportDto, Error> {
        let report_repo = ReportRepository::new(self.db);

        let report = report_repo
            .get_by_id(report_id)
            .await?
            .ok_or(ReportError::NotFound(report_id))?;
        ensure_can_edit(editor, &report)?;

        if let Some(region_id) = changes.region_id {
            RegionRepository::new(self.db)
                .get_by_id(region_id)
                .await?
                .ok_or(ReportError::UnknownRegion(region_id))?;
        }
        if let Some(crime_type_id) = changes.crime_type_id {
            CrimeTypeRepository::new(self.db)
                .get_by_id(crime_type_id)
                .await?
                .ok_or(ReportError::UnknownCrimeType(crime_type_id))?;
        }

        let rows = report_repo
            .update_pending(report_id, &changes, Utc::now().naive_utc())
            .await?;
        if rows == 0 {
            let error = match report_repo.get_by_id(report_id).await? {
                None => ReportError::NotFound(report_id),
                Some(_) => ReportError::NotPending(report_id),
            };

            return Err(error.into());
        }

        let report = report_repo
            .get_by_id(report_id)
            .await?
            .ok_or(ReportError::NotFound(report_id))?;

        self.resolve(report).await
    }

    async fn resolve(&self, report: ReportModel) -> Result<ReportDto, Error> {
        let region = RegionRepository::new(self.db)
            .get_by_id(report.region_id)
            .await?;
        let crime_type = CrimeTypeRepository::new(self.db)
            .get_by_id(report.crime_type_id)
            .await?;

        match (region, crime_type) {
            (Some(region), Some(crime_type)) => {
                Ok(ReportDto::from_models(report, region, crime_type))
            }
            _ => Err(missing_reference(&report)),
        }
    }
}

/// Only the author of a report or an admin may change it
fn ensure_can_edit(editor: &UserModel, report: &ReportModel) -> Result<(), AuthError> {
    if editor.id == report.user_id || editor.role == UserRole::Admin {
        return Ok(());
    }

    Err(AuthError::NotReportAuthor {
        user_id: editor.id,
        report_id: report.id,
    })
}

// Would only occur if the foreign key constraints on the report table are not enforced
fn missing_reference(report: &ReportModel) -> Error {
    Error::InternalError(format!(
        "Failed to find region ID {} or crime type ID {} for report ID {}",
        report.region_id, report.crime_type_id, report.id
    ))
}
