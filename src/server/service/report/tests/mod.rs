use async_trait::async_trait;
use entity::{app_user::UserRole, report::ReportStatus};
use sea_orm::{EntityTrait, PaginatorTrait};
use tipline_test_utils::prelude::*;

use crate::{
    model::report::{CreateReportDto, PatchReportDto, UpdateReportDto},
    server::{
        error::{auth::AuthError, report::ReportError, Error},
        model::{db::CrimeTypeModel, report::ReportDecision},
        service::{
            classifier::{CrimeTypeAdvisor, NoAdvisor},
            report::{lifecycle::ReportLifecycleService, ReportService},
        },
    },
};


/// Advisor always answering with the same suggestion
struct FixedAdvisor(Option<i32>);

#[async_trait]
impl CrimeTypeAdvisor for FixedAdvisor {
    async fn suggest(&self, _content: &str, _candidates: &[CrimeTypeModel]) -> Option<i32> {
        self.0
    }
}
