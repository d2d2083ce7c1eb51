//! Report workflow types shared by the repository, lifecycle manager and controllers.

use entity::report::ReportStatus;

use crate::model::report::{
    AdminReportQueryDto, PatchReportDto, ReportQueryDto, ReportSortDto, UpdateReportDto,
};

/// Default number of reports per page.
pub const DEFAULT_PAGE_LIMIT: u64 = 10;
/// Upper bound on the number of reports per page.
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Moderation decision applied to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportDecision {
    Approve,
    Reject,
}

impl ReportDecision {
    /// Status the report ends up in once the decision is applied.
    pub fn target_status(self) -> ReportStatus {
        match self {
            Self::Approve => ReportStatus::Approved,
            Self::Reject => ReportStatus::Rejected,
        }
    }

    /// Resolves the decision against a report's current status.
    ///
    /// Status is a one-shot latch: only `Pending` reports can be decided, so this returns
    /// `None` for any report that was already approved or rejected.
    pub fn resolve(self, current: ReportStatus) -> Option<ReportStatus> {
        match current {
            ReportStatus::Pending => Some(self.target_status()),
            ReportStatus::Approved | ReportStatus::Rejected => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportSort {
    #[default]
    Latest,
    Oldest,
}

impl From<ReportSortDto> for ReportSort {
    fn from(sort: ReportSortDto) -> Self {
        match sort {
            ReportSortDto::Latest => Self::Latest,
            ReportSortDto::Oldest => Self::Oldest,
        }
    }
}

/// Filter, sort & pagination parameters for report listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFilter {
    pub region_id: Option<i32>,
    pub crime_type_id: Option<i32>,
    pub keyword: Option<String>,
    pub status: Option<ReportStatus>,
    pub sort: ReportSort,
    pub skip: u64,
    pub limit: u64,
}

impl Default for ReportFilter {
    fn default() -> Self {
        Self {
            region_id: None,
            crime_type_id: None,
            keyword: None,
            status: None,
            sort: ReportSort::Latest,
            skip: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl ReportFilter {
    /// Page size clamped to `1..=MAX_PAGE_LIMIT`.
    pub fn page_limit(&self) -> u64 {
        self.limit.clamp(1, MAX_PAGE_LIMIT)
    }
}

impl From<ReportQueryDto> for ReportFilter {
    fn from(query: ReportQueryDto) -> Self {
        Self {
            region_id: query.region_id,
            crime_type_id: query.crime_type_id,
            keyword: query
                .keyword
                .map(|keyword| keyword.trim().to_string())
                .filter(|keyword| !keyword.is_empty()),
            status: query.status.map(Into::into),
            sort: query.sort.map(Into::into).unwrap_or_default(),
            skip: query.skip.unwrap_or(0),
            limit: query.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        }
    }
}

/// Moderation queue, oldest first so reports are handled in submission order
impl From<AdminReportQueryDto> for ReportFilter {
    fn from(query: AdminReportQueryDto) -> Self {
        Self {
            status: Some(
                query
                    .status
                    .map(Into::into)
                    .unwrap_or(ReportStatus::Pending),
            ),
            sort: ReportSort::Oldest,
            skip: query.skip.unwrap_or(0),
            limit: query.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
            ..Default::default()
        }
    }
}

/// Fields of a new report. Status is not part of the input: reports always start pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub region_id: i32,
    pub crime_type_id: i32,
    pub title: String,
    pub content: String,
}

/// Editable fields of a pending report, `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub region_id: Option<i32>,
    pub crime_type_id: Option<i32>,
}

impl From<UpdateReportDto> for ReportChanges {
    fn from(update: UpdateReportDto) -> Self {
        Self {
            title: Some(update.title),
            content: Some(update.content),
            region_id: Some(update.region_id),
            crime_type_id: Some(update.crime_type_id),
        }
    }
}

impl From<PatchReportDto> for ReportChanges {
    fn from(patch: PatchReportDto) -> Self {
        Self {
            title: patch.title,
            content: patch.content,
            region_id: patch.region_id,
            crime_type_id: patch.crime_type_id,
        }
    }
}
