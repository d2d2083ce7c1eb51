use chrono::Utc;
use entity::report::ReportStatus;
use tipline_test_utils::prelude::*;

use crate::server::{
    data::report::ReportRepository,
    model::report::{NewReport, ReportChanges, ReportDecision, ReportFilter, ReportSort},
};

mod delete;
