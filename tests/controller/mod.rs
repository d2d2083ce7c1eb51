//! Tests for HTTP controller endpoints.
//!
//! Controllers are called directly with extractors built from a [`TestContext`], then the
//! status code and JSON body of the response are checked.

mod admin;
mod auth;
mod reference;
mod report;
mod stat;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tipline::server::model::session::user::SessionUserId;
use tipline_test_utils::prelude::*;

use crate::util::{json_body, TestContextExt};
