//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, report workflow types, and session data structures.

pub mod app;
pub mod db;
pub mod report;
pub mod session;
