//! Server application core modules.
//!
//! All server-side functionality of Tipline: HTTP routing, Google sign in, the data access
//! layer, report moderation with its official statistics side effect, and configuration.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
