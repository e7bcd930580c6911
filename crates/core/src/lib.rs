//! Core types and report logic for the GGR reporting dashboard client.
//!
//! This crate contains:
//! - Data models for the reporting backend's JSON payloads
//! - The client-side aggregation behind the complete report view
//! - Spreadsheet export of the rendered report
//! - Error types
//!
//! Everything here is UI- and transport-agnostic; the desktop crate owns
//! the HTTP client and the egui shell.

pub mod error;
pub mod export;
pub mod models;
pub mod report;

pub use error::*;
pub use models::*;
pub use report::*;
