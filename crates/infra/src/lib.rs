//! # Infrastructure
//!
//! Adapters implementing the port traits against the local filesystem, plus
//! the comment/string-aware source-line scanner.

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod manifest;
pub mod measurement;
pub mod persistence;
pub mod report_store;
pub mod syntax_file;

pub use filesystem::WalkEnumerator;
pub use manifest::CargoManifestReader;
pub use measurement::FileMeasurer;
pub use report_store::{JsonReportSource, JsonReportStore};
