//! # Domain
//!
//! Language syntax definitions, scan/summary configuration and the report
//! models produced by a census run.
//!
//! - [`syntax`] / [`language`]: comment and literal rules per language
//! - [`config`]: validated scan and summary settings
//! - [`model`]: per-file and per-repository measurements
//! - [`analytics`]: organisation-wide aggregation

// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod language;
pub mod model;
pub mod options;
pub mod syntax;
