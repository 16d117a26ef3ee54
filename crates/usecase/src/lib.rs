//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`analyze`]: enumerate, measure and describe one repository
//! - [`summarize`]: aggregate stored repository reports
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod analyze;
pub mod summarize;

pub use analyze::AnalyzeRepository;
pub use summarize::SummarizeReports;
