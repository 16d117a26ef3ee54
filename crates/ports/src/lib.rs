//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: Source file discovery under a repository root
//! - [`measurement`]: SLOC measurement of discovered files
//! - [`manifest`]: Dependency extraction from package manifests
//! - [`report`]: Loading and storing repository reports
//!
//! These ports allow the use case layer to remain independent of
//! specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod manifest;
pub mod measurement;
pub mod report;
