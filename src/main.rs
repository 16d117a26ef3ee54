// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;

fn main() -> Result<()> {
    sloc_census::app::run()
}
