// crates/infra/src/measurement.rs
pub mod measurer;
pub mod strategies;

pub use measurer::FileMeasurer;
