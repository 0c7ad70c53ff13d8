//! Run-level domain types shared by the request engine and the reporters.
pub mod run;

pub use run::{BenchmarkConfig, WorkItem};
