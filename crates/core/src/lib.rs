//! Core cleaning logic for survey tables
//!
//! This crate holds exact full-row deduplication, the static cleaning
//! plan for the ESS climate module, run statistics, and the pipeline
//! orchestrator that applies the stages in fixed order.

pub mod dedup;
pub mod error;
pub mod pipeline;
pub mod plan;
pub mod report;

pub use dedup::{drop_duplicate_rows, DedupOutcome, DuplicatePolicy};
pub use error::{Error, Result};
pub use pipeline::{clean_file, clean_table, load_variables_reference, CleanOptions};
pub use report::CleanReport;
