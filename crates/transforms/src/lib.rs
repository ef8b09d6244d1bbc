//! Column-wise cleaning transforms
//!
//! Pure operations over tables, applied one column at a time. All of
//! them are schema-drift tolerant: a configured column that is absent
//! from the table is skipped, never an error.

pub mod buckets;
pub mod coerce;
pub mod error;
pub mod labels;
pub mod prune;
pub mod rename;

pub use buckets::{bucket_cell, bucket_columns, BucketLabels};
pub use coerce::coerce_to_integer;
pub use error::{Error, Result};
pub use labels::apply_labels;
pub use prune::drop_columns;
pub use rename::rename_columns;
