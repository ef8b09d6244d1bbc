//! Metadata column removal

use surveyclean_formats::Table;
use tracing::debug;

/// Drop each named column if present
///
/// Unknown names are skipped so one drop list works across survey
/// editions with drifting schemas. Returns the number of columns
/// removed.
pub fn drop_columns(table: &mut Table, names: &[&str]) -> usize {
    let mut dropped = 0;
    for name in names {
        if table.drop_column(name) {
            dropped += 1;
        } else {
            debug!("drop list column '{}' not in table, skipping", name);
        }
    }
    dropped
}
