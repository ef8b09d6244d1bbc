//! Exact full-row deduplication
//!
//! Rows are hashed to 64 bits over a canonical cell encoding and
//! counted; the removal policy decides whether any copy of a duplicated
//! row survives.

use ahash::{AHashMap, AHashSet};
use surveyclean_formats::{Cell, Table};
use tracing::info;

/// What to do with rows whose full content appears more than once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Remove every copy, the first included
    #[default]
    DropAll,
    /// Keep the first occurrence, remove the rest
    KeepFirst,
}

/// Outcome of a deduplication pass
#[derive(Debug, Clone, Default)]
pub struct DedupOutcome {
    /// Rows before the pass
    pub rows_before: usize,
    /// Rows after the pass
    pub rows_after: usize,
    /// Rows removed
    pub rows_dropped: usize,
}

/// Hash one row over the canonical encoding of its cells
fn row_hash(row: &[Cell], buf: &mut Vec<u8>) -> u64 {
    buf.clear();
    for cell in row {
        cell.write_canonical(buf);
        // Unit separator so adjacent cells cannot run together
        buf.push(0x1f);
    }
    seahash::hash(buf)
}

/// Remove fully duplicated rows from the table, preserving source order
/// of the survivors
pub fn drop_duplicate_rows(table: &mut Table, policy: DuplicatePolicy) -> DedupOutcome {
    let rows_before = table.n_rows();

    let mut buf = Vec::new();
    let hashes: Vec<u64> = table.rows().map(|row| row_hash(row, &mut buf)).collect();

    let mut counts: AHashMap<u64, u32> = AHashMap::with_capacity(hashes.len());
    for hash in &hashes {
        *counts.entry(*hash).or_insert(0) += 1;
    }

    let mut index = 0;
    match policy {
        DuplicatePolicy::DropAll => {
            table.retain_rows(|_| {
                let keep = counts[&hashes[index]] == 1;
                index += 1;
                keep
            });
        }
        DuplicatePolicy::KeepFirst => {
            let mut seen: AHashSet<u64> = AHashSet::with_capacity(counts.len());
            table.retain_rows(|_| {
                let keep = seen.insert(hashes[index]);
                index += 1;
                keep
            });
        }
    }

    let rows_after = table.n_rows();
    let outcome = DedupOutcome {
        rows_before,
        rows_after,
        rows_dropped: rows_before - rows_after,
    };
    info!(
        "removed {} duplicate rows ({} -> {})",
        outcome.rows_dropped, rows_before, rows_after
    );
    outcome
}
