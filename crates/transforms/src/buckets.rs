//! Ordinal bucketing
//!
//! Every survey scale recoded here shares one code split: 1-2, 3, 4-5.
//! The labels differ per scale; the 7-9 don't-know/refusal sentinels and
//! any other unknown code collapse to missing.

use surveyclean_formats::{Cell, Table};
use tracing::debug;

/// Labels for the three buckets of a 1-5 ordinal scale
#[derive(Debug, Clone, Copy)]
pub struct BucketLabels {
    /// Codes 1-2
    pub low: &'static str,
    /// Code 3
    pub middle: &'static str,
    /// Codes 4-5
    pub high: &'static str,
}

/// Bucket a single cell
///
/// Total over all cell values: unknown codes (the 7-9 sentinel range
/// included) become `Null`; non-integer cells pass through unchanged,
/// which makes re-application a no-op on already-labelled data.
pub fn bucket_cell(cell: &Cell, labels: &BucketLabels) -> Cell {
    match cell {
        Cell::Int(code) => match code {
            1 | 2 => Cell::Str(labels.low.to_string()),
            3 => Cell::Str(labels.middle.to_string()),
            4 | 5 => Cell::Str(labels.high.to_string()),
            _ => Cell::Null,
        },
        other => other.clone(),
    }
}

/// Bucket every listed column present in the table
///
/// Absent columns are skipped. Returns the number of columns recoded.
pub fn bucket_columns(table: &mut Table, columns: &[&str], labels: &BucketLabels) -> usize {
    let mut recoded = 0;
    for name in columns {
        if table.map_column(name, |cell| bucket_cell(cell, labels)) {
            recoded += 1;
        } else {
            debug!("bucket column '{}' not in table, skipping", name);
        }
    }
    recoded
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONCERN: BucketLabels = BucketLabels {
        low: "Small",
        middle: "Medium",
        high: "Large",
    };

    #[test]
    fn test_code_ranges() {
        assert_eq!(bucket_cell(&Cell::Int(1), &CONCERN), Cell::Str("Small".to_string()));
        assert_eq!(bucket_cell(&Cell::Int(2), &CONCERN), Cell::Str("Small".to_string()));
        assert_eq!(bucket_cell(&Cell::Int(3), &CONCERN), Cell::Str("Medium".to_string()));
        assert_eq!(bucket_cell(&Cell::Int(4), &CONCERN), Cell::Str("Large".to_string()));
        assert_eq!(bucket_cell(&Cell::Int(5), &CONCERN), Cell::Str("Large".to_string()));
    }

    #[test]
    fn test_sentinels_and_unknown_codes_become_missing() {
        for code in [0, 6, 7, 8, 9, 77, -1] {
            assert_eq!(bucket_cell(&Cell::Int(code), &CONCERN), Cell::Null);
        }
    }

    #[test]
    fn test_missing_stays_missing() {
        assert_eq!(bucket_cell(&Cell::Null, &CONCERN), Cell::Null);
    }

    #[test]
    fn test_text_passes_through() {
        let labelled = Cell::Str("Large".to_string());
        assert_eq!(bucket_cell(&labelled, &CONCERN), labelled);
    }

    #[test]
    fn test_bucket_columns_skips_absent() {
        let mut table = Table::new(vec!["worry".to_string()]);
        table.push_row(vec![Cell::Int(5)]).unwrap();

        let recoded = bucket_columns(&mut table, &["worry", "missing"], &CONCERN);

        assert_eq!(recoded, 1);
        assert_eq!(table.cell(0, "worry"), Some(&Cell::Str("Large".to_string())));
    }

    #[test]
    fn test_double_application_is_stable() {
        let mut table = Table::new(vec!["worry".to_string()]);
        table.push_row(vec![Cell::Int(2)]).unwrap();

        bucket_columns(&mut table, &["worry"], &CONCERN);
        let first = table.cell(0, "worry").cloned();
        bucket_columns(&mut table, &["worry"], &CONCERN);

        assert_eq!(table.cell(0, "worry").cloned(), first);
    }
}
