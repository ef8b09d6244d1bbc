//! Categorical code labelling

use std::collections::HashMap;
use surveyclean_formats::{Cell, Table};
use tracing::debug;

/// Replace integer codes in a column with fixed text labels
///
/// Codes missing from the lookup become `Null`. Cells that are not
/// integers (already-labelled text, missing values) pass through
/// unchanged, so a second application is a no-op. Returns false when the
/// column is absent.
pub fn apply_labels(table: &mut Table, column: &str, labels: &HashMap<i64, &str>) -> bool {
    let applied = table.map_column(column, |cell| match cell {
        Cell::Int(code) => match labels.get(code) {
            Some(label) => Cell::Str((*label).to_string()),
            None => Cell::Null,
        },
        other => other.clone(),
    });
    if !applied {
        debug!("label column '{}' not in table, skipping", column);
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequency_labels() -> HashMap<i64, &'static str> {
        HashMap::from([(1, "Never"), (4, "Often"), (6, "Always")])
    }

    fn table_with(cells: Vec<Cell>) -> Table {
        let mut table = Table::new(vec!["freq".to_string()]);
        for cell in cells {
            table.push_row(vec![cell]).unwrap();
        }
        table
    }

    #[test]
    fn test_known_codes_become_labels() {
        let mut table = table_with(vec![Cell::Int(4), Cell::Int(1)]);

        assert!(apply_labels(&mut table, "freq", &frequency_labels()));

        assert_eq!(table.cell(0, "freq"), Some(&Cell::Str("Often".to_string())));
        assert_eq!(table.cell(1, "freq"), Some(&Cell::Str("Never".to_string())));
    }

    #[test]
    fn test_unknown_codes_become_missing() {
        let mut table = table_with(vec![Cell::Int(8), Cell::Null]);

        apply_labels(&mut table, "freq", &frequency_labels());

        assert_eq!(table.cell(0, "freq"), Some(&Cell::Null));
        assert_eq!(table.cell(1, "freq"), Some(&Cell::Null));
    }

    #[test]
    fn test_second_application_is_stable() {
        let mut table = table_with(vec![Cell::Int(4)]);

        apply_labels(&mut table, "freq", &frequency_labels());
        apply_labels(&mut table, "freq", &frequency_labels());

        assert_eq!(table.cell(0, "freq"), Some(&Cell::Str("Often".to_string())));
    }

    #[test]
    fn test_absent_column_returns_false() {
        let mut table = table_with(vec![Cell::Int(4)]);
        assert!(!apply_labels(&mut table, "missing", &frequency_labels()));
    }
}
