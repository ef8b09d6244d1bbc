//! Column renaming

use std::collections::HashMap;
use surveyclean_formats::Table;
use tracing::debug;

/// Rename columns according to a static old → new map
///
/// Map keys not present in the table are ignored; unrelated columns pass
/// through unchanged. Returns the number of columns renamed.
pub fn rename_columns(table: &mut Table, mapping: &HashMap<&str, &str>) -> usize {
    let mut renamed = 0;
    for (old, new) in mapping {
        if table.rename_column(old, new) {
            renamed += 1;
        } else {
            debug!("rename key '{}' not in table, skipping", old);
        }
    }
    renamed
}

#[cfg(test)]
mod tests {
    use super::*;
    use surveyclean_formats::Cell;

    #[test]
    fn test_known_columns_renamed() {
        let mut table = Table::new(vec!["rdcenr".to_string(), "idno".to_string()]);
        table.push_row(vec![Cell::Int(4), Cell::Int(1)]).unwrap();

        let mapping = HashMap::from([
            ("rdcenr", "freq_azioni_risparmio_energ"),
            ("wrclmch", "preoccup_camb_clima"),
        ]);
        let renamed = rename_columns(&mut table, &mapping);

        assert_eq!(renamed, 1);
        assert!(table.has_column("freq_azioni_risparmio_energ"));
        assert!(!table.has_column("rdcenr"));
        assert!(table.has_column("idno"));
    }

    #[test]
    fn test_rename_preserves_column_order_and_data() {
        let mut table = Table::new(vec!["a".to_string(), "rdcenr".to_string()]);
        table.push_row(vec![Cell::Int(9), Cell::Int(4)]).unwrap();

        rename_columns(&mut table, &HashMap::from([("rdcenr", "renamed")]));

        assert_eq!(table.columns(), &["a".to_string(), "renamed".to_string()]);
        assert_eq!(table.cell(0, "renamed"), Some(&Cell::Int(4)));
    }
}
