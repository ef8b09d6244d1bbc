//! CSV table writer

use crate::{Result, Table};
use std::path::Path;
use tracing::debug;

/// Write a table as CSV: header row plus data rows, missing cells as
/// empty fields, no index column
pub fn write_table<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let path = path.as_ref();
    debug!("writing {} rows to {:?}", table.n_rows(), path);

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{read_table, Cell};
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_then_read_back() {
        let mut table = Table::new(vec!["idno".to_string(), "label".to_string()]);
        table.push_row(vec![Cell::Int(1), Cell::Str("Often".to_string())]).unwrap();
        table.push_row(vec![Cell::Int(2), Cell::Null]).unwrap();

        let temp_file = NamedTempFile::new().unwrap();
        write_table(&table, temp_file.path()).unwrap();

        let loaded = read_table(temp_file.path()).unwrap();
        assert_eq!(loaded.n_rows(), 2);
        assert_eq!(loaded.cell(0, "label"), Some(&Cell::Str("Often".to_string())));
        assert_eq!(loaded.cell(1, "label"), Some(&Cell::Null));
    }

    #[test]
    fn test_null_written_as_empty_field() {
        let mut table = Table::new(vec!["a".to_string(), "b".to_string()]);
        table.push_row(vec![Cell::Null, Cell::Int(3)]).unwrap();

        let temp_file = NamedTempFile::new().unwrap();
        write_table(&table, temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(content, "a,b\n,3\n");
    }
}
