//! Nullable integer coercion

use crate::{Error, Result};
use surveyclean_formats::{Cell, Table};
use tracing::debug;

/// Coerce the named columns to nullable integers
///
/// `Float` cells with no fractional part become `Int`; fractional floats
/// and text are typed errors rather than being truncated. Missing values
/// stay missing. Columns absent from the table are skipped. Returns the
/// number of columns converted.
pub fn coerce_to_integer(table: &mut Table, columns: &[&str]) -> Result<usize> {
    let mut converted = 0;
    for name in columns {
        let Some(index) = table.column_index(name) else {
            debug!("integer column '{}' not in table, skipping", name);
            continue;
        };
        for cell in table.column_values_mut(index) {
            match cell {
                Cell::Null | Cell::Int(_) => {}
                Cell::Float(f) if f.fract() == 0.0 && f.abs() <= i64::MAX as f64 => {
                    let whole = *f as i64;
                    *cell = Cell::Int(whole);
                }
                Cell::Float(f) => {
                    return Err(Error::NonIntegral {
                        column: name.to_string(),
                        value: *f,
                    });
                }
                Cell::Str(s) => {
                    return Err(Error::TypeMismatch {
                        column: name.to_string(),
                        value: s.clone(),
                    });
                }
            }
        }
        converted += 1;
    }
    Ok(converted)
}
