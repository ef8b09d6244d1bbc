//! Cell values for tabular survey data
//!
//! A `Cell` is one value in a table: missing, integer, float, or text.
//! Types are inferred at parse time from the raw CSV field.

use std::fmt;

/// A single table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing value (empty CSV field)
    Null,
    /// Whole number
    Int(i64),
    /// Floating-point number
    Float(f64),
    /// Free text
    Str(String),
}

impl Cell {
    /// Infer a cell from a raw CSV field
    ///
    /// Empty or whitespace-only fields are missing. Numeric fields become
    /// `Int` when they parse as a whole number, `Float` otherwise;
    /// everything else is kept as text verbatim.
    pub fn infer(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return Cell::Null;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Cell::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return Cell::Float(f);
        }
        Cell::Str(field.to_string())
    }

    /// Whether this cell is missing
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Integer view of this cell, if it holds one
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Text view of this cell, if it holds one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Append a canonical byte encoding of this cell for row hashing
    ///
    /// A type tag precedes the value so `Int(4)` and `Str("4")` never
    /// collide.
    pub fn write_canonical(&self, out: &mut Vec<u8>) {
        match self {
            Cell::Null => out.push(b'n'),
            Cell::Int(i) => {
                out.push(b'i');
                out.extend_from_slice(&i.to_le_bytes());
            }
            Cell::Float(f) => {
                out.push(b'f');
                out.extend_from_slice(&f.to_bits().to_le_bytes());
            }
            Cell::Str(s) => {
                out.push(b's');
                out.extend_from_slice(s.as_bytes());
            }
        }
    }
}

impl fmt::Display for Cell {
    /// Render the cell as a CSV output field; missing values are empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Str(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_integer() {
        assert_eq!(Cell::infer("4"), Cell::Int(4));
        assert_eq!(Cell::infer(" -12 "), Cell::Int(-12));
    }

    #[test]
    fn test_infer_float() {
        assert_eq!(Cell::infer("4.0"), Cell::Float(4.0));
        assert_eq!(Cell::infer("3.75"), Cell::Float(3.75));
    }

    #[test]
    fn test_infer_missing() {
        assert_eq!(Cell::infer(""), Cell::Null);
        assert_eq!(Cell::infer("   "), Cell::Null);
    }

    #[test]
    fn test_infer_text() {
        assert_eq!(Cell::infer("ESS8e02"), Cell::Str("ESS8e02".to_string()));
    }

    #[test]
    fn test_canonical_distinguishes_types() {
        let mut int_bytes = Vec::new();
        let mut str_bytes = Vec::new();
        Cell::Int(4).write_canonical(&mut int_bytes);
        Cell::Str("4".to_string()).write_canonical(&mut str_bytes);
        assert_ne!(int_bytes, str_bytes);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::Null.to_string(), "");
        assert_eq!(Cell::Int(7).to_string(), "7");
        assert_eq!(Cell::Str("Often".to_string()).to_string(), "Often");
    }
}
