//! Whole-file CSV reader
//!
//! Loads a delimited file into an in-memory table with inferred cell
//! types. Gzip-compressed input is detected by the `.gz` extension.

use crate::{Cell, Error, Result, Table};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Configuration for CSV parsing
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Read a comma-delimited file into a table
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    read_table_with_config(path, &CsvConfig::default())
}

/// Read a delimited file into a table with custom parsing configuration
pub fn read_table_with_config<P: AsRef<Path>>(path: P, config: &CsvConfig) -> Result<Table> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(Error::Io(e)),
    };

    let extension = path.extension().and_then(|e| e.to_str());
    let reader: Box<dyn Read> = match extension {
        Some("gz") => {
            debug!("opening gzip-compressed CSV file: {:?}", path);
            Box::new(GzDecoder::new(file))
        }
        _ => {
            debug!("opening plain CSV file: {:?}", path);
            Box::new(file)
        }
    };

    from_reader(reader, config)
}

/// Read a table from any byte source
///
/// The first record is the header row; every data row must have the same
/// arity or parsing fails.
pub fn from_reader<R: Read>(reader: R, config: &CsvConfig) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
    let mut table = Table::new(headers);

    for record in csv_reader.records() {
        let record = record?;
        let row = record.iter().map(Cell::infer).collect();
        table.push_row(row)?;
    }

    Ok(table)
}
