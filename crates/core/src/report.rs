//! Run statistics for a cleaning pass

use serde::Serialize;

/// Counters collected while cleaning one table
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanReport {
    /// Rows in the loaded table
    pub rows_loaded: usize,
    /// Columns in the loaded table
    pub columns_loaded: usize,
    /// Metadata columns removed
    pub metadata_columns_dropped: usize,
    /// Rows removed by deduplication
    pub duplicate_rows_dropped: usize,
    /// Columns converted to nullable integers
    pub columns_coerced: usize,
    /// Columns renamed to descriptive names
    pub columns_renamed: usize,
    /// Columns recoded with categorical labels
    pub columns_labelled: usize,
    /// Columns recoded into ordinal buckets
    pub columns_bucketed: usize,
    /// Rows in the final table
    pub rows_final: usize,
    /// Columns in the final table
    pub columns_final: usize,
}

impl CleanReport {
    /// Share of input rows surviving the clean, as a percentage
    pub fn retention_rate(&self) -> f64 {
        if self.rows_loaded == 0 {
            0.0
        } else {
            (self.rows_final as f64 / self.rows_loaded as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retention_rate() {
        let report = CleanReport {
            rows_loaded: 200,
            rows_final: 150,
            ..CleanReport::default()
        };
        assert_eq!(report.retention_rate(), 75.0);
    }

    #[test]
    fn test_retention_rate_empty_table() {
        assert_eq!(CleanReport::default().retention_rate(), 0.0);
    }
}
