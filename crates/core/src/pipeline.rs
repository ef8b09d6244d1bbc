//! Fixed-order cleaning pipeline
//!
//! Applies the static plan to one in-memory table: prune metadata,
//! deduplicate, coerce integer columns, rename, label, bucket. The first
//! error aborts the run; no output file is written on failure.

use crate::dedup::{drop_duplicate_rows, DuplicatePolicy};
use crate::plan;
use crate::report::CleanReport;
use crate::Result;
use std::path::Path;
use surveyclean_formats::{read_table, write_table, Table};
use surveyclean_transforms::{
    apply_labels, bucket_columns, coerce_to_integer, drop_columns, rename_columns,
};
use tracing::info;

/// Options for a cleaning run
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// How duplicated rows are removed
    pub duplicate_policy: DuplicatePolicy,
}

/// Clean an in-memory table in place, returning the run report
pub fn clean_table(table: &mut Table, options: &CleanOptions) -> Result<CleanReport> {
    let mut report = CleanReport {
        rows_loaded: table.n_rows(),
        columns_loaded: table.n_columns(),
        ..CleanReport::default()
    };
    info!(
        "cleaning table: {} rows, {} columns",
        report.rows_loaded, report.columns_loaded
    );

    report.metadata_columns_dropped = drop_columns(table, plan::METADATA_COLUMNS);
    info!(
        "dropped {} metadata columns, {} remain",
        report.metadata_columns_dropped,
        table.n_columns()
    );

    let outcome = drop_duplicate_rows(table, options.duplicate_policy);
    report.duplicate_rows_dropped = outcome.rows_dropped;
    info!("deduplicated: {} rows remain", table.n_rows());

    report.columns_coerced = coerce_to_integer(table, plan::INTEGER_COLUMNS)?;
    info!(
        "coerced {} columns to nullable integers",
        report.columns_coerced
    );

    report.columns_renamed = rename_columns(table, &plan::RENAME_MAP);
    info!("renamed {} columns", report.columns_renamed);

    for (column, labels) in [
        (plan::SAVING_FREQUENCY_COLUMN, &*plan::SAVING_FREQUENCY_LABELS),
        (plan::CLIMATE_BELIEF_COLUMN, &*plan::CLIMATE_BELIEF_LABELS),
    ] {
        if apply_labels(table, column, labels) {
            report.columns_labelled += 1;
        }
    }
    for column in plan::THOUGHT_EXTENT_COLUMNS {
        if apply_labels(table, column, &plan::THOUGHT_EXTENT_LABELS) {
            report.columns_labelled += 1;
        }
    }
    info!("labelled {} categorical columns", report.columns_labelled);

    report.columns_bucketed +=
        bucket_columns(table, plan::ENERGY_SHARE_COLUMNS, &plan::ENERGY_SHARE_BUCKETS);
    report.columns_bucketed +=
        bucket_columns(table, plan::SUPPLY_WORRY_COLUMNS, &plan::SUPPLY_WORRY_BUCKETS);
    report.columns_bucketed += bucket_columns(
        table,
        &[plan::CLIMATE_CAUSE_COLUMN],
        &plan::CLIMATE_CAUSE_BUCKETS,
    );
    report.columns_bucketed += bucket_columns(
        table,
        &[plan::CLIMATE_WORRY_COLUMN],
        &plan::CLIMATE_WORRY_BUCKETS,
    );
    report.columns_bucketed +=
        bucket_columns(table, plan::POLICY_STANCE_COLUMNS, &plan::POLICY_STANCE_BUCKETS);
    info!("bucketed {} ordinal columns", report.columns_bucketed);

    report.rows_final = table.n_rows();
    report.columns_final = table.n_columns();
    info!(
        "clean finished: {} rows, {} columns",
        report.rows_final, report.columns_final
    );
    Ok(report)
}

/// Clean a CSV file, optionally writing the result
///
/// The output file is only written after every stage has succeeded.
pub fn clean_file(
    input: &Path,
    output: Option<&Path>,
    options: &CleanOptions,
) -> Result<(Table, CleanReport)> {
    let mut table = read_table(input)?;
    let report = clean_table(&mut table, options)?;
    if let Some(path) = output {
        write_table(&table, path)?;
        info!("wrote cleaned table to {:?}", path);
    }
    Ok((table, report))
}

/// Load the variables reference sheet for information only
///
/// The sheet documents variable codes; its content plays no part in the
/// transformation.
pub fn load_variables_reference(path: &Path) -> Result<Table> {
    let table = read_table(path)?;
    info!(
        "variables reference: {} rows, {} columns",
        table.n_rows(),
        table.n_columns()
    );
    Ok(table)
}
