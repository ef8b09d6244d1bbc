//! surveyclean CLI
//!
//! Batch cleaner for ESS climate survey CSV exports

mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use surveyclean_core::{
    clean_file, load_variables_reference, CleanOptions, CleanReport, DuplicatePolicy,
};
use surveyclean_formats::read_table;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::JobConfig;

#[derive(Parser)]
#[command(name = "surveyclean")]
#[command(version, about = "Batch cleaning for ESS climate survey tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output the run report in JSON format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the cleaning pipeline on a survey CSV
    Clean {
        /// Input CSV file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output CSV file (omit to skip writing)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Variables reference CSV, loaded for information only
        #[arg(long)]
        variables: Option<PathBuf>,

        /// Keep the first copy of duplicated rows instead of dropping every copy
        #[arg(long)]
        keep_first: bool,

        /// Compute the report without writing output
        #[arg(long)]
        dry_run: bool,

        /// Job file with paths and policy (TOML or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show the first rows of a CSV file
    Inspect {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Number of rows to show
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Count rows and columns in a CSV file
    Count {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_ansi(!cli.json) // Disable colors if JSON output
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Clean {
            input,
            output,
            variables,
            keep_first,
            dry_run,
            config,
        } => {
            clean(input, output, variables, keep_first, dry_run, config, cli.json)?;
        }
        Commands::Inspect { input, limit } => {
            inspect(&input, limit)?;
        }
        Commands::Count { input } => {
            count(&input)?;
        }
    }

    Ok(())
}

fn clean(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    variables: Option<PathBuf>,
    keep_first: bool,
    dry_run: bool,
    config: Option<PathBuf>,
    json_output: bool,
) -> Result<()> {
    let job = match config {
        Some(path) => JobConfig::load(&path)?,
        None => JobConfig::default(),
    };

    // Explicit flags override the job file
    let input = input.unwrap_or(job.input);
    let output = output.or(job.output);
    let variables = variables.or(job.variables);
    let keep_first = keep_first || job.keep_first;

    let options = CleanOptions {
        duplicate_policy: if keep_first {
            DuplicatePolicy::KeepFirst
        } else {
            DuplicatePolicy::DropAll
        },
    };

    info!("Starting survey clean");
    info!("  Input: {:?}", input);
    if !dry_run {
        if let Some(ref path) = output {
            info!("  Output: {:?}", path);
        }
    }

    if let Some(ref path) = variables {
        let _ = load_variables_reference(path)?;
    }

    let write_to = if dry_run { None } else { output.as_deref() };
    let (_table, report) = clean_file(&input, write_to, &options)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&input, write_to, &report);
    }

    Ok(())
}

fn print_report(input: &Path, output: Option<&Path>, report: &CleanReport) {
    println!();
    println!("Clean complete");
    println!("  Input:              {}", input.display());
    if let Some(path) = output {
        println!("  Output:             {}", path.display());
    }
    println!(
        "  Rows:               {} -> {}",
        report.rows_loaded, report.rows_final
    );
    println!(
        "  Columns:            {} -> {}",
        report.columns_loaded, report.columns_final
    );
    println!("  Duplicates dropped: {}", report.duplicate_rows_dropped);
    println!("  Columns renamed:    {}", report.columns_renamed);
    println!(
        "  Columns recoded:    {}",
        report.columns_labelled + report.columns_bucketed
    );
    println!("  Retention:          {:.1}%", report.retention_rate());
}

fn inspect(input: &Path, limit: usize) -> Result<()> {
    let table = read_table(input)?;
    println!("{}", table.columns().join(","));
    for row in table.rows().take(limit) {
        let fields: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        println!("{}", fields.join(","));
    }
    Ok(())
}

fn count(input: &Path) -> Result<()> {
    let table = read_table(input)?;
    println!("{} rows, {} columns", table.n_rows(), table.n_columns());
    Ok(())
}
