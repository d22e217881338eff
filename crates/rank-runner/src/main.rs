//! # rank-runner
//!
//! Ranks the keys of a JSON dataset by one numeric field.
//!
//! Loads a JSON configuration file, reads the dataset it points to (an object
//! mapping keys to arrays of numbers), selects the top or bottom entries along
//! the configured axis, and logs them together with the process memory usage.
//!
//! # Usage
//!
//! ```bash
//! rank-runner config.json --log-level info --count 5 --axis 1 --order ascend
//! ```

use std::path::{Path, PathBuf};

use ahash::AHashMap;
use anyhow::{Context, Result};
use clap::Parser;
use rank_core::Order;
use rank_core::select::{bottom_n, top_n};
use tracing::{info, warn};

/// Top-N / bottom-N ranking over a keyed dataset.
#[derive(Parser)]
#[command(name = "rank-runner", about = "Top-N / bottom-N ranking over a keyed dataset")]
struct Cli {
    /// Configuration file path (JSON).
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error). Overrides the config.
    #[arg(short, long)]
    log_level: Option<String>,

    /// Optional log directory for file output. Overrides the config.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Dataset path. Overrides the config.
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Number of keys to report.
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Record field to rank by.
    #[arg(short, long)]
    axis: Option<usize>,

    /// `descend` (largest first) or `ascend` (smallest first).
    #[arg(short, long)]
    order: Option<String>,
}

type Dataset = AHashMap<String, Vec<f64>>;

fn load_dataset(path: &Path) -> Result<Dataset> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading dataset {}", path.display()))?;
    let data: Dataset = serde_json::from_str(&content)
        .with_context(|| format!("parsing dataset {}", path.display()))?;
    Ok(data)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration
    let config = rank_core::config::load_config(&cli.config)
        .with_context(|| format!("loading config {}", cli.config.display()))?;

    // 2. Initialize logging
    let log_level = cli.log_level.as_deref().unwrap_or(config.logging.log_level());
    let log_dir = cli.log_dir.as_deref().or(config.logging.log_path.as_deref());
    rank_core::logging::init_logging(log_level, log_dir, config.logging.module_name());

    info!("rank-runner starting, config={}, log_level={log_level}", cli.config.display());

    // 3. Resolve selection parameters (CLI wins over config)
    let selection = &config.selection;
    let count = cli.count.unwrap_or_else(|| selection.count());
    let axis = cli.axis.unwrap_or_else(|| selection.axis());
    let order: Order = match cli.order.as_deref() {
        Some(name) => name.parse()?,
        None => selection.order()?,
    };
    let dataset_path = cli
        .dataset
        .as_deref()
        .or(selection.dataset.as_deref())
        .context("no dataset given (config `selection.dataset` or --dataset)")?;

    // 4. Load the dataset and rank it
    let data = load_dataset(dataset_path)?;
    info!("dataset loaded: {} key(s) from {}", data.len(), dataset_path.display());

    let (keys, values) = match order {
        Order::Descending => top_n(count, data.iter(), axis)?,
        Order::Ascending => bottom_n(count, data.iter(), axis)?,
    };

    let direction = match order {
        Order::Descending => "top",
        Order::Ascending => "bottom",
    };
    info!("{direction} {} key(s) by field {axis}", keys.len());
    for (rank, (key, value)) in keys.iter().zip(&values).enumerate() {
        info!("#{:<3} {key} = {value}", rank + 1);
    }

    // 5. Report resident memory; a failed probe is not fatal for the run
    match rank_core::memory::memory_usage() {
        Ok(mib) => info!("memory usage: {mib:.1} MiB"),
        Err(e) => warn!("memory probe failed: {e}"),
    }

    info!("done");
    Ok(())
}
