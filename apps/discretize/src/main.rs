//! discretize — AIS trajectories to a discrete state/action dataset.
//!
//! Reads `config.yaml`, collects the matching `AIS_yyyy_mm_ZoneNN.csv`
//! files, discretizes every vessel track onto the configured grid, and
//! writes the transition CSV plus `meta_data.yaml`.

mod cli;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use aisd_io::{collect_csv_files, load_records_csv, CsvSink, CsvTransitionWriter, RunConfig, RunMeta};
use aisd_pipeline::PipelineBuilder;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    // 1. Config.
    let config = RunConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let options = &config.options;

    // 2. Input files.
    let input_dir = config.input_dir();
    let files = collect_csv_files(&input_dir, options, &config.meta_params)
        .with_context(|| format!("scanning {}", input_dir.display()))?;
    if files.is_empty() {
        warn!(dir = %input_dir.display(), "no input files matched");
    }

    // 3. Records.
    let t0 = Instant::now();
    let mut records = Vec::new();
    for file in &files {
        let batch = load_records_csv(&file.path, options.row_limit())
            .with_context(|| format!("reading {}", file.path.display()))?;
        info!(file = %file.name, rows = batch.len(), "read");
        records.extend(batch);
    }

    // 4. Discretize into the output file.
    let pipeline = PipelineBuilder::new(options.clone())
        .grid(config.grid_params)
        .build()?;

    let out_path = config.output_file();
    let writer = CsvTransitionWriter::new(&out_path, options.append_coords)
        .with_context(|| format!("creating {}", out_path.display()))?;
    let mut sink = CsvSink::new(writer);
    let summary = pipeline.run(records, &mut sink)?;
    if let Some(e) = sink.take_error() {
        return Err(e).with_context(|| format!("writing {}", out_path.display()));
    }

    // 5. Metadata.
    RunMeta::new(&config, &files, &summary.grid)
        .write(&cli.meta)
        .with_context(|| format!("writing {}", cli.meta.display()))?;

    info!(
        files = files.len(),
        records_in = summary.records_in,
        records_filtered = summary.records_filtered,
        entities = summary.normalize.entities_seen,
        trajectories = summary.normalize.entities_kept,
        transitions = summary.transitions,
        rows = summary.rows,
        elapsed_s = t0.elapsed().as_secs_f64(),
        output = %out_path.display(),
        "run complete"
    );
    Ok(())
}
