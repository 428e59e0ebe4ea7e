//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "discretize")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run configuration (options, directories, meta_params, grid_params)
    #[arg(short, long, default_value = "config.yaml")]
    pub config: PathBuf,

    /// Where to write the run metadata
    #[arg(short, long, default_value = "meta_data.yaml")]
    pub meta: PathBuf,

    /// Enable debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}
