//! The `meta_data.yaml` written after a run.
//!
//! It records which files were read, the options used, where the output
//! went (as the *input* directories of a follow-up stage), and the final
//! grid, so the dataset can be decoded later.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use aisd_core::RunOptions;
use aisd_grid::GridParameters;

use crate::{Directories, DiscoveredFile, FileMeta, IoResult, RunConfig};

/// Input directories for the next stage: this run's output location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaDirectories {
    pub in_dir_path: String,
    pub in_dir_data: String,
}

/// The frozen grid plus its derived row count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMeta {
    pub min_lon:  f64,
    pub max_lon:  f64,
    pub min_lat:  f64,
    pub max_lat:  f64,
    pub grid_len: f64,
    pub num_cols: i64,
    pub num_rows: i64,
}

impl From<&GridParameters> for GridMeta {
    fn from(g: &GridParameters) -> Self {
        Self {
            min_lon:  g.min_lon,
            max_lon:  g.max_lon,
            min_lat:  g.min_lat,
            max_lat:  g.max_lat,
            grid_len: g.grid_len,
            num_cols: g.num_cols,
            num_rows: g.num_rows(),
        }
    }
}

/// The whole `meta_data.yaml` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMeta {
    /// File name → year/month/zone, sorted by name.
    pub all_files_meta: BTreeMap<String, FileMeta>,
    pub options:        RunOptions,
    pub directories:    MetaDirectories,
    pub grid_params:    GridMeta,
}

impl RunMeta {
    pub fn new(config: &RunConfig, files: &[DiscoveredFile], grid: &GridParameters) -> Self {
        let Directories { out_dir_path, out_dir_file, .. } = &config.directories;
        Self {
            all_files_meta: files.iter().map(|f| (f.name.clone(), f.meta)).collect(),
            options:        config.options.clone(),
            directories:    MetaDirectories {
                in_dir_path: out_dir_path.clone(),
                in_dir_data: out_dir_file.clone(),
            },
            grid_params:    GridMeta::from(grid),
        }
    }

    pub fn to_yaml_string(&self) -> IoResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    pub fn write(&self, path: &Path) -> IoResult<()> {
        std::fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }

    pub fn load(path: &Path) -> IoResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml_ng::from_str(&text)?)
    }
}
