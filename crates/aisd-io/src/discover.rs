//! Input file discovery.
//!
//! AIS exports are named `AIS_yyyy_mm_ZoneNN.csv`.  The year, month, and
//! UTM zone are read from the name and used to keep only the files inside
//! the configured window.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use aisd_core::RunOptions;

use crate::{IoResult, MetaParams};

/// Year, month, and zone parsed from an input file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub year:  u32,
    pub month: u32,
    pub zone:  u32,
}

/// A CSV file that passed the discovery filters.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    /// Bare file name, the key used in `meta_data.yaml`.
    pub name: String,
    pub meta: FileMeta,
}

/// Parse `…_yyyy_mm_ZoneNN.csv`.  The last three `_`-separated fields carry
/// the year, the month, and the zone (last two digits of the final field's
/// stem).  Returns `None` for any other shape.
pub fn parse_file_meta(file_name: &str) -> Option<FileMeta> {
    let stem = file_name.strip_suffix(".csv")?;
    let mut fields = stem.rsplit('_');
    let zone_field = fields.next()?;
    let month = fields.next()?.parse().ok()?;
    let year = fields.next()?.parse().ok()?;

    let digits = zone_field.len().checked_sub(2).and_then(|i| zone_field.get(i..))?;
    let zone = digits.parse().ok()?;

    Some(FileMeta { year, month, zone })
}

/// Longitude range `(min, min + 6)` of UTM zone `zone`.  Zones wrap every 60.
///
/// Used by [`MetaParams::zone_lon_range`] to check fixed longitude bounds
/// against the zone window.
pub fn zone_bounds(zone: i32) -> (f64, f64) {
    let min_lon = 6.0 * f64::from((zone - 1).rem_euclid(60)) - 180.0;
    (min_lon, min_lon + 6.0)
}

/// Recursively collect every `*.csv` under `root` whose name parses and
/// whose metadata falls inside `window` (when `bound_time` / `bound_zone`
/// are set).  The result is sorted by path.
pub fn collect_csv_files(root: &Path, options: &RunOptions, window: &MetaParams) -> IoResult<Vec<DiscoveredFile>> {
    let mut paths = Vec::new();
    walk_csv(root, &mut paths)?;
    paths.sort();

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        let Some(meta) = parse_file_meta(&name) else {
            warn!(file = %path.display(), "skipping CSV file with unrecognized name");
            continue;
        };
        if options.bound_time && !window.contains_month(meta.year, meta.month) {
            debug!(file = %name, "outside time window");
            continue;
        }
        if options.bound_zone && !window.contains_zone(meta.zone) {
            debug!(file = %name, "outside zone window");
            continue;
        }
        files.push(DiscoveredFile { path, name, meta });
    }

    info!(root = %root.display(), files = files.len(), "input files discovered");
    Ok(files)
}

fn walk_csv(dir: &Path, out: &mut Vec<PathBuf>) -> IoResult<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_csv(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "csv") {
            out.push(path);
        }
    }
    Ok(())
}
