//! Integration tests for aisd-io.

use std::path::Path;

use tempfile::TempDir;

use aisd_core::{GridConfig, RunOptions};

use crate::{IoError, MetaParams};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn touch(dir: &Path, rel: &str) {
    let path = dir.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "MMSI,LON,LAT,BaseDateTime\n").unwrap();
}

const AIS_CSV: &str = "\
MMSI,BaseDateTime,LAT,LON,SOG,VesselName
366999712,2020-01-01T00:00:02,0.1,0.1,1.0,ALPHA
366999712,2020-01-01T00:01:02,0.1,1.9,1.2,ALPHA
366999712,2020-01-01T00:02:02,1.9,1.9,0.9,ALPHA
";

#[cfg(test)]
mod discover {
    use aisd_core::RunOptions;

    use super::*;
    use crate::{collect_csv_files, parse_file_meta, zone_bounds, FileMeta};

    #[test]
    fn parses_ais_file_names() {
        assert_eq!(
            parse_file_meta("AIS_2020_01_Zone10.csv"),
            Some(FileMeta { year: 2020, month: 1, zone: 10 })
        );
        assert_eq!(
            parse_file_meta("AIS_2019_12_Zone03.csv"),
            Some(FileMeta { year: 2019, month: 12, zone: 3 })
        );
        assert_eq!(parse_file_meta("notes.csv"), None);
        assert_eq!(parse_file_meta("AIS_2020_01_Zone10.txt"), None);
        assert_eq!(parse_file_meta("AIS_xx_01_Zone10.csv"), None);
    }

    #[test]
    fn zone_bounds_six_degree_bands() {
        assert_eq!(zone_bounds(1), (-180.0, -174.0));
        assert_eq!(zone_bounds(10), (-126.0, -120.0));
        assert_eq!(zone_bounds(60), (174.0, 180.0));
        assert_eq!(zone_bounds(61), zone_bounds(1));
        assert_eq!(zone_bounds(0), (174.0, 180.0));
    }

    #[test]
    fn collects_recursively_sorted() {
        let dir = tmp();
        touch(dir.path(), "b/AIS_2020_02_Zone11.csv");
        touch(dir.path(), "a/AIS_2020_01_Zone10.csv");
        touch(dir.path(), "a/deeper/AIS_2019_12_Zone10.csv");
        touch(dir.path(), "readme.txt");

        let files = collect_csv_files(dir.path(), &RunOptions::default(), &MetaParams::default()).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["AIS_2020_01_Zone10.csv", "AIS_2019_12_Zone10.csv", "AIS_2020_02_Zone11.csv"]);
    }

    #[test]
    fn unparsable_names_are_skipped() {
        let dir = tmp();
        touch(dir.path(), "AIS_2020_01_Zone10.csv");
        touch(dir.path(), "summary.csv");
        let files = collect_csv_files(dir.path(), &RunOptions::default(), &MetaParams::default()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn time_and_zone_windows() {
        let dir = tmp();
        for name in [
            "AIS_2019_12_Zone10.csv",
            "AIS_2020_01_Zone10.csv",
            "AIS_2020_03_Zone10.csv",
            "AIS_2020_04_Zone10.csv",
            "AIS_2020_02_Zone12.csv",
        ] {
            touch(dir.path(), name);
        }
        let window = MetaParams {
            min_year:  2020,
            max_year:  2020,
            min_month: 1,
            max_month: 3,
            min_zone:  10,
            max_zone:  11,
        };

        let time_only = RunOptions { bound_time: true, ..RunOptions::default() };
        let files = collect_csv_files(dir.path(), &time_only, &window).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["AIS_2020_01_Zone10.csv", "AIS_2020_02_Zone12.csv", "AIS_2020_03_Zone10.csv"]);

        let both = RunOptions { bound_time: true, bound_zone: true, ..RunOptions::default() };
        let files = collect_csv_files(dir.path(), &both, &window).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.meta.zone == 10));
    }

    #[test]
    fn missing_root_is_io_error() {
        let dir = tmp();
        let err = collect_csv_files(&dir.path().join("nope"), &RunOptions::default(), &MetaParams::default());
        assert!(matches!(err, Err(IoError::Io(_))));
    }
}

#[cfg(test)]
mod source {
    use std::io::Cursor;

    use aisd_core::Coord;

    use super::*;
    use crate::{load_records_csv, load_records_reader, parse_timestamp};

    #[test]
    fn parses_timestamp_variants() {
        assert_eq!(parse_timestamp("1970-01-01T00:01:00"), Some(60.0));
        assert_eq!(parse_timestamp("1970-01-01 00:01:00"), Some(60.0));
        assert_eq!(parse_timestamp("1970-01-01T00:00:01.5"), Some(1.5));
        assert_eq!(parse_timestamp("42.25"), Some(42.25));
        assert_eq!(parse_timestamp("2020-01-01T00:00:00"), Some(1_577_836_800.0));
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn reads_named_columns_only() {
        let recs = load_records_reader(Cursor::new(AIS_CSV), Path::new("mem"), None).unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].entity_id, "366999712");
        assert_eq!(recs[1].coord, Coord::new(1.9, 0.1));
        assert_eq!(recs[1].timestamp.0 - recs[0].timestamp.0, 60.0);
    }

    #[test]
    fn row_cap_applies() {
        let recs = load_records_reader(Cursor::new(AIS_CSV), Path::new("mem"), Some(2)).unwrap();
        assert_eq!(recs.len(), 2);
    }

    #[test]
    fn bad_timestamp_is_data_error() {
        let text = "MMSI,LON,LAT,BaseDateTime\n1,0.0,0.0,2020-01-01T00:00:00\n1,0.0,0.0,not-a-time\n";
        let err = load_records_reader(Cursor::new(text), Path::new("bad.csv"), None).unwrap_err();
        match err {
            IoError::Data { row, path, .. } => {
                assert_eq!(row, 2);
                assert_eq!(path, Path::new("bad.csv"));
            }
            other => panic!("expected data error, got {other:?}"),
        }
    }

    #[test]
    fn bad_coordinate_is_data_error() {
        let text = "MMSI,LON,LAT,BaseDateTime\n1,east,0.0,2020-01-01T00:00:00\n";
        let err = load_records_reader(Cursor::new(text), Path::new("bad.csv"), None).unwrap_err();
        assert!(matches!(err, IoError::Data { row: 1, .. }));
    }

    #[test]
    fn missing_column_is_data_error() {
        let text = "MMSI,LON,BaseDateTime\n1,0.0,2020-01-01T00:00:00\n";
        let err = load_records_reader(Cursor::new(text), Path::new("bad.csv"), None).unwrap_err();
        assert!(matches!(err, IoError::Data { .. }));
    }

    #[test]
    fn reads_from_disk() {
        let dir = tmp();
        let path = dir.path().join("AIS_2020_01_Zone10.csv");
        std::fs::write(&path, AIS_CSV).unwrap();
        assert_eq!(load_records_csv(&path, None).unwrap().len(), 3);
    }
}

#[cfg(test)]
mod config {
    use super::*;
    use crate::RunConfig;

    const YAML: &str = "\
options:
  bound_lon: true
  bound_lat: false
  min_states: 3
  interp_actions: true
  allow_diag: false
  append_coords: true
  bound_time: true
directories:
  in_dir_path: data/
  in_dir_data: raw/
  out_dir_path: out/
  out_dir_file: processed.csv
meta_params:
  min_year: 2020
  max_year: 2021
  min_month: 6
  max_month: 2
grid_params:
  min_lon: -126.0
  max_lon: -120.0
  grid_len: 0.25
";

    #[test]
    fn loads_sections_with_defaults() {
        let c = RunConfig::from_yaml_str(YAML).unwrap();
        assert!(c.options.bound_lon);
        assert!(!c.options.allow_diag);
        assert_eq!(c.options.min_states, 3);
        assert_eq!(c.options.coord_precision, RunOptions::default().coord_precision);
        assert_eq!(c.meta_params.max_zone, 60);
        assert_eq!(c.grid_params.grid_len, 0.25);
        assert_eq!(c.grid_params.min_lat, GridConfig::default().min_lat);
        assert_eq!(c.input_dir(), Path::new("data/raw/"));
        assert_eq!(c.output_file(), Path::new("out/processed.csv"));
    }

    #[test]
    fn rejects_invalid_values() {
        let bad_grid = YAML.replace("grid_len: 0.25", "grid_len: -1.0");
        assert!(matches!(RunConfig::from_yaml_str(&bad_grid), Err(IoError::Config(_))));

        let bad_min = YAML.replace("min_states: 3", "min_states: 1");
        assert!(matches!(RunConfig::from_yaml_str(&bad_min), Err(IoError::Config(_))));

        let reversed = YAML.replace("max_year: 2021", "max_year: 2019");
        assert!(matches!(RunConfig::from_yaml_str(&reversed), Err(IoError::Config(_))));

        let crossed = YAML.replace("max_lon: -120.0", "max_lon: -130.0");
        assert!(matches!(RunConfig::from_yaml_str(&crossed), Err(IoError::Config(_))));
    }

    #[test]
    fn zone_window_longitude_band() {
        let window = MetaParams { min_zone: 10, max_zone: 11, ..MetaParams::default() };
        assert_eq!(window.zone_lon_range(), Some((-126.0, -114.0)));
        assert_eq!(MetaParams { min_zone: 12, max_zone: 11, ..window }.zone_lon_range(), None);
        assert_eq!(MetaParams { max_zone: 61, ..window }.zone_lon_range(), None);
    }

    #[test]
    fn fixed_longitude_must_overlap_zone_window() {
        let zoned = YAML.replace("  bound_time: true", "  bound_time: true\n  bound_zone: true")
            .replace("  max_month: 2", "  max_month: 2\n  min_zone: 10\n  max_zone: 10");
        // -126..-120 is exactly zone 10.
        RunConfig::from_yaml_str(&zoned).unwrap();

        let elsewhere = zoned.replace("min_zone: 10", "min_zone: 15").replace("max_zone: 10", "max_zone: 16");
        assert!(matches!(RunConfig::from_yaml_str(&elsewhere), Err(IoError::Config(_))));

        // Inferred longitude is never checked against the zones.
        let inferred = elsewhere.replace("bound_lon: true", "bound_lon: false");
        RunConfig::from_yaml_str(&inferred).unwrap();
    }

    #[test]
    fn malformed_yaml_is_yaml_error() {
        assert!(matches!(RunConfig::from_yaml_str("options: [1, 2"), Err(IoError::Yaml(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tmp();
        assert!(matches!(RunConfig::load(&dir.path().join("config.yaml")), Err(IoError::Io(_))));
    }
}

#[cfg(test)]
mod output {
    use aisd_core::{ActionId, Coord, SequenceId, StateId, TransitionRecord};
    use aisd_grid::{Bounds, GridParameters};
    use aisd_pipeline::TransitionSink;

    use super::*;
    use crate::writer::TransitionWriter;
    use crate::{CsvSink, CsvTransitionWriter, DiscoveredFile, FileMeta, RunConfig, RunMeta};

    fn row(from: i64, action: i64, to: i64, coord: Option<Coord>) -> TransitionRecord {
        TransitionRecord {
            sequence_id: SequenceId(0),
            from_state:  StateId(from),
            action:      ActionId(action),
            to_state:    StateId(to),
            coord,
        }
    }

    fn read_all(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr
            .records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect();
        (headers, rows)
    }

    #[test]
    fn header_without_coords() {
        let dir = tmp();
        let path = dir.path().join("out.csv");
        let mut w = CsvTransitionWriter::new(&path, false).unwrap();
        w.write_rows(&[row(0, 1, 1, None), row(1, -1, -1, None)]).unwrap();
        w.finish().unwrap();

        let (headers, rows) = read_all(&path);
        assert_eq!(headers, ["sequence_id", "from_state_id", "action_id", "to_state_id"]);
        assert_eq!(rows, [["0", "0", "1", "1"], ["0", "1", "-1", "-1"]]);
        assert_eq!(w.rows_written(), 2);
    }

    #[test]
    fn header_with_coords_and_nested_dir() {
        let dir = tmp();
        let path = dir.path().join("nested/out.csv");
        let mut w = CsvTransitionWriter::new(&path, true).unwrap();
        w.write_rows(&[row(0, 1, 1, Some(Coord::new(0.1, 0.1))), row(1, -1, -1, Some(Coord::new(1.9, 1.9)))])
            .unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let (headers, rows) = read_all(&path);
        assert_eq!(headers, ["sequence_id", "from_state_id", "action_id", "to_state_id", "lon", "lat"]);
        assert_eq!(rows[1], ["0", "1", "-1", "-1", "1.9", "1.9"]);
    }

    #[test]
    fn sink_forwards_and_finishes() {
        let dir = tmp();
        let path = dir.path().join("out.csv");
        let mut sink = CsvSink::new(CsvTransitionWriter::new(&path, false).unwrap());
        sink.on_trajectory(&[row(0, 1, 1, None), row(1, -1, -1, None)]);
        sink.on_trajectory(&[row(2, 3, 4, None), row(4, -1, -1, None)]);
        sink.on_finish();
        assert!(sink.take_error().is_none());
        assert_eq!(sink.rows(), 4);
        assert_eq!(read_all(&path).1.len(), 4);
    }

    #[test]
    fn sink_keeps_first_error() {
        struct Failing(u32);

        impl TransitionWriter for Failing {
            fn write_rows(&mut self, _rows: &[TransitionRecord]) -> crate::IoResult<()> {
                self.0 += 1;
                Err(IoError::Config(format!("write {}", self.0)))
            }

            fn finish(&mut self) -> crate::IoResult<()> {
                Ok(())
            }
        }

        let mut sink = CsvSink::new(Failing(0));
        sink.on_trajectory(&[row(0, 1, 1, None)]);
        sink.on_trajectory(&[row(0, 1, 1, None)]);
        sink.on_finish();
        match sink.take_error() {
            Some(IoError::Config(msg)) => assert_eq!(msg, "write 1"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(sink.take_error().is_none());
        assert_eq!(sink.into_writer().0, 1);
    }

    #[test]
    fn meta_round_trips_through_yaml() {
        let dir = tmp();
        let config = RunConfig::from_yaml_str(
            "directories:\n  in_dir_path: in/\n  out_dir_path: out/\n  out_dir_file: t.csv\n",
        )
        .unwrap();
        let grid = GridParameters::new(Bounds { min_lon: -89.0, max_lon: -88.0, min_lat: 30.0, max_lat: 31.0 }, 0.5)
            .unwrap();
        let files = vec![DiscoveredFile {
            path: dir.path().join("AIS_2020_01_Zone16.csv"),
            name: "AIS_2020_01_Zone16.csv".into(),
            meta: FileMeta { year: 2020, month: 1, zone: 16 },
        }];

        let meta = RunMeta::new(&config, &files, &grid);
        assert_eq!(meta.directories.in_dir_path, "out/");
        assert_eq!(meta.directories.in_dir_data, "t.csv");
        assert_eq!(meta.grid_params.num_cols, 2);
        assert_eq!(meta.grid_params.num_rows, 2);

        let path = dir.path().join("meta_data.yaml");
        meta.write(&path).unwrap();
        assert_eq!(RunMeta::load(&path).unwrap(), meta);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("all_files_meta:"));
        assert!(text.contains("AIS_2020_01_Zone16.csv:"));
    }
}
