//! Configuration loading and merging tests.

use clap::Parser;
use covtrack::api::Metric;
use covtrack::cli::args::Args;
use covtrack::cli::config;
use std::fs;

fn args_with_config(path: &std::path::Path) -> Args {
    let path = path.display().to_string();
    Args::parse_from(["covtrack", "--config", path.as_str()])
}

#[test]
fn test_explicit_config_file_is_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
            [general]
            metric = "deaths"

            [api]
            endpoint = "http://localhost:9000/covid"
            history_days = 14

            [display]
            rows = 5
            map = false
        "#,
    )
    .expect("write config");

    let args = args_with_config(&path);
    let loaded = config::load(&args).expect("config loads");
    assert_eq!(loaded.general.metric, "deaths");
    assert_eq!(loaded.api.endpoint, "http://localhost:9000/covid");
    assert_eq!(loaded.api.history_days, 14);
    assert_eq!(loaded.display.rows, 5);
    assert!(!loaded.display.map);
    // Unspecified values keep their defaults.
    assert!(loaded.display.graph);

    let merged = config::merge_config(&args, loaded).expect("config merges");
    assert_eq!(merged.metric, Metric::Deaths);
    assert_eq!(merged.days, 14);
    assert_eq!(merged.rows, 5);
    assert!(!merged.show_map);
    assert!(merged.show_graph);
}

#[test]
fn test_flags_beat_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
            [general]
            metric = "deaths"

            [display]
            rows = 50
        "#,
    )
    .expect("write config");

    let path = path.display().to_string();
    let args = Args::parse_from([
        "covtrack",
        "--config",
        path.as_str(),
        "-m",
        "recovered",
        "-r",
        "3",
    ]);
    let loaded = config::load(&args).expect("config loads");
    let merged = config::merge_config(&args, loaded).expect("config merges");
    assert_eq!(merged.metric, Metric::Recovered);
    assert_eq!(merged.rows, 3);
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let args = Args::parse_from(["covtrack"]);
    let loaded = config::load(&args).expect("defaults load");
    let merged = config::merge_config(&args, loaded).expect("defaults merge");
    assert_eq!(merged.metric, Metric::Cases);
    assert_eq!(merged.days, 120);
    assert!(merged.country.is_none());
}

#[test]
fn test_invalid_metric_in_config_is_rejected_at_merge() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[general]\nmetric = \"hospitalized\"\n").expect("write config");

    let args = args_with_config(&path);
    let loaded = config::load(&args).expect("config loads");
    assert!(config::merge_config(&args, loaded).is_err());
}
