use log::LevelFilter;
use prettylog::{Severity, build_config};
use tempfile::TempDir;

#[test]
fn builder_wires_console_and_three_file_tiers() {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let log_file = tmp.path().join("logs").join("app.log");

    let config = build_config(&log_file, Severity::Info, true).expect("Failed to build config");

    let mut names: Vec<&str> = config.appenders().iter().map(|a| a.name()).collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec!["console", "debug_file", "error_file", "info_file"]
    );

    // Root admits everything; per-appender thresholds do the filtering.
    assert_eq!(config.root().level(), LevelFilter::Debug);
    assert_eq!(config.root().appenders().len(), 4);
}

#[test]
fn parent_directory_is_created_eagerly() {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let log_file = tmp.path().join("deeply").join("nested").join("app.log");
    assert!(!log_file.parent().unwrap().exists());

    build_config(&log_file, Severity::Warning, false).expect("Failed to build config");

    assert!(log_file.parent().unwrap().is_dir());
}

#[test]
fn file_tiers_do_not_depend_on_console_threshold() {
    for console_level in [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ] {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let log_file = tmp.path().join("app.log");

        let config =
            build_config(&log_file, console_level, false).expect("Failed to build config");

        let file_appenders = config
            .appenders()
            .iter()
            .filter(|a| a.name().ends_with("_file"))
            .count();
        assert_eq!(file_appenders, 3, "console level {console_level}");
    }
}

#[test]
fn colour_flag_accepted_either_way() {
    for colour in [true, false] {
        let tmp = TempDir::new().expect("Failed to create temp dir");
        let log_file = tmp.path().join("app.log");
        build_config(&log_file, Severity::Info, colour).expect("Failed to build config");
    }
}
