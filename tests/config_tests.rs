use std::fs;
use std::path::Path;
use tempfile::TempDir;
use logviz::config::config_manager::ConfigManager;
use logviz::enums::chart_kind::ChartKind;
use logviz::enums::label_order::LabelOrder;
use logviz::enums::severity::Severity;
use logviz::enums::source_kind::SourceKind;
use logviz::errors::LogvizError;
use logviz::services::log_sources::build_source;
use logviz::services::log_sources::sample_source::SampleSource;
use logviz::structs::config::config::Config;
use logviz::traits::log_source::LogSource;

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn empty_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "");

    let config = ConfigManager::load(Some(&path)).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.label_order, LabelOrder::FirstSeen);
    assert_eq!(config.input.source, SourceKind::Sample);
    assert_eq!(config.output.output_dir, "charts");
    assert!(config.output.save_plots);
    assert_eq!(config.output.files.donut, "error_distribution.html");
    assert_eq!(config.output.files.bar, "severity_comparison.html");
    assert_eq!(config.output.files.treemap, "category_analysis.html");
    assert_eq!(config.visualization.colors.for_severity(Severity::Error), "#ff6b6b");
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        r##"
label_order = "alphabetical"

[input]
source = "records"
path = "logs/records.jsonl"

[output]
output_dir = "out"
histograms = false

[output.files]
donut = "donut.html"

[visualization.colors]
warning = "#00aa00"
"##,
    );

    let config = ConfigManager::load(Some(&path)).unwrap();

    assert_eq!(config.label_order, LabelOrder::Alphabetical);
    assert_eq!(config.input.source, SourceKind::Records);
    assert_eq!(config.input.path.as_deref(), Some("logs/records.jsonl"));
    assert!(!config.output.histograms);
    assert!(config.output.save_plots);
    assert_eq!(config.output.files.donut, "donut.html");
    assert_eq!(config.output.files.treemap, "category_analysis.html");
    assert_eq!(config.visualization.colors.warning, "#00aa00");
    assert_eq!(config.visualization.colors.error, "#ff6b6b");
    assert_eq!(
        config.output.charts(),
        vec![ChartKind::Donut, ChartKind::Bar, ChartKind::Treemap]
    );
    assert!(config.output.path_for(ChartKind::Donut).ends_with("out/donut.html"));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    let error = ConfigManager::load(Some(&missing)).unwrap_err();
    assert!(matches!(error, LogvizError::ConfigurationFileError { .. }), "got {error:?}");
}

#[test]
fn invalid_toml_is_a_configuration_file_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "label_order = \"sideways\"\n");

    let error = ConfigManager::load(Some(&path)).unwrap_err();
    assert!(matches!(error, LogvizError::ConfigurationFileError { .. }), "got {error:?}");
}

#[test]
fn toml_errors_report_the_line() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "[output]\nsave_plots = true\noutput_dir = \n");

    match ConfigManager::load(Some(&path)).unwrap_err() {
        LogvizError::ConfigurationFileError { reason, .. } => {
            assert!(reason.contains("line 3"), "got {reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn default_config_is_valid() {
    assert_eq!(ConfigManager::validate_config(&Config::default()), Ok(()));
}

#[test]
fn validation_lists_every_problem() {
    let mut config = Config::default();
    config.input.source = SourceKind::Patterns;
    config.output.files.bar = config.output.files.donut.clone();
    config.output.files.treemap = "  ".to_string();
    config.visualization.colors.error = "red".to_string();

    let problems = ConfigManager::validate_config(&config).unwrap_err();

    assert_eq!(problems.len(), 4, "{problems:?}");
    assert!(problems.iter().any(|p| p.contains("input.path")));
    assert!(problems.iter().any(|p| p.contains("Duplicate output file name")));
    assert!(problems.iter().any(|p| p.contains("treemap")));
    assert!(problems.iter().any(|p| p.contains("colors.error")));
}

#[test]
fn validation_flags_missing_input_file() {
    let mut config = Config::default();
    config.input.source = SourceKind::Records;
    config.input.path = Some("/definitely/not/here.jsonl".to_string());

    let problems = ConfigManager::validate_config(&config).unwrap_err();
    assert_eq!(problems, vec!["Input file does not exist: /definitely/not/here.jsonl".to_string()]);
}

#[test]
fn sample_source_ignores_stale_input_path() {
    let mut config = Config::default();
    config.input.source = SourceKind::Sample;
    config.input.path = Some("does/not/exist.json".to_string());

    assert_eq!(ConfigManager::validate_config(&config), Ok(()));
    assert!(!build_source(&config.input).unwrap().read_records().unwrap().is_empty());
}

#[test]
fn sample_config_is_loadable_and_valid() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config").join("config.toml");

    let created = ConfigManager::create_sample_config(&config_path).unwrap();
    assert_eq!(created.len(), 2);
    assert!(created.iter().all(|path| path.exists()));

    let config = ConfigManager::load(Some(&config_path)).unwrap();
    assert_eq!(config.input.source, SourceKind::Patterns);
    assert_eq!(ConfigManager::validate_config(&config), Ok(()));

    let records = build_source(&config.input).unwrap().read_records().unwrap();
    assert_eq!(records, SampleSource::new().read_records().unwrap_or_default());
}

#[test]
fn sample_config_never_overwrites() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(dir.path(), "# mine\n");

    let error = ConfigManager::create_sample_config(&config_path).unwrap_err();

    assert!(matches!(error, LogvizError::FileOperationError { .. }));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "# mine\n");
    assert!(!dir.path().join("log_patterns.json").exists());
}
