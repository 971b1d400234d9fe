use std::io::Write;
use std::path::PathBuf;
use temp_sweeper::config::Config;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn parse_complete_config_file() {
    let file = config_file(
        r#"
[sweep]
max_depth = 5
remove_empty_dirs = false
extra_temp_dirs = ["/var/tmp/build"]

[browsers]
enabled = ["chrome", "firefox"]
force = true

[report]
enabled = true
directory = "/var/log/temp-sweeper"
format = "json"

[system]
disk_warn_percent = 85
memory_warn_percent = 70
"#,
    );

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.sweep.max_depth, 5);
    assert!(!config.sweep.remove_empty_dirs);
    assert_eq!(config.sweep.extra_temp_dirs, vec![PathBuf::from("/var/tmp/build")]);
    assert_eq!(config.browsers.enabled, vec!["chrome", "firefox"]);
    assert!(config.browsers.force);
    assert!(config.report.enabled);
    assert_eq!(config.report.format, "json");
    assert_eq!(config.system.disk_warn_percent, 85);
}

#[test]
fn parse_partial_config_uses_defaults() {
    let file = config_file(
        r#"
[system]
memory_warn_percent = 95
"#,
    );

    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.system.memory_warn_percent, 95);
    assert_eq!(config.system.disk_warn_percent, 90);
    assert_eq!(config.sweep.max_depth, 3);
    assert!(config.sweep.remove_empty_dirs);
    assert_eq!(config.report.format, "text");
}

#[test]
fn empty_config_file_is_valid() {
    let file = config_file("");
    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.browsers.enabled.len(), 5);
}

#[test]
fn invalid_toml_fails() {
    let file = config_file("[sweep\nmax_depth = ");
    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(err.to_string().contains("parse"));
}

#[test]
fn out_of_range_threshold_fails() {
    let file = config_file("[system]\ndisk_warn_percent = 150\n");
    assert!(Config::load(Some(file.path())).is_err());
}

#[test]
fn unknown_browser_fails() {
    let file = config_file("[browsers]\nenabled = [\"lynx\"]\n");
    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(err.to_string().contains("lynx"));
}

#[test]
fn missing_explicit_file_fails() {
    assert!(Config::load(Some(std::path::Path::new("/nonexistent/config.toml"))).is_err());
}
