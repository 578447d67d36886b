use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use unitgen_cli::commands::templates::Framework;
use unitgen_cli::config::{ScaffoldConfig, CONFIG_FILE};
use unitgen_cli::ScaffoldError;

#[test]
fn defaults() {
    let config = ScaffoldConfig::default();
    assert_eq!(config.default_framework, Framework::Vue);
    assert_eq!(config.src_dir, PathBuf::from("src"));
    assert_eq!(config.routes_file, PathBuf::from("src/router/routes.js"));
}

#[test]
fn missing_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(ScaffoldConfig::load(tmp.path()).unwrap(), ScaffoldConfig::default());
}

#[test]
fn empty_file_gives_defaults() {
    assert_eq!(
        ScaffoldConfig::from_yaml_str("\n").unwrap(),
        ScaffoldConfig::default()
    );
}

#[test]
fn partial_file_keeps_other_defaults() {
    let config = ScaffoldConfig::from_yaml_str("default_framework: react\n").unwrap();
    assert_eq!(config.default_framework, Framework::React);
    assert_eq!(config.src_dir, PathBuf::from("src"));
}

#[test]
fn full_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(CONFIG_FILE),
        "default_framework: react\nsrc_dir: app\nroutes_file: app/router/index.js\n",
    )
    .unwrap();

    let config = ScaffoldConfig::load(tmp.path()).unwrap();
    assert_eq!(config.default_framework, Framework::React);
    assert_eq!(config.src_dir, PathBuf::from("app"));
    assert_eq!(config.routes_file, PathBuf::from("app/router/index.js"));
}

#[test]
fn unknown_framework_is_an_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(CONFIG_FILE), "default_framework: svelte\n").unwrap();

    let err = ScaffoldConfig::load(tmp.path()).unwrap_err();
    assert!(matches!(err, ScaffoldError::Config { .. }));
    assert!(err.to_string().contains("Invalid config file"));
}

#[test]
fn unknown_key_is_an_error() {
    assert!(ScaffoldConfig::from_yaml_str("routes: src/routes.js\n").is_err());
}

#[test]
fn absolute_routes_file_is_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(CONFIG_FILE),
        "routes_file: /etc/router/routes.js\n",
    )
    .unwrap();

    let err = ScaffoldConfig::load(tmp.path()).unwrap_err();
    assert!(matches!(
        err,
        ScaffoldError::ConfigPath {
            key: "routes_file",
            ..
        }
    ));
}

#[test]
fn parent_dir_in_src_dir_is_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(CONFIG_FILE), "src_dir: ../shared/src\n").unwrap();

    let err = ScaffoldConfig::load(tmp.path()).unwrap_err();
    assert!(err.to_string().contains("src_dir must be a relative path"));
}

#[test]
fn dot_prefixed_paths_are_accepted() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(CONFIG_FILE),
        "src_dir: ./app\nroutes_file: ./app/router/index.js\n",
    )
    .unwrap();

    let config = ScaffoldConfig::load(tmp.path()).unwrap();
    assert_eq!(config.escaping_path(), None);
    assert_eq!(config.src_dir, PathBuf::from("./app"));
}
