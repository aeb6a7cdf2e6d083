use std::fs;
use tempfile::TempDir;

use docsearch_core::artifact::{load_artifact, locate_artifact, read_artifact};
use docsearch_core::config::Config;
use docsearch_core::Error;

const ARTIFACT: &str = r#"{"config":{"lang":["en"],"separator":"[\\s\\-]+","pipeline":["stopWordFilter"]},"docs":[{"location":"index.html","title":"Home","text":"<p>burgers equation</p>"}]}"#;

#[test]
fn locate_prefers_json_over_script() {
    let tmp = TempDir::new().unwrap();
    let search_dir = tmp.path().join("search");
    fs::create_dir_all(&search_dir).unwrap();
    fs::write(search_dir.join("search_index.js"), format!("var __index = {};", ARTIFACT)).unwrap();
    fs::write(search_dir.join("search_index.json"), ARTIFACT).unwrap();

    let found = locate_artifact(tmp.path()).expect("locate");
    assert_eq!(found.file_name().and_then(|n| n.to_str()), Some("search_index.json"));
}

#[test]
fn locate_falls_back_to_script() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("search_index.js"), format!("var __index = {}", ARTIFACT)).unwrap();

    let (path, artifact) = load_artifact(tmp.path()).expect("load");
    assert!(path.ends_with("search_index.js"));
    assert_eq!(artifact.docs.len(), 1);
    assert_eq!(artifact.docs[0].title, "Home");
}

#[test]
fn empty_site_dir_is_not_found() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("index.html"), "<html></html>").unwrap();
    assert!(matches!(locate_artifact(tmp.path()), Err(Error::NotFound(_))));
}

#[test]
fn reading_missing_file_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = read_artifact(&tmp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn reading_corrupt_file_is_malformed() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("search_index.json");
    fs::write(&path, "{\"docs\": [").unwrap();
    assert!(read_artifact(&path).unwrap_err().is_malformed());
}

#[test]
fn config_layers_env_file_over_base() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "[index]\npath = \"public/search\"\n\n[search]\ndefault_limit = 5\n",
    )
    .unwrap();
    fs::write(tmp.path().join("config.test.toml"), "[server]\nport = 9123\n").unwrap();

    let config = Config::load_for_env(tmp.path(), "test").expect("config");
    let settings = config.settings().expect("settings");
    assert_eq!(settings.index.path, "public/search");
    assert_eq!(settings.search.default_limit, 5);
    // untouched keys keep their defaults
    assert_eq!(settings.search.max_limit, 100);
    assert_eq!(settings.server.port, 9123);
    assert_eq!(config.get::<u16>("server.port").unwrap(), 9123);
}

#[test]
fn config_without_files_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    let settings = Config::load_for_env(tmp.path(), "prod").unwrap().settings().unwrap();
    assert_eq!(settings.server.host, "127.0.0.1");
    assert!(settings.search.prefix_match);
}

#[test]
fn invalid_limits_are_rejected_at_load() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[search]\ndefault_limit = 0\n").unwrap();
    assert!(matches!(Config::load_for_env(tmp.path(), "dev"), Err(Error::InvalidConfig(_))));
}
