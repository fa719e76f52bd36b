use kiln::config::{get_config, parse_config, TemplateConfig};
use kiln::constants::{DEFAULT_BRANCH, DEFAULT_PROJECT_NAME};
use kiln::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = get_config(dir.path()).unwrap();

    assert_eq!(config, TemplateConfig::default());
    assert_eq!(config.default_name, DEFAULT_PROJECT_NAME);
    assert_eq!(config.branch, DEFAULT_BRANCH);
    assert!(config.defaults.is_empty());
}

#[test]
fn test_parse_json_config() {
    let config = parse_config(
        r#"{"default_name": "inventory", "defaults": {"include_admin": "no"}}"#,
    )
    .unwrap();

    assert_eq!(config.default_name, "inventory");
    assert_eq!(config.branch, DEFAULT_BRANCH);
    assert_eq!(config.defaults.get("include_admin").map(String::as_str), Some("no"));
}

#[test]
fn test_parse_yaml_config_keeps_order() {
    let config = parse_config(
        "branch: trunk\ncommit_message: \"Bootstrap {{ project_title }}\"\ndefaults:\n  include_testing: none\n  include_admin: \"no\"\n",
    )
    .unwrap();

    assert_eq!(config.branch, "trunk");
    assert_eq!(config.commit_message, "Bootstrap {{ project_title }}");
    let keys: Vec<&str> = config.defaults.keys().map(String::as_str).collect();
    assert_eq!(keys, ["include_testing", "include_admin"]);
}

#[test]
fn test_parse_invalid_config() {
    assert!(matches!(parse_config("branch: [unclosed"), Err(Error::ConfigError(_))));
    assert!(matches!(parse_config("unknown_key: 1"), Err(Error::ConfigError(_))));
}

#[test]
fn test_json_config_wins_over_yaml() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("kiln.json"), r#"{"branch": "from-json"}"#).unwrap();
    fs::write(dir.path().join("kiln.yaml"), "branch: from-yaml\n").unwrap();

    assert_eq!(get_config(dir.path()).unwrap().branch, "from-json");
}

#[test]
fn test_empty_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("kiln.yml"), "").unwrap();

    assert_eq!(get_config(dir.path()).unwrap(), TemplateConfig::default());
}
