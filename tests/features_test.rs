use indexmap::IndexMap;
use kiln::answers::{apply_answers, parse_answers, parse_assignment, resolve_features};
use kiln::error::Error;
use kiln::features::{DevEnvironment, FeatureSelection, Testing, Toggle};
use serde_json::json;

#[test]
fn test_defaults() {
    let selection = FeatureSelection::default();
    assert_eq!(selection.include_user_model, Toggle::Yes);
    assert_eq!(selection.include_admin, Toggle::Yes);
    assert_eq!(selection.include_docker, Toggle::Yes);
    assert_eq!(selection.include_testing, Testing::Basic);
    assert_eq!(selection.include_github_actions, Toggle::No);
    assert_eq!(selection.dev_environment, DevEnvironment::FullDocker);
}

#[test]
fn test_set_accepts_aliases() {
    let mut selection = FeatureSelection::default();
    selection.set("development_environment", "local_development").unwrap();
    selection.set("include_testing", "pytest").unwrap();
    selection.set("include_docker", "No").unwrap();

    assert_eq!(selection.dev_environment, DevEnvironment::LocalDevelopment);
    assert_eq!(selection.include_testing, Testing::Basic);
    assert_eq!(selection.include_docker, Toggle::No);
}

#[test]
fn test_set_rejects_unknown_option() {
    let mut selection = FeatureSelection::default();
    let err = selection.set("include_graphql", "yes").unwrap_err();
    assert!(matches!(err, Error::UnknownOption { ref option } if option == "include_graphql"));
}

#[test]
fn test_set_rejects_unknown_value() {
    let mut selection = FeatureSelection::default();
    let err = selection.set("dev_environment", "kubernetes").unwrap_err();
    match err {
        Error::InvalidOption { option, value, expected } => {
            assert_eq!(option, "dev_environment");
            assert_eq!(value, "kubernetes");
            assert_eq!(expected, "full_docker, docker_db_local_app, local_development");
        }
        other => panic!("Expected InvalidOption, got {other:?}"),
    }
    assert_eq!(selection, FeatureSelection::default());
}

#[test]
fn test_docker_disabled_drops_compose() {
    let mut selection = FeatureSelection::default();
    selection.set("include_docker", "no").unwrap();
    assert_eq!(selection.dev_environment, DevEnvironment::FullDocker);
    assert!(!selection.writes_compose());

    selection.set("include_docker", "yes").unwrap();
    selection.set("dev_environment", "local_development").unwrap();
    assert!(!selection.writes_compose());

    selection.set("dev_environment", "docker_db_local_app").unwrap();
    assert!(selection.writes_compose());
}

#[test]
fn test_parse_assignment() {
    assert_eq!(
        parse_assignment("include_docker=no").unwrap(),
        ("include_docker".to_string(), "no".to_string())
    );
    assert!(parse_assignment("include_docker").is_err());
    assert!(parse_assignment("=no").is_err());
}

#[test]
fn test_parse_answers() {
    assert_eq!(parse_answers("").unwrap(), serde_json::Value::Null);
    assert_eq!(parse_answers(" {\"a\": \"b\"} ").unwrap(), json!({"a": "b"}));
    assert!(matches!(parse_answers("{\"a\":"), Err(Error::ConfigError(_))));
}

#[test]
fn test_apply_answers_maps_booleans() {
    let mut selection = FeatureSelection::default();
    apply_answers(
        &mut selection,
        &json!({"include_admin": false, "include_github_actions": true}),
    )
    .unwrap();

    assert_eq!(selection.include_admin, Toggle::No);
    assert_eq!(selection.include_github_actions, Toggle::Yes);
}

#[test]
fn test_apply_answers_rejects_non_object() {
    let mut selection = FeatureSelection::default();
    assert!(matches!(apply_answers(&mut selection, &json!([1, 2])), Err(Error::ConfigError(_))));
    assert!(apply_answers(&mut selection, &serde_json::Value::Null).is_ok());
}

#[test]
fn test_resolve_features_precedence() {
    let mut defaults = IndexMap::new();
    defaults.insert("include_admin".to_string(), "no".to_string());
    defaults.insert("dev_environment".to_string(), "local_development".to_string());
    let answers = json!({"dev_environment": "docker_db_local_app", "include_testing": "none"});
    let assignments = vec![("include_testing".to_string(), "basic".to_string())];

    let selection = resolve_features(&defaults, &answers, &assignments).unwrap();

    assert_eq!(selection.include_admin, Toggle::No);
    assert_eq!(selection.dev_environment, DevEnvironment::DockerDbLocalApp);
    assert_eq!(selection.include_testing, Testing::Basic);
}

#[test]
fn test_resolve_features_accepts_docker_disabled() {
    let assignments = vec![("include_docker".to_string(), "no".to_string())];
    let selection =
        resolve_features(&IndexMap::new(), &serde_json::Value::Null, &assignments).unwrap();

    assert_eq!(selection.include_docker, Toggle::No);
    assert_eq!(selection.dev_environment, DevEnvironment::FullDocker);
    assert_eq!(selection.include_user_model, Toggle::Yes);
}
