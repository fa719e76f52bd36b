mod common;

use std::path::Path;
use std::process::{Command, Output, Stdio};

use common::write_template;
use tempfile::TempDir;

fn kiln(template: &Path, output: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kiln"))
        .arg("--no-input")
        .arg("--no-git")
        .arg("-t")
        .arg(template)
        .arg("-o")
        .arg(output)
        .args(extra)
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

#[test]
fn test_success_prints_project_name_last() {
    let template = TempDir::new().unwrap();
    write_template(template.path());
    let out = TempDir::new().unwrap();

    let output = kiln(template.path(), out.path(), &["shop"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().last(), Some("PROJECT_NAME=shop"));
    assert!(stdout.contains("Next steps:"));
    assert!(out.path().join("shop/app/main.py").is_file());
}

#[test]
fn test_existing_target_fails() {
    let template = TempDir::new().unwrap();
    write_template(template.path());
    let out = TempDir::new().unwrap();

    assert!(kiln(template.path(), out.path(), &["shop"]).status.success());
    let output = kiln(template.path(), out.path(), &["shop"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("already exists"), "stderr: {stderr}");
    assert!(!String::from_utf8(output.stdout).unwrap().contains("PROJECT_NAME="));
    assert!(out.path().join("shop/app/main.py").is_file());
}

#[test]
fn test_invalid_option_fails_without_creating_target() {
    let template = TempDir::new().unwrap();
    write_template(template.path());
    let out = TempDir::new().unwrap();

    let output = kiln(template.path(), out.path(), &["--set", "dev_environment=kubernetes", "shop"]);

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("kubernetes"));
    assert!(!out.path().join("shop").exists());
}

#[test]
fn test_docker_disabled_succeeds() {
    let template = TempDir::new().unwrap();
    write_template(template.path());
    let out = TempDir::new().unwrap();

    let output = kiln(template.path(), out.path(), &["--set", "include_docker=no", "shop"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().last(), Some("PROJECT_NAME=shop"));
    assert!(!out.path().join("shop/docker-compose.yml").exists());
}
