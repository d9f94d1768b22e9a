//! `sm dirs` specs

use crate::prelude::*;

#[test]
fn dirs_reports_layout_under_app_dir() {
    let temp = Project::empty();
    let root = temp.root("");
    let root = root.to_string_lossy();
    temp.sm()
        .args(&["dirs"])
        .passes()
        .stdout_has(root.trim_end_matches('/'))
        .stdout_has("selenium");
    // Listing does not create anything
    assert!(!temp.exists("logs"));
}

#[test]
fn dirs_create_builds_standard_layout() {
    let temp = Project::empty();
    temp.sm().args(&["dirs", "--create"]).passes();
    for name in ["downloads", "logs", "scripts", "helpers"] {
        assert!(temp.root(name).is_dir(), "missing {name}");
    }
}

#[test]
fn dirs_json_names_every_entry() {
    let temp = Project::empty();
    let run = temp.sm().args(&["dirs", "-o", "json"]).passes();
    let names: Vec<String> = run
        .json()
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["root", "internal", "logs", "downloads", "driver"]);
}

#[test]
fn root_env_is_used_without_app_dir() {
    let temp = Project::empty();
    let root = temp.path().join("elsewhere");
    cli()
        .env("SM_ROOT_DIR", &root.to_string_lossy())
        .args(&["dirs"])
        .passes()
        .stdout_has("elsewhere");
}
