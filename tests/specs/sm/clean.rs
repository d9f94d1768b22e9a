//! `sm clean` specs
//!
//! Each sweep is checked against a prepared application tree.

use crate::prelude::*;

fn populated() -> Project {
    let temp = Project::with_layout();
    temp.file("__pycache__/main.cpython-311.pyc", "");
    temp.file("scripts/__pycache__/job.cpython-311.pyc", "");
    temp.file("scripts/job.py", "print('hi')\n");
    temp.file("downloads/selenium/chromedriver", "");
    temp.file("downloads/export.csv", "a\n1\n");
    temp.file("downloads/open_tickets.CSV", "a\n1\n");
    temp.file("downloads/notes.txt", "keep\n");
    temp.file("logs/today.log", "line\n");
    temp
}

#[test]
fn clean_removes_caches_driver_and_csv() {
    let temp = populated();
    temp.sm()
        .args(&["clean"])
        .passes()
        .stdout_has("Removed cache")
        .stdout_has("Removed driver folder")
        .stdout_has("Removed csv");

    assert!(!temp.exists("__pycache__"));
    assert!(!temp.exists("scripts/__pycache__"));
    assert!(!temp.exists("downloads/selenium"));
    assert!(!temp.exists("downloads/export.csv"));
    assert!(!temp.exists("downloads/open_tickets.CSV"));
    assert_eq!(temp.read("scripts/job.py"), "print('hi')\n");
    assert_eq!(temp.read("downloads/notes.txt"), "keep\n");
    // Fresh logs survive the default 30 day window
    assert!(temp.exists("logs/today.log"));
}

#[test]
fn clean_keeps_driver_and_ignored_csv() {
    let temp = populated();
    temp.sm()
        .args(&["clean", "--keep-driver", "--ignore-csv", "TICKETS"])
        .passes()
        .stdout_has("Skipped csv")
        .stdout_lacks("Removed driver folder");

    assert!(temp.exists("downloads/selenium/chromedriver"));
    assert!(temp.exists("downloads/open_tickets.CSV"));
    assert!(!temp.exists("downloads/export.csv"));
}

#[test]
fn keep_driver_from_environment() {
    let temp = populated();
    temp.sm().env("SM_KEEP_DRIVER", "1").args(&["clean"]).passes();
    assert!(temp.exists("downloads/selenium"));
}

#[test]
fn zero_day_window_removes_existing_logs() {
    let temp = populated();
    temp.file("logs/2026/old.log", "line\n");
    temp.sm().args(&["clean", "--log-days", "0"]).passes().stdout_has("Removed log");

    assert!(!temp.exists("logs/today.log"));
    assert!(!temp.exists("logs/2026/old.log"));
    assert!(temp.root("logs/2026").is_dir());
}

#[test]
fn second_clean_is_a_noop() {
    let temp = populated();
    temp.sm().args(&["clean"]).passes();
    temp.sm().args(&["clean"]).passes().stdout_has("0 removed, 0 failed");
}

#[test]
fn clean_on_missing_root_does_nothing() {
    let temp = Project::empty();
    temp.sm().args(&["clean"]).passes().stdout_has("0 removed, 0 failed");
    assert!(!temp.exists(""));
}

#[test]
fn clean_json_report() {
    let temp = populated();
    let run = temp.sm().args(&["clean", "-o", "json"]).passes();
    let report = run.json();

    assert_eq!(report["driver_removed"], true);
    assert_eq!(report["caches"]["removed"].as_array().unwrap().len(), 2);
    assert_eq!(report["csv"]["removed"].as_array().unwrap().len(), 2);
    assert_eq!(report["logs"]["failed"], 0);
}

#[test]
fn driver_folder_failure_is_reported() {
    let temp = Project::with_layout();
    // A plain file where the driver folder is expected cannot be removed as a tree
    temp.file("downloads/selenium", "");
    temp.file("downloads/leftover.csv", "");

    temp.sm()
        .args(&["clean"])
        .fails()
        .exit_code(1)
        .stderr_has("failed to delete driver folder");
    // Remaining sweeps still ran
    assert!(!temp.exists("downloads/leftover.csv"));
}

#[test]
fn csv_failure_stops_sweep_with_partial_exit() {
    let temp = Project::with_layout();
    temp.file("downloads/a.csv", "");
    temp.dir("downloads/b.csv");
    temp.file("downloads/c.csv", "");

    temp.sm()
        .args(&["clean"])
        .fails()
        .exit_code(2)
        .stderr_has("1 item(s) could not be removed");
    assert!(!temp.exists("downloads/a.csv"));
    assert!(temp.exists("downloads/c.csv"));
}

#[test]
fn debug_mode_echoes_deletions() {
    let temp = populated();
    temp.sm().args(&["--debug", "clean"]).passes().stdout_has("[CleanUp Handler] Deleted");
}

#[test]
fn settings_file_sets_retention() {
    let temp = populated();
    let config = temp.path().join("settings.toml");
    std::fs::write(&config, "log_retention_days = 0\nkeep_downloaded_custom_driver = true\n")
        .unwrap();

    temp.sm().args(&["--config", &config.to_string_lossy(), "clean"]).passes();
    assert!(!temp.exists("logs/today.log"));
    assert!(temp.exists("downloads/selenium"));
}

#[test]
fn invalid_settings_file_fails() {
    let temp = populated();
    let config = temp.path().join("settings.toml");
    std::fs::write(&config, "log_retention_days = \"never\"\n").unwrap();

    temp.sm()
        .args(&["--config", &config.to_string_lossy(), "clean"])
        .fails()
        .stderr_has("invalid settings file");
    assert!(temp.exists("downloads/selenium"));
}

#[test]
fn caches_beside_the_executable_survive() {
    let temp = Project::with_layout();
    let tools = temp.path().join("tools");
    std::fs::create_dir_all(tools.join("other_project/__pycache__")).unwrap();
    std::fs::write(tools.join("other_project/__pycache__/mod.pyc"), "").unwrap();
    let program = tools.join("sm");
    // A hard link avoids exec racing an open write handle; copy across filesystems
    if std::fs::hard_link(sm_binary(), &program).is_err() {
        std::fs::copy(sm_binary(), &program).unwrap();
    }

    let app_dir = temp.path().to_string_lossy().into_owned();
    cli_at(&program)
        .args(&["--app-dir", &app_dir, "clean"])
        .passes()
        .stdout_lacks("other_project");
    assert!(tools.join("other_project/__pycache__/mod.pyc").exists());

    cli_at(&program).args(&["--app-dir", &app_dir, "dirs"]).passes().stdout_has("(not configured)");
}

#[test]
fn configured_internal_dir_is_swept() {
    let temp = Project::with_layout();
    let internal = temp.path().join("lib");
    std::fs::create_dir_all(internal.join("handlers/__pycache__")).unwrap();

    temp.sm()
        .env("SM_INTERNAL_DIR", &internal.to_string_lossy())
        .args(&["clean"])
        .passes()
        .stdout_has("Removed cache");
    assert!(!internal.join("handlers/__pycache__").exists());
    assert!(internal.join("handlers").is_dir());
}
