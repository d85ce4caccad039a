use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

const HEADER: &str = "course_name,credits,day,start_time,duration,room,lecturer\n";

fn write_table(dir: &Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("courses.csv");
    fs::write(&path, format!("{}{}", HEADER, body)).unwrap();
    path
}

fn planner() -> Command {
    let mut cmd = Command::cargo_bin("study-planner").unwrap();
    cmd.env_remove("PLANNER_MODE")
        .env_remove("PLANNER_THEME")
        .env_remove("PLANNER_USER")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn renders_static_svg() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(dir.path(), "Algorithms,5,Monday,09:00,90,Room 3,Dr. X\n");
    let output = dir.path().join("week.svg");

    planner()
        .arg(&input)
        .args(["--user", "Marieke", "--theme", "orange", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("week.svg"));

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Marieke's Study Timetable"));
    assert!(svg.contains("Algori"));
    assert!(svg.contains("orange"));
}

#[test]
fn interactive_mode_writes_html_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(dir.path(), "Algorithms,5,Monday,09:00,90,Room 3,Dr. X\n");

    planner()
        .arg(&input)
        .args(["--mode", "interactive"])
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("courses.html")).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains(r#""lecturer":"Dr. X""#));
}

#[test]
fn user_can_come_from_the_environment() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(dir.path(), "Algorithms,5,Monday,09:00,90,Room 3,Dr. X\n");

    planner()
        .arg(&input)
        .env("PLANNER_USER", "Chavez")
        .assert()
        .success();

    let svg = fs::read_to_string(dir.path().join("courses.svg")).unwrap();
    assert!(svg.contains("Chavez's Study Timetable"));
}

#[test]
fn dump_blocks_prints_geometry_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(
        dir.path(),
        "Algorithms,5,Monday,09:00,90,Room 3,Dr. X\n\
         Databases,5,Monday,08:00,120,Lab 2,Dr. Z\n",
    );

    planner()
        .arg(&input)
        .arg("--dump-blocks")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""weekday_slot": 1"#))
        .stdout(predicate::str::contains(r#""start_minutes": 540"#))
        .stdout(predicate::str::contains(r#""end_minutes": 630"#))
        .stdout(predicate::str::contains(r#""y_min": 360"#))
        .stdout(predicate::str::contains(r#""y_max": 750"#));

    assert!(!dir.path().join("courses.svg").exists());
}

#[test]
fn unknown_day_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(dir.path(), "Algorithms,5,Funday,09:00,90,Room 3,Dr. X\n");

    planner()
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Funday"));

    assert!(!dir.path().join("courses.svg").exists());
}

#[test]
fn header_only_table_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(dir.path(), "");

    planner()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no courses"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();

    planner()
        .arg(dir.path().join("missing.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.csv"));
}

#[test]
fn bad_canvas_size_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_table(dir.path(), "Algorithms,5,Monday,09:00,90,Room 3,Dr. X\n");

    planner()
        .arg(&input)
        .args(["--size", "big"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("big"));
}

#[test]
fn sample_template_renders() {
    let dir = tempfile::tempdir().unwrap();
    let template = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/planner_template.csv");
    let output = dir.path().join("template.svg");

    planner()
        .arg(&template)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(fs::read_to_string(&output).unwrap().contains("Linear"));
}
