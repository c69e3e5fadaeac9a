use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn plotregion() -> Command {
    Command::cargo_bin("plotregion").unwrap()
}

#[test]
fn renders_points_with_title() {
    let file = csv("x,y,ey\n1,2,0.5\n2,4,0.5\n3,9,1\n");
    plotregion()
        .args(["render", "--title", "Squares", "--width", "80", "--height", "20"])
        .arg("--points")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Squares"));
}

#[test]
fn renders_function_legend() {
    plotregion()
        .args(["render", "--function", "G:1,0,1", "--width", "90", "--height", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("G:1,0,1"));
}

#[test]
fn one_region_per_input_unless_overlaid() {
    let file = csv("1\n2\n2\n3\n");
    plotregion()
        .args(["render", "--function", "P1", "--bins", "3"])
        .arg("--hist")
        .arg(file.path())
        .args(["--columns", "1", "--rows", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("do not fit"));

    plotregion()
        .args(["render", "--function", "P1", "--bins", "3", "--overlay"])
        .arg("--hist")
        .arg(file.path())
        .args(["--width", "90", "--height", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("P1"));
}

#[test]
fn bad_limits_are_rejected() {
    plotregion()
        .args(["render", "--function", "E", "--x-limits", "5,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid x limits"));
}

#[test]
fn missing_file_is_reported() {
    plotregion()
        .args(["render", "--points", "/no/such/points.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open file"));
}

#[test]
fn bad_codelet_is_reported() {
    plotregion()
        .args(["render", "--function", "Q:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid function codelet"));
}

#[test]
fn oversized_polynomial_degree_is_reported() {
    for codelet in ["P4000000000", "P18446744073709551615"] {
        plotregion()
            .args(["render", "--function", codelet])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid function codelet"));
    }
}
