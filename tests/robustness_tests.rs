use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

const HEADER: &str = "Launch Site,class,Payload Mass (kg),Booster Version Category";

#[test]
fn test_malformed_row_fails_fast() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "{HEADER}").unwrap();
    writeln!(csv, "A,1,500,v1.0").unwrap();
    // Text in payload field
    writeln!(csv, "A,1,heavy,v1.0").unwrap();

    let mut cmd = Command::new(cargo_bin!("launch-dashboard"));
    cmd.arg(csv.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid launch record at row 2"));
}

#[test]
fn test_invalid_class_fails_fast() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "{HEADER}").unwrap();
    writeln!(csv, "A,2,500,v1.0").unwrap();

    let mut cmd = Command::new(cargo_bin!("launch-dashboard"));
    cmd.arg(csv.path()).arg("summary");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid launch record at row 1"));
}

#[test]
fn test_missing_column_fails_fast() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "Launch Site,Payload Mass (kg),Booster Version Category").unwrap();
    writeln!(csv, "A,500,v1.0").unwrap();

    let mut cmd = Command::new(cargo_bin!("launch-dashboard"));
    cmd.arg(csv.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid launch record at row 1"));
}

#[test]
fn test_empty_dataset_is_rejected() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "{HEADER}").unwrap();

    let mut cmd = Command::new(cargo_bin!("launch-dashboard"));
    cmd.arg(csv.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Dataset has no launch records"));
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::new(cargo_bin!("launch-dashboard"));
    cmd.arg(dir.path().join("missing.csv"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_replay_skips_bad_events() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "{HEADER}").unwrap();
    writeln!(csv, "A,1,500,v1.0").unwrap();
    writeln!(csv, "B,0,7000,FT").unwrap();

    let mut script = tempfile::NamedTempFile::new().unwrap();
    writeln!(script, "zoom 3").unwrap();
    writeln!(script, "payload 6000").unwrap();
    writeln!(script, "site B").unwrap();

    let mut cmd = Command::new(cargo_bin!("launch-dashboard"));
    cmd.arg(csv.path()).arg("replay").arg(script.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading event"))
        .stderr(predicate::str::contains("line 2"))
        .stdout(predicate::str::contains(
            "# Total Success Launches By B\ngroup,count\nfailure,1\n",
        ));
}
