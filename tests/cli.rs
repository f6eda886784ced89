//! Integration tests for the `movie_insights` binary: exit codes and output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

const HEADER: &str = "id,imdb_id,popularity,budget,revenue,original_title,cast,homepage,director,tagline,keywords,overview,runtime,genres,production_companies,release_date,vote_count,vote_average,release_year,budget_adj,revenue_adj";

const ROWS: [&str; 4] = [
    "1,tt1,2.5,10,100,Alpha,Cast A,,Ann,tag,space|war,ov,120,Action|Drama,Lucas|Fox,5/25/77,100,7.5,1977,10.0,100.0",
    "2,tt2,1.0,50,30,Beta,Cast B,,Bob,tag,love,ov,100,Drama,Fox,1/1/10,50,5.0,2010,50.0,30.0",
    "3,tt3,0.5,0,40,Gamma,Cast C,,Ann,tag,heist,ov,90,Crime,Fox,3/3/99,10,6.0,1999,0.0,40.0",
    "5,tt5,4.0,5,80,Epsilon,Cast E,,Ann,tag,space|robot,ov,110,Action|Science Fiction,Lucas,6/9/66,20,7.0,1966,5.0,80.0",
];

/// Path to the compiled binary
fn bin() -> String {
    env!("CARGO_BIN_EXE_movie_insights").to_string()
}

/// Run the CLI and return (stdout, stderr, success).
fn run_cli(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(bin())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to execute movie_insights with args {:?}: {}", args, e));
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn write_fixture(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("tmdb-movies.csv");
    let mut body = String::from(HEADER);
    for row in ROWS {
        body.push('\n');
        body.push_str(row);
    }
    body.push('\n');
    fs::write(&path, body).unwrap();
    path
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

#[test]
fn missing_input_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.csv");
    let out = dir.path().join("out");

    let (_, stderr, success) = run_cli(&[
        "--color",
        "false",
        "run",
        "--input",
        path_str(&input),
        "--output",
        path_str(&out),
    ]);

    assert!(!success, "run against a missing file should fail");
    assert!(
        stderr.contains("Input file not found"),
        "stderr should name the failure, got: {stderr}"
    );
    assert!(!out.join("report.json").exists());
}

#[test]
fn run_writes_every_report_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir);
    let out = dir.path().join("report");

    let (stdout, stderr, success) = run_cli(&[
        "--color",
        "false",
        "run",
        "--input",
        path_str(&input),
        "--top-n",
        "2",
        "--output",
        path_str(&out),
    ]);

    assert!(success, "run failed: {stderr}");
    assert!(stdout.contains("Wrote 10 files"), "stdout: {stdout}");
    assert!(stdout.contains("Most profit:  Alpha"), "stdout: {stdout}");
    assert_eq!(fs::read_dir(&out).unwrap().count(), 10);
    assert!(out.join("report.json").is_file());
    assert!(out.join("director_popularity.csv").is_file());
}

#[test]
fn global_flags_follow_the_subcommand() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir);
    let out = dir.path().join("report");

    let (_, stderr, success) = run_cli(&[
        "run",
        "-v",
        "--color",
        "false",
        "--input",
        path_str(&input),
        "--output",
        path_str(&out),
    ]);

    assert!(success, "run -v failed: {stderr}");
    // debug events are only emitted with --verbose
    assert!(stderr.contains("Wrote"), "stderr: {stderr}");
}

#[test]
fn profile_lists_numeric_columns() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir);

    let (stdout, stderr, success) =
        run_cli(&["--color", "false", "profile", "--input", path_str(&input)]);

    assert!(success, "profile failed: {stderr}");
    assert!(stdout.contains("Rows: 4"), "stdout: {stdout}");
    assert!(stdout.contains("Numeric columns: "), "stdout: {stdout}");
    assert!(stdout.contains("budget_adj"), "stdout: {stdout}");
}
