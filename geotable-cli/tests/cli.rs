//! Tests that drive the built `geotable` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const DESTINATION: &str = "src/ui/world_map/world.rs";

fn geotable(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_geotable"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn geotable")
}

fn convert(input: &str) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.txt"), input).unwrap();

    let output = geotable(dir.path(), &["data.txt"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let generated = fs::read_to_string(dir.path().join(DESTINATION)).unwrap();
    (dir, generated)
}

#[test]
fn test_writes_fixed_destination() {
    let (_dir, generated) = convert("1.0 2.0\n3.5 -4.25\n");

    assert!(generated
        .starts_with("/// [Source data](http://www.gnuplotting.org/plotting-the-world-revisited)\n\n"));
    assert!(generated.ends_with(
        "pub static WORLD_HIGH_RESOLUTION: [(f64, f64); 2] = [\n    (1.0, 2.0),\n    (3.5, -4.25),\n];\n"
    ));
}

#[test]
fn test_malformed_line_skipped() {
    let (_dir, generated) = convert("1.0 2.0\nmalformed\n3.0 4.0\n");

    assert!(generated.contains("; 2] = [\n    (1.0, 2.0),\n    (3.0, 4.0),\n];\n"));
}

#[test]
fn test_empty_input() {
    let (_dir, generated) = convert("");

    assert!(generated.ends_with("[(f64, f64); 0] = [\n];\n"));
}

#[test]
fn test_extra_field_dropped() {
    let (_dir, generated) = convert("1.0 2.0 extra_field\n");

    assert!(generated.contains("    (1.0, 2.0),\n"));
    assert!(!generated.contains("extra_field"));
}

#[test]
fn test_summary_on_stdout() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.txt"), "1 2\nbad\n3 4\n").unwrap();

    let output = geotable(dir.path(), &["data.txt"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Wrote 2 coordinate pairs"));
    assert!(stdout.contains("(skipped: 1)"));
}

#[test]
fn test_repeat_runs_are_identical() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.txt"), "1 2\n3 4 5\n").unwrap();

    assert!(geotable(dir.path(), &["data.txt"]).status.success());
    let first = fs::read(dir.path().join(DESTINATION)).unwrap();
    assert!(geotable(dir.path(), &["data.txt"]).status.success());
    let second = fs::read(dir.path().join(DESTINATION)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_argument_is_usage_error() {
    let dir = TempDir::new().unwrap();

    let output = geotable(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
    assert!(!dir.path().join(DESTINATION).exists());
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();

    let output = geotable(dir.path(), &["does_not_exist.txt"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Error: failed to read input does_not_exist.txt"));
    assert!(!dir.path().join(DESTINATION).exists());
}

#[test]
fn test_unwritable_destination() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.txt"), "1 2\n").unwrap();
    // A file where the output directory tree should go
    fs::write(dir.path().join("src"), "").unwrap();

    let output = geotable(dir.path(), &["data.txt"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("failed to write output"));
}
