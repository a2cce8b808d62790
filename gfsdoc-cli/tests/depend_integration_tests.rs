//! End-to-end tests for the gfsdoc-depend binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to run the binary from inside `dir` with quiet logging
fn depend_command(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gfsdoc-depend").unwrap();
    cmd.current_dir(dir)
        .env("RUST_LOG", "warn")
        .env_remove("GFSDOC_INVALID_EXAMPLES")
        .env_remove("GFSDOC_EXCLUDE_MARKER");
    cmd
}

fn write_example(dir: &Path, name: &str, header: &str) {
    let example = dir.join(name);
    fs::create_dir_all(&example).unwrap();
    fs::write(
        example.join(format!("{name}.gfs")),
        format!("{header}1 0 GfsSimulation GfsBox GfsGEdge {{}} {{}}\n"),
    )
    .unwrap();
}

#[test]
fn test_single_example_output() {
    let temp = TempDir::new().unwrap();
    write_example(
        temp.path(),
        "ex1",
        "# Title: Example one\n\
         # Required files: init.gfs S60-scaled.gts\n\
         # Generated files: ex1.mp4 tmp.dat\n",
    );

    let expected = "DOCS = \\\n\tex1/ex1.gfs.html\\\n\tex1/ex1.mp4\\\n\tex1/ex1.gfs\\\n\tex1/init.gfs\n\
                    \n\
                    EXTRA_DIST += \\\n\tex1/ex1.gfs\\\n\tex1/init.gfs\n\
                    \n\
                    examples.tex: \\\n\tex1/ex1.gfs\\\n\tex1/ex1.mp4\\\n\tex1/tmp.dat\n";

    depend_command(temp.path())
        .arg("ex1")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_tree_without_examples() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("doc/empty")).unwrap();

    depend_command(temp.path())
        .arg("doc")
        .assert()
        .success()
        .stdout("DOCS = \n\nEXTRA_DIST += \n\nexamples.tex: \n")
        .stderr(predicate::str::contains("Skipping directory"));
}

#[test]
fn test_xvpics_directories_are_ignored() {
    let temp = TempDir::new().unwrap();
    write_example(temp.path(), "ex", "# Generated files: ex.png\n");
    write_example(&temp.path().join("ex"), ".xvpics", "");

    depend_command(temp.path())
        .args(["--strict", "ex"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".xvpics").not());
}

#[test]
fn test_strict_mode_fails_on_invalid_directory() {
    let temp = TempDir::new().unwrap();
    write_example(temp.path(), "ex", "");

    depend_command(temp.path())
        .args(["--strict", "."])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_missing_root_fails_without_output() {
    let temp = TempDir::new().unwrap();
    write_example(temp.path(), "ex", "");

    depend_command(temp.path())
        .args(["ex", "missing"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn test_requires_at_least_one_root() {
    let temp = TempDir::new().unwrap();

    depend_command(temp.path()).assert().failure().code(2);
}

#[test]
fn test_config_file_changes_target() {
    let temp = TempDir::new().unwrap();
    write_example(temp.path(), "ex", "");
    fs::write(
        temp.path().join("gfsdoc.toml"),
        "depends_target = \"gallery.tex\"\n",
    )
    .unwrap();

    depend_command(temp.path())
        .args(["--config", "gfsdoc.toml", "ex"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("gallery.tex: \\\n\tex/ex.gfs\n"));
}

#[test]
fn test_env_policy_fails_on_invalid_directory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("notes")).unwrap();

    depend_command(temp.path())
        .env("GFSDOC_INVALID_EXAMPLES", "fail")
        .arg("notes")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_output_is_stable_across_runs() {
    let temp = TempDir::new().unwrap();
    write_example(temp.path(), "b", "# Generated files: b.ogv\n");
    write_example(temp.path(), "a", "# Required files: a.gts\n");

    let first = depend_command(temp.path()).args(["a", "b"]).output().unwrap();
    let second = depend_command(temp.path()).args(["a", "b"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
