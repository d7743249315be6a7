use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn massup() -> Command {
    Command::cargo_bin("massup").unwrap()
}

fn write_template(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("template.txt");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    massup()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn too_many_arguments_prints_usage_and_fails() {
    massup()
        .args(["a.txt", "b.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn missing_template_file_fails() {
    massup()
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read template"));
}

#[test]
fn print_resolves_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(&dir, "name = World\nprint Hello <%name%>\n");

    massup()
        .arg(template)
        .assert()
        .success()
        .stdout("Hello World\n");
}

#[test]
fn save_writes_resolved_file() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(
        &dir,
        "name = out.txt\ncontent = Hi\nsave <%content%> to <%name%>\n",
    );

    massup()
        .arg(template)
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!("Hi", fs::read_to_string(dir.path().join("out.txt")).unwrap());
}

#[test]
fn foreach_expands_once_per_value() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(
        &dir,
        "foreach color = red,green,blue\nprint <%color%> / <%COLOR%>\n",
    );

    massup()
        .arg(template)
        .assert()
        .success()
        .stdout("red / RED\ngreen / GREEN\nblue / BLUE\n");
}

#[test]
fn foreach_saves_one_file_per_value() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(
        &dir,
        concat!(
            "foreach color = red,green\n",
            "label.red = Stop\n",
            "label.green = Go\n",
            "save <%label%> to <%color%>.txt\n",
        ),
    );

    massup()
        .arg(template)
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(
        "Stop",
        fs::read_to_string(dir.path().join("red.txt")).unwrap()
    );
    assert_eq!(
        "Go",
        fs::read_to_string(dir.path().join("green.txt")).unwrap()
    );
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let template = write_template(&dir, "save data to missing/out.txt\n");

    massup()
        .arg(template)
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not write"));
}
