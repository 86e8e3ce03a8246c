use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("keycase").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn stdin_to_stdout() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["--style", "camel", "--format", "compact"])
        .write_stdin(r#"{"records": [{"record_id": 1}]}"#)
        .assert()
        .success()
        .stdout("{\"records\":[{\"recordId\":1}]}\n");
}

#[test]
fn invalid_style_rejected() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["--style", "screaming"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(contains("screaming"));
}

#[test]
fn in_place_rewrites_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("user.json");
    fs::write(&path, r#"{"firstName": "Alice"}"#).unwrap();

    cmd(&dir)
        .args(["-s", "snake", "-f", "compact", "--in-place", "--no-color"])
        .arg(&path)
        .assert()
        .success()
        .stderr(contains("1 file rewritten"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\"first_name\":\"Alice\"}\n"
    );
}

#[test]
fn json_lines_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.jsonl");
    fs::write(&path, "{\"event_id\":1}\n{\"EventId\":2}\n").unwrap();

    cmd(&dir)
        .args(["--style", "kebab"])
        .arg(&path)
        .assert()
        .success()
        .stdout("{\"event-id\":1}\n{\"event-id\":2}\n");
}

#[test]
fn check_reports_files_needing_rename() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.json");
    let bad = dir.path().join("bad.json");
    fs::write(&good, r#"{"userId": 1}"#).unwrap();
    fs::write(&bad, r#"{"user_id": 1}"#).unwrap();

    cmd(&dir)
        .args(["--style", "camel", "--check", "--no-color"])
        .arg(&good)
        .arg(&bad)
        .assert()
        .code(1)
        .stderr(contains("bad.json"))
        .stderr(contains("1 file of 2 would be rewritten"));

    assert_eq!(fs::read_to_string(&bad).unwrap(), r#"{"user_id": 1}"#);
}

#[test]
fn check_passes_when_already_styled() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ok.json");
    fs::write(&path, r#"{"user_id": {"display_name": "x"}}"#).unwrap();

    cmd(&dir)
        .args(["--style", "snake", "--check", "--no-color"])
        .arg(&path)
        .assert()
        .success()
        .stderr(contains("All keys already match"));
}

#[test]
fn local_config_sets_style() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".keycase.toml"), "style = \"pascal\"\nindent = 4\n").unwrap();

    cmd(&dir)
        .write_stdin(r#"{"first_name": "Alice"}"#)
        .assert()
        .success()
        .stdout("{\n    \"FirstName\": \"Alice\"\n}\n");
}

#[test]
fn missing_file_is_reported_and_fails() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["--no-color", "missing.json"])
        .assert()
        .code(1)
        .stderr(contains("file not found"))
        .stderr(contains("1 file of 1 could not be processed"));
}

#[test]
fn in_place_continues_past_malformed_file() {
    let dir = TempDir::new().unwrap();
    let broken = dir.path().join("broken.json");
    let good = dir.path().join("good.json");
    fs::write(&broken, "{not json").unwrap();
    fs::write(&good, r#"{"user_id": 1}"#).unwrap();

    cmd(&dir)
        .args(["-s", "camel", "-f", "compact", "--in-place", "--no-color"])
        .arg(&broken)
        .arg(&good)
        .assert()
        .code(1)
        .stderr(contains("broken.json"))
        .stderr(contains("Failed to parse JSON"))
        .stderr(contains("1 file rewritten out of 2"))
        .stderr(contains("1 file of 2 could not be processed"));

    assert_eq!(fs::read_to_string(&broken).unwrap(), "{not json");
    assert_eq!(fs::read_to_string(&good).unwrap(), "{\"userId\":1}\n");
}

#[test]
fn in_place_leaves_styled_file_alone() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("styled.json");
    fs::write(&path, "{\"user_id\":{\"display_name\":\"x\"}}\n").unwrap();
    let before = fs::metadata(&path).unwrap().modified().unwrap();

    cmd(&dir)
        .args(["-s", "snake", "-f", "compact", "--in-place", "--no-color"])
        .arg(&path)
        .assert()
        .success()
        .stderr(contains("No files needed rewriting!"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\"user_id\":{\"display_name\":\"x\"}}\n"
    );
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), before);
}

#[test]
fn malformed_json_fails() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(contains("Failed to parse JSON"));
}
