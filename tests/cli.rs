use assert_cmd::Command;
use tempfile::TempDir;

#[allow(deprecated)]
fn analyze_cmd() -> Command {
    Command::cargo_bin("analyze").unwrap()
}

/// Empty hub cache and an endpoint nothing listens on, so model loading
/// fails fast without touching the network.
fn offline_cmd(cache: &TempDir) -> Command {
    let mut cmd = analyze_cmd();
    cmd.env("HF_HOME", cache.path())
        .env("HF_ENDPOINT", "http://127.0.0.1:9");
    cmd
}

#[test]
fn unreachable_hub_is_a_load_fault() {
    let cache = TempDir::new().unwrap();
    let output = offline_cmd(&cache).arg("hola").output().unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to load sentiment model"), "stderr: {stderr}");
}

// The model is acquired before the arguments are read, so with no argument
// and no model the load fault wins.
#[test]
fn no_argument_without_model_reports_load_fault() {
    let cache = TempDir::new().unwrap();
    let output = offline_cmd(&cache).output().unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to load sentiment model"), "stderr: {stderr}");
    assert!(!stderr.contains("missing text argument"), "stderr: {stderr}");
}

#[test]
#[ignore = "downloads model weights"]
fn no_argument_fails_without_output() {
    let output = analyze_cmd().output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("missing text argument"), "stderr: {stderr}");
}

#[test]
#[ignore = "downloads model weights"]
fn prints_label_and_score() {
    let output = analyze_cmd()
        .arg("Me encanta este producto")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);

    let (label, score) = lines[0].rsplit_once(' ').unwrap();
    assert!(label.ends_with("star") || label.ends_with("stars"));
    let score: f32 = score.parse().unwrap();
    assert!((0.0..=1.0).contains(&score));
}

#[test]
#[ignore = "downloads model weights"]
fn empty_argument_is_not_missing() {
    let output = analyze_cmd().arg("").output().unwrap();
    assert_ne!(output.status.code(), Some(2));
}

#[test]
#[ignore = "downloads model weights"]
fn double_dash_is_classified() {
    let output = analyze_cmd().arg("--").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
}
