//! Basic CLI end-to-end tests.
//!
//! Each test runs the built binary against its own `$FOCUS_DIR` so no real
//! sessions or watchers are touched.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use tempfile::TempDir;

fn run_cli(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_focus"))
        .args(args)
        .current_dir(dir)
        .env("FOCUS_DIR", dir.join(".focus"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

/// Write an active session record and pointer without touching git.
fn seed_active_session(dir: &Path, id: &str, task: &str) {
    let focus = dir.join(".focus");
    std::fs::create_dir_all(focus.join("sessions")).unwrap();
    let record = serde_json::json!({
        "id": id,
        "task": task,
        "start_time": "2024-01-01T10:00:00Z",
        "timebox": "25m",
        "branch": "focus/seeded",
        "status": "active",
        "drifts": []
    });
    std::fs::write(
        focus.join("sessions").join(format!("{}.json", id)),
        serde_json::to_string_pretty(&record).unwrap(),
    )
    .unwrap();
    std::fs::write(focus.join("active"), id).unwrap();
}

fn read_record(dir: &Path, id: &str) -> serde_json::Value {
    let path = dir.join(".focus").join("sessions").join(format!("{}.json", id));
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_status_without_session_gives_guidance() {
    let dir = TempDir::new().unwrap();
    let (code, _stdout, stderr) = run_cli(dir.path(), &["status"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Run 'focus start' to begin"), "stderr: {}", stderr);
}

#[test]
fn test_list_on_empty_store() {
    let dir = TempDir::new().unwrap();
    let (code, stdout, _) = run_cli(dir.path(), &["list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("No focus sessions"));
}

#[test]
fn test_daemon_status_and_stop_when_not_running() {
    let dir = TempDir::new().unwrap();

    let (code, stdout, _) = run_cli(dir.path(), &["daemon", "status"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("not running"));

    let (code, stdout, _) = run_cli(dir.path(), &["daemon", "stop"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("not running"));
}

#[test]
fn test_start_rejects_bad_timebox() {
    let dir = TempDir::new().unwrap();
    let (code, _, stderr) = run_cli(dir.path(), &["start", "Write docs", "-t", "soon", "--no-watch"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("timebox"), "stderr: {}", stderr);
    assert!(!dir.path().join(".focus").join("active").exists());
}

#[test]
fn test_status_json_reports_overrun() {
    let dir = TempDir::new().unwrap();
    seed_active_session(dir.path(), "1704103200-Write-do", "Write docs");

    let (code, stdout, stderr) = run_cli(dir.path(), &["status", "--json"]);
    assert_eq!(code, 0, "stderr: {}", stderr);

    let status: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(status["task"], "Write docs");
    assert_eq!(status["expired"], true);
    assert_eq!(status["commits"], 0);
    assert_eq!(status["watcher_running"], false);
}

#[test]
fn test_check_drift_is_persisted() {
    let dir = TempDir::new().unwrap();
    let id = "1704103200-Write-do";
    seed_active_session(dir.path(), id, "Write docs");

    let (code, _, stderr) = run_cli(
        dir.path(),
        &["check", "--drift", "Fixing CI", "--reason", "red build"],
    );
    assert_eq!(code, 0, "stderr: {}", stderr);

    let record = read_record(dir.path(), id);
    assert_eq!(record["drifts"][0]["description"], "Fixing CI");
    assert_eq!(record["drifts"][0]["reason"], "red build");
}

#[test]
fn test_end_continue_pauses_session() {
    let dir = TempDir::new().unwrap();
    let id = "1704103200-Write-do";
    seed_active_session(dir.path(), id, "Write docs");

    let (code, stdout, stderr) = run_cli(dir.path(), &["end", "--continue"]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("focus resume"));
    assert_eq!(read_record(dir.path(), id)["status"], "paused");

    let (_, stdout, _) = run_cli(dir.path(), &["list"]);
    assert!(stdout.contains("paused"));

    let (code, _, _) = run_cli(dir.path(), &["check", "--on-track"]);
    assert_ne!(code, 0, "a paused session cannot be checked");
}

#[test]
fn test_resume_rejects_path_like_id() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".focus").join("sessions")).unwrap();
    std::fs::write(dir.path().join(".focus").join("x.json"), "{}").unwrap();

    let (code, _, stderr) = run_cli(dir.path(), &["resume", "../x"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid session id"), "stderr: {}", stderr);
}

#[test]
fn test_daemon_stop_shuts_watcher_down_gracefully() {
    let dir = TempDir::new().unwrap();
    seed_active_session(dir.path(), "1704103200-Write-do", "Write docs");
    let focus = dir.path().join(".focus");

    let mut watcher = Command::new(env!("CARGO_BIN_EXE_focus"))
        .arg("watch")
        .current_dir(dir.path())
        .env("FOCUS_DIR", &focus)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("Failed to spawn watcher");

    let deadline = Instant::now() + Duration::from_secs(10);
    while !focus.join("daemon.pid").exists() {
        if Instant::now() > deadline {
            let _ = watcher.kill();
            panic!("watcher never registered");
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    let (code, stdout, stderr) = run_cli(dir.path(), &["daemon", "stop"]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("stopped"), "stdout: {}", stdout);

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = watcher.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            let _ = watcher.kill();
            panic!("watcher did not exit after SIGTERM");
        }
        std::thread::sleep(Duration::from_millis(20));
    };
    assert!(status.success(), "watcher exit: {:?}", status);

    let log = std::fs::read_to_string(focus.join("watcher.log")).unwrap();
    assert!(log.contains("core.watcher.signal_received"), "log: {}", log);
    assert!(log.contains("core.watcher.stopped"), "log: {}", log);
    assert!(!focus.join("daemon.pid").exists());

    let (code, stdout, _) = run_cli(dir.path(), &["daemon", "status"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("not running"), "stdout: {}", stdout);
}
