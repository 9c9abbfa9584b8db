#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tmuxwords"))
}

/// Stand-in tmux with one pane whose capture runs `capture`.
fn fake_tmux(dir: &Path, capture: &str) -> PathBuf {
    let path = dir.join("tmux");
    let script = format!(
        "#!/bin/sh\ncase \"$1\" in\n  list-panes) printf 'main:0.0\\037%%0\\0370\\n' ;;\n  *) {capture} ;;\nesac\n"
    );
    std::fs::write(&path, script).expect("write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).expect("chmod");
    path
}

fn gather(tmux: &Path, extra: &[&str]) -> std::process::Output {
    Command::new(bin_path())
        .arg("gather")
        .arg("--executable")
        .arg(tmux)
        .args(extra)
        .env_remove("TMUXWORDS_TMUX_SOCKET")
        .stdin(Stdio::null())
        .output()
        .expect("run binary")
}

#[test]
fn gather_prints_candidates_as_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let tmux = fake_tmux(dir.path(), "echo make install");

    let output = gather(&tmux, &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let candidates: serde_json::Value = serde_json::from_str(stdout.trim()).expect("json");
    assert_eq!(
        candidates,
        serde_json::json!([
            {"word": "make", "kind": "main:0.0"},
            {"word": "install", "kind": "main:0.0"},
        ])
    );
}

#[test]
fn timeout_exits_without_waiting_for_tmux() {
    let dir = tempfile::tempdir().expect("tempdir");
    let tmux = fake_tmux(dir.path(), "exec sleep 6");

    let started = Instant::now();
    let output = gather(&tmux, &["--timeout-ms", "200"]);
    let elapsed = started.elapsed();

    assert!(!output.status.success());
    assert!(elapsed < Duration::from_secs(3), "took {elapsed:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("timed out"), "{stderr}");
}

#[test]
fn missing_executable_prints_empty_list() {
    let output = gather(Path::new("/nonexistent/tmux"), &[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "[]\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("[tmuxwords] executable not found").count(), 1);
}
