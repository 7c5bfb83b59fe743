//! End-to-end tests for `lpm buildpkg` using a fake Python interpreter.
//!
//! The fake interpreter is a shell script that records its arguments and
//! exits with a chosen status, so no real Python or pip is needed.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Mutex;

use tempfile::TempDir;

/// Serializes script creation and spawning so no test forks while another
/// still holds a freshly written script open (ETXTBSY on exec).
static SPAWN_LOCK: Mutex<()> = Mutex::new(());

fn lpm(workdir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lpm"));
    cmd.current_dir(workdir)
        .env_remove("LPM_PYTHON")
        .env_remove("LPM_LOG");
    cmd
}

fn write_fake_python(dir: &Path, record: &Path, exit_code: i32) -> PathBuf {
    let script = dir.join("python3");
    fs::write(
        &script,
        format!(
            "#!/bin/sh\nfor arg in \"$@\"; do echo \"$arg\"; done > '{}'\nexit {exit_code}\n",
            record.display()
        ),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

fn run_with_fake_python(workdir: &Path, exit_code: i32, extra: &[&str]) -> (Output, PathBuf) {
    let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let record = workdir.join("args.txt");
    let python = write_fake_python(workdir, &record, exit_code);

    let output = lpm(workdir)
        .arg("buildpkg")
        .arg("--python-pip")
        .arg("requests")
        .arg("--python-executable")
        .arg(&python)
        .args(extra)
        .output()
        .unwrap();
    (output, python)
}

#[test]
fn test_successful_build_reports_interpreter() {
    let temp = TempDir::new().unwrap();
    let (output, python) = run_with_fake_python(
        temp.path(),
        0,
        &["-o", "out/dir", "--pip-arg", "--pre", "--pip-arg=--no-cache-dir"],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("Built requests using interpreter: {}", python.display())
    );

    assert!(temp.path().join("out/dir").is_dir());

    let recorded = fs::read_to_string(temp.path().join("args.txt")).unwrap();
    let lines: Vec<&str> = recorded.lines().collect();
    assert_eq!(
        lines,
        [
            "-m",
            "pip",
            "wheel",
            "requests",
            "--no-deps",
            "-w",
            "out/dir",
            "--pre",
            "--no-cache-dir",
        ]
    );
}

#[test]
fn test_default_output_dir_is_created() {
    let temp = TempDir::new().unwrap();
    let (output, _) = run_with_fake_python(temp.path(), 0, &[]);

    assert!(output.status.success());
    assert!(temp.path().join("build/python").is_dir());
}

#[test]
fn test_pip_failure_exits_non_zero() {
    let temp = TempDir::new().unwrap();
    let (output, _) = run_with_fake_python(temp.path(), 1, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("pip wheel failed"), "stderr: {stderr}");
    assert!(stderr.contains("exit status 1"), "stderr: {stderr}");
}

#[test]
fn test_no_interpreter_lists_candidates() {
    let temp = TempDir::new().unwrap();
    let empty_path = temp.path().join("empty-bin");
    fs::create_dir(&empty_path).unwrap();

    let output = {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        lpm(temp.path())
            .env("PATH", &empty_path)
            .env("LPM_FROZEN", "1")
            .args(["buildpkg", "--python-pip", "requests"])
            .output()
            .unwrap()
    };

    assert_eq!(output.status.code(), Some(69));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unable to determine a Python interpreter"),
        "stderr: {stderr}"
    );
    assert!(stderr.contains("<none>, <none>"), "stderr: {stderr}");
    assert!(!temp.path().join("build/python").exists());
}

#[test]
fn test_missing_package_is_usage_error() {
    let temp = TempDir::new().unwrap();
    let output = {
        let _guard = SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        lpm(temp.path()).arg("buildpkg").output().unwrap()
    };

    assert_eq!(output.status.code(), Some(2));
}
