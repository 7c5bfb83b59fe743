//! Tests for running invocations as real child processes.
//!
//! Scripts are executed through `/bin/sh <script>` rather than directly so a
//! freshly written file is never exec'd while another test thread forks.

#![cfg(unix)]

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use lpm_core::domain::WheelInvocation;
use lpm_core::ports::{CommandRunnerPort, ProcessError};
use lpm_runtime::ProcessCommandRunner;
use tempfile::TempDir;

fn write_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("fake-python.sh");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    path
}

fn sh_invocation(script: &Path, args: &[&str]) -> WheelInvocation {
    let mut all_args = vec![script.as_os_str().to_os_string()];
    all_args.extend(args.iter().map(OsString::from));
    WheelInvocation {
        program: PathBuf::from("/bin/sh"),
        args: all_args,
        env: None,
    }
}

#[test]
fn test_zero_exit_is_success() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), "exit 0");

    let outcome = ProcessCommandRunner::new()
        .run(&sh_invocation(&script, &[]))
        .unwrap();

    assert!(outcome.success());
    assert_eq!(outcome.code, Some(0));
}

#[test]
fn test_non_zero_exit_is_reported_not_raised() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), "exit 1");

    let outcome = ProcessCommandRunner::new()
        .run(&sh_invocation(&script, &[]))
        .unwrap();

    assert!(!outcome.success());
    assert_eq!(outcome.code, Some(1));
}

#[test]
fn test_arguments_are_passed_in_order() {
    let temp = TempDir::new().unwrap();
    let record = temp.path().join("args.txt");
    let script = write_script(
        temp.path(),
        &format!(
            "for arg in \"$@\"; do echo \"$arg\"; done > '{}'",
            record.display()
        ),
    );

    let args = ["-m", "pip", "wheel", "requests", "--no-deps", "-w", "out dir"];
    let outcome = ProcessCommandRunner::new()
        .run(&sh_invocation(&script, &args))
        .unwrap();
    assert!(outcome.success());

    let recorded = fs::read_to_string(&record).unwrap();
    let lines: Vec<&str> = recorded.lines().collect();
    assert_eq!(lines, args);
}

#[test]
fn test_custom_env_replaces_parent_env() {
    let temp = TempDir::new().unwrap();
    let record = temp.path().join("env.txt");
    let script = write_script(
        temp.path(),
        &format!(
            "echo \"marker=$LPM_TEST_MARKER cargo=${{CARGO:-unset}}\" > '{}'",
            record.display()
        ),
    );

    let mut invocation = sh_invocation(&script, &[]);
    invocation.env = Some(BTreeMap::from([(
        "LPM_TEST_MARKER".to_string(),
        "present".to_string(),
    )]));

    let outcome = ProcessCommandRunner::new().run(&invocation).unwrap();
    assert!(outcome.success());

    let recorded = fs::read_to_string(&record).unwrap();
    assert_eq!(recorded.trim(), "marker=present cargo=unset");
}

#[test]
fn test_missing_program_fails_to_start() {
    let invocation = WheelInvocation {
        program: PathBuf::from("/nonexistent/lpm-test/python3"),
        args: Vec::new(),
        env: None,
    };

    let err = ProcessCommandRunner::new().run(&invocation).unwrap_err();
    assert!(matches!(err, ProcessError::StartFailed(_)));
}
