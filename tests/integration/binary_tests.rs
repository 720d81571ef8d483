//! End-to-end tests against the built binary.

use std::process::{Command, Output};

const DEFAULT_STDOUT: &str = "Array length is 11\n\
                              Menu option 1 selected\n\
                              Menu option 2 selected\n\
                              Menu option 3 selected\n";

const DEFAULT_STDERR: &str = "Menu option invalid: The option must be between 1 and 3 inclusive\n";

fn command(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_menu-guard"));
    cmd.args(args).env_remove("RUST_LOG");
    cmd
}

fn menu_guard(args: &[&str]) -> Output {
    command(args).output().expect("failed to run menu-guard")
}

#[test]
fn test_no_arguments() {
    let output = menu_guard(&[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), DEFAULT_STDOUT);
    assert_eq!(String::from_utf8_lossy(&output.stderr), DEFAULT_STDERR);
}

#[test]
fn test_rust_log_is_ignored() {
    let output = command(&[])
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to run menu-guard");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), DEFAULT_STDOUT);
    assert_eq!(String::from_utf8_lossy(&output.stderr), DEFAULT_STDERR);
}

#[cfg(target_os = "linux")]
#[test]
fn test_stdout_write_failure_reported_once() {
    use std::fs::OpenOptions;
    use std::process::Stdio;

    let full = OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("failed to open /dev/full");
    let output = command(&[])
        .stdout(Stdio::from(full))
        .output()
        .expect("failed to run menu-guard");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("Error: writing to the console: I/O error: "), "{}", stderr);
    assert_eq!(stderr.matches("os error 28").count(), 1, "{}", stderr);
    assert_eq!(stderr.lines().count(), 1, "{}", stderr);
}

#[test]
fn test_all_valid_options() {
    let output = menu_guard(&["--values", "1,2", "--option", "3,1"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Array length is 2\nMenu option 3 selected\nMenu option 1 selected\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_build_info() {
    let output = menu_guard(&["--build-info"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("menu-guard "));
}

#[test]
fn test_bad_argument_exits_with_usage_error() {
    let output = menu_guard(&["--nope"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
