//! Build script for menu-guard.
//!
//! Generates version information from git and the build environment.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    println!(
        "cargo:rustc-env=TARGET={}",
        env::var("TARGET").unwrap_or_else(|_| "unknown".to_string())
    );

    if let Some(hash) = get_git_hash() {
        println!("cargo:rustc-env=MENU_GUARD_GIT_HASH={}", hash);
    }

    if let Some(date) = get_build_date() {
        println!("cargo:rustc-env=MENU_GUARD_BUILD_DATE={}", date);
    }

    if let Some(version) = get_rustc_version() {
        println!("cargo:rustc-env=MENU_GUARD_RUSTC_VERSION={}", version);
    }
}

/// Run a command and return its trimmed stdout on success
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
}

/// Short git commit hash
fn get_git_hash() -> Option<String> {
    command_output("git", &["rev-parse", "--short", "HEAD"])
}

/// Build date in ISO 8601
fn get_build_date() -> Option<String> {
    command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"])
}

/// Parse "rustc 1.75.0 (..." -> "1.75.0"
fn get_rustc_version() -> Option<String> {
    command_output("rustc", &["--version"])
        .and_then(|s| s.split_whitespace().nth(1).map(|v| v.to_string()))
}
