//! Exit codes and stream discipline for every subcommand.
//!
//! - Successful commands return 0
//! - Unreadable files, malformed records and failed audits return 2
//! - Errors go to stderr, never stdout

use std::fs;

use gavel_cli::run;

#[test]
fn test_deal_success_returns_zero() {
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = run(["gavel", "deal", "--seed", "42"], &mut out, &mut err);

    assert_eq!(code, 0);
    assert!(String::from_utf8(out).unwrap().contains("Prizes: ["));
}

#[test]
fn test_deal_rejects_non_numeric_seed() {
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = run(["gavel", "deal", "--seed", "abc"], &mut out, &mut err);

    assert_eq!(code, 2);
    assert!(out.is_empty(), "parse errors must not reach stdout");
    assert!(!err.is_empty());
}

#[test]
fn test_replay_missing_file_returns_two() {
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = run(
        ["gavel", "replay", "--input", "/nonexistent/games.jsonl"],
        &mut out,
        &mut err,
    );

    assert_eq!(code, 2);
    let stderr = String::from_utf8(err).unwrap();
    assert!(stderr.starts_with("Error: Failed to read"), "{}", stderr);
}

#[test]
fn test_verify_missing_file_returns_two() {
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = run(
        ["gavel", "verify", "--input", "/nonexistent/games.jsonl"],
        &mut out,
        &mut err,
    );

    assert_eq!(code, 2);
    assert!(String::from_utf8(err).unwrap().contains("Error:"));
}

#[test]
fn test_verify_garbage_returns_two() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.jsonl");
    fs::write(&path, "this is not a game record\n").unwrap();

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        ["gavel", "verify", "--input", path.to_str().unwrap()],
        &mut out,
        &mut err,
    );

    assert_eq!(code, 2);
    assert_eq!(String::from_utf8(out).unwrap(), "Verify: FAIL (games=1)\n");
    let stderr = String::from_utf8(err).unwrap();
    assert!(stderr.contains("Game 1: Invalid record structure"), "{}", stderr);
}

#[test]
fn test_verify_empty_file_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.jsonl");
    fs::write(&path, "").unwrap();

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(
        ["gavel", "verify", "--input", path.to_str().unwrap()],
        &mut out,
        &mut err,
    );

    assert_eq!(code, 0);
    assert_eq!(String::from_utf8(out).unwrap(), "Verify: OK (games=0)\n");
}

#[test]
fn test_missing_subcommand_returns_two() {
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = run(["gavel"], &mut out, &mut err);

    assert_eq!(code, 2);
    assert!(String::from_utf8(err).unwrap().contains("Usage: gavel"));
}

#[test]
fn test_version_returns_zero() {
    let mut out = Vec::new();
    let mut err = Vec::new();

    let code = run(["gavel", "--version"], &mut out, &mut err);

    assert_eq!(code, 0);
    assert!(String::from_utf8(out).unwrap().starts_with("gavel"));
}
