//! CLI integration tests for base32-codec
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn base32_codec() -> Command {
    Command::cargo_bin("base32-codec").unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    base32_codec()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encode and decode base32"));
}

#[test]
fn test_version() {
    base32_codec()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("base32-codec"));
}

#[test]
fn test_list_alphabets() {
    base32_codec()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("rfc4648"))
        .stdout(predicate::str::contains("crockford"))
        .stdout(predicate::str::contains("zbase32"));
}

#[test]
fn test_list_alphabets_json() {
    let output = base32_codec()
        .args(["--list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"alphabets\""));
    assert!(stdout.contains("\"ybndrfg8ejkmcpqxot1uwisza345h769\""));
}

// ============================================================================
// Encode/Decode
// ============================================================================

#[test]
fn test_encode_default() {
    base32_codec()
        .write_stdin("foobar")
        .assert()
        .success()
        .stdout("MZXW6YTBOI======\n");
}

#[test]
fn test_decode_default() {
    base32_codec()
        .arg("-d")
        .write_stdin("MZXW6YTBOI======\n")
        .assert()
        .success()
        .stdout("foobar");
}

#[test]
fn test_encode_without_padding() {
    base32_codec()
        .arg("--no-padding")
        .write_stdin("foobar")
        .assert()
        .success()
        .stdout("MZXW6YTBOI\n");
}

#[test]
fn test_encode_custom_padding() {
    base32_codec()
        .args(["--padding", "*"])
        .write_stdin("f")
        .assert()
        .success()
        .stdout("MY******\n");
}

#[test]
fn test_decode_crockford() {
    base32_codec()
        .args(["-d", "-a", "crockford"])
        .write_stdin("9ljp-rv3f4-1vpyw-kccgg-joy3r")
        .assert()
        .success()
        .stdout("Hello world! xx");
}

#[test]
fn test_hex_round_trip() {
    base32_codec()
        .arg("--hex")
        .write_stdin("0000010203040506")
        .assert()
        .success()
        .stdout("AAAACAQDAQCQM===\n");

    base32_codec()
        .args(["-d", "--hex"])
        .write_stdin("AAAACAQDAQCQM===")
        .assert()
        .success()
        .stdout("0000010203040506\n");
}

#[test]
fn test_integer_round_trip() {
    base32_codec()
        .args(["--integer", "--no-padding"])
        .write_stdin("987654321")
        .assert()
        .success()
        .stdout("5N42FR\n");

    base32_codec()
        .args(["-d", "--integer"])
        .write_stdin("5N42FR")
        .assert()
        .success()
        .stdout("987654321\n");
}

#[test]
fn test_custom_characters() {
    base32_codec()
        .args(["--characters", "ABCDEFGHIJKLMNOPQRSTUV0123456789", "--no-padding"])
        .write_stdin("f")
        .assert()
        .success()
        .stdout("M2\n");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_decode_invalid_characters() {
    base32_codec()
        .arg("-d")
        .write_stdin("invalid~data-%@#!@*#-foo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid characters"));
}

#[test]
fn test_invalid_custom_characters() {
    base32_codec()
        .args(["--characters", "123456789ABCDEFGHIJKLMNOPQRSTUV"])
        .write_stdin("f")
        .assert()
        .failure()
        .stderr(predicate::str::contains("32 unique characters"));
}

#[test]
fn test_unknown_alphabet_suggests() {
    base32_codec()
        .args(["-a", "crockfrd"])
        .write_stdin("f")
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean 'crockford'?"));
}

#[test]
fn test_decode_integer_empty_input() {
    base32_codec()
        .args(["-d", "--integer"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty string"));
}

#[test]
fn test_invalid_integer_input() {
    base32_codec()
        .arg("--integer")
        .write_stdin("-12")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid integer"));
}
