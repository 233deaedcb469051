//! End-to-end tests for the `mongo-regex` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn mongo_regex() -> Command {
    Command::cargo_bin("mongo-regex").unwrap()
}

fn test_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_encode_pattern_and_flags() {
    mongo_regex()
        .args(["encode", "--pattern", "ab+c", "--flags", "gi"])
        .assert()
        .success()
        .stdout("<Regex options=\"gi\">ab+c</Regex>\n");
}

#[test]
fn test_encode_without_flags_omits_attribute() {
    mongo_regex()
        .args(["encode", "--pattern", "x"])
        .assert()
        .success()
        .stdout("<Regex>x</Regex>\n");
}

#[test]
fn test_encode_empty_flags_keeps_attribute() {
    mongo_regex()
        .args(["encode", "--flags", ""])
        .assert()
        .success()
        .stdout("<Regex options=\"\"/>\n");
}

#[test]
fn test_encode_with_config_and_override() {
    let config = test_file("element_name = \"Pattern\"\nxml_declaration = true\n");
    mongo_regex()
        .args(["encode", "-p", "a", "-c"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?><Pattern>a</Pattern>"));

    mongo_regex()
        .args(["encode", "-p", "a", "-e", "Expr", "-c"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("<Expr>a</Expr>"));
}

#[test]
fn test_decode_stdin_display() {
    mongo_regex()
        .arg("decode")
        .write_stdin(r#"<Query><Regex options="gi">ab+c</Regex><Regex options="m"/></Query>"#)
        .assert()
        .success()
        .stdout("ab+cgi\nm\n");
}

#[test]
fn test_decode_file_json() {
    let input = test_file(r#"<Regex>x</Regex>"#);
    mongo_regex()
        .args(["decode", "--json"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""pattern": "x""#))
        .stdout(predicate::str::contains("flags").not());
}

#[test]
fn test_decode_with_element_override() {
    mongo_regex()
        .args(["decode", "--element", "Pattern"])
        .write_stdin(r#"<Doc><Regex options="i">skipped</Regex><Pattern options="m">kept</Pattern></Doc>"#)
        .assert()
        .success()
        .stdout("keptm\n");
}

#[test]
fn test_decode_invalid_xml_fails() {
    mongo_regex()
        .arg("decode")
        .write_stdin("<Regex>a<b/></Regex>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("XML error"));
}

#[test]
fn test_bad_config_fails() {
    mongo_regex()
        .args(["encode", "-p", "a", "-c", "/nonexistent/mongo-regex.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error loading config"));
}
