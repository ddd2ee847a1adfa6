// envlock: Thread-Safe Process Environment Access
//
// SPDX-FileCopyrightText: 2026 envlock contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::inspect::{REDACTED_MARKER, is_sensitive, render_environment, render_variable};
use super::path::{render_current_dir, render_search_path};
use crate::config::OutputFormat;

fn entries(pairs: &[(&str, &str)]) -> Vec<(OsString, OsString)> {
    pairs
        .iter()
        .map(|(name, value)| (OsString::from(name), OsString::from(value)))
        .collect()
}

#[test]
fn test_sensitive_name_matrix() {
    for name in [
        "GITHUB_TOKEN",
        "AWS_SECRET_ACCESS_KEY",
        "DB_PASSWORD",
        "PASSWD",
        "API_KEY",
        "APIKEY",
        "SSH_PRIVATE_KEY",
        "DOCKER_CREDENTIAL_HELPER",
        "npm_config_token",
    ] {
        assert!(is_sensitive(name), "{name} should be treated as sensitive");
    }

    for name in ["PATH", "HOME", "USER", "SSH_AGENT_PID", "MONKEY", "WHISKEY"] {
        assert!(!is_sensitive(name), "{name} should not be redacted");
    }
}

#[test]
fn test_render_environment_plain_redacts() {
    let env = entries(&[("APP_MODE", "batch"), ("APP_TOKEN", "s3cret")]);
    let lines = render_environment(&env, OutputFormat::Plain, false, true).unwrap();
    assert_eq!(lines, vec!["APP_MODE=batch", "APP_TOKEN=[hidden]"]);
}

#[test]
fn test_render_environment_plain_no_redact() {
    let env = entries(&[("APP_TOKEN", "s3cret")]);
    let lines = render_environment(&env, OutputFormat::Plain, false, false).unwrap();
    assert_eq!(lines, vec!["APP_TOKEN=s3cret"]);
    assert!(!lines[0].contains(REDACTED_MARKER));
}

#[test]
fn test_render_environment_names_only() {
    // Names are never secret, so redaction does not apply to them.
    let env = entries(&[("APP_TOKEN", "s3cret"), ("APP_MODE", "batch")]);
    let lines = render_environment(&env, OutputFormat::Plain, true, true).unwrap();
    assert_eq!(lines, vec!["APP_TOKEN", "APP_MODE"]);
}

#[test]
fn test_render_environment_preserves_given_order() {
    let env = entries(&[("Z_LAST", "1"), ("A_FIRST", "2")]);
    let lines = render_environment(&env, OutputFormat::Plain, false, true).unwrap();
    assert_eq!(lines, vec!["Z_LAST=1", "A_FIRST=2"]);
}

#[test]
fn test_render_environment_empty() {
    let lines = render_environment(&[], OutputFormat::Plain, false, true).unwrap();
    assert!(lines.is_empty());

    let lines = render_environment(&[], OutputFormat::Json, false, true).unwrap();
    assert_eq!(lines, vec!["[]"]);
}

#[test]
fn test_render_environment_json() {
    let env = entries(&[("APP_MODE", "batch"), ("APP_TOKEN", "s3cret")]);
    let lines = render_environment(&env, OutputFormat::Json, false, true).unwrap();
    assert_eq!(lines.len(), 1);
    insta::assert_snapshot!(&lines[0], @r#"
    [
      {
        "name": "APP_MODE",
        "value": "batch"
      },
      {
        "name": "APP_TOKEN",
        "value": "[hidden]"
      }
    ]
    "#);
}

#[test]
fn test_render_environment_json_names_only() {
    let env = entries(&[("B", "2"), ("A", "1")]);
    let lines = render_environment(&env, OutputFormat::Json, true, false).unwrap();
    insta::assert_snapshot!(&lines[0], @r#"
    [
      "B",
      "A"
    ]
    "#);
}

#[test]
fn test_render_variable() {
    let plain = render_variable("HOME", "/home/user", OutputFormat::Plain).unwrap();
    assert_eq!(plain, "/home/user");

    let json = render_variable("HOME", "/home/user", OutputFormat::Json).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "name": "HOME",
      "value": "/home/user"
    }
    "#);
}

#[test]
fn test_render_variable_never_redacts() {
    // `get` answers an explicit query; the caller asked for the value.
    let plain = render_variable("APP_TOKEN", "s3cret", OutputFormat::Plain).unwrap();
    assert_eq!(plain, "s3cret");
}

#[test]
fn test_render_search_path_plain() {
    let dirs = vec![
        PathBuf::from("/usr/bin"),
        PathBuf::new(),
        PathBuf::from("/bin"),
    ];
    let lines = render_search_path(&dirs, OutputFormat::Plain).unwrap();
    assert_eq!(lines, vec!["/usr/bin", "", "/bin"]);
}

#[test]
fn test_render_search_path_empty_list_renders_nothing() {
    let lines = render_search_path(&[], OutputFormat::Plain).unwrap();
    assert!(lines.is_empty());
}

#[test]
fn test_render_search_path_json_keeps_empty_entry() {
    let dirs = vec![PathBuf::from("/usr/bin"), PathBuf::new()];
    let lines = render_search_path(&dirs, OutputFormat::Json).unwrap();
    insta::assert_snapshot!(&lines[0], @r#"
    [
      "/usr/bin",
      ""
    ]
    "#);

    let empty = render_search_path(&[], OutputFormat::Json).unwrap();
    assert_eq!(empty, vec!["[]"]);
}

#[test]
fn test_render_current_dir() {
    let plain = render_current_dir(Path::new("/work/dir"), OutputFormat::Plain).unwrap();
    assert_eq!(plain, "/work/dir");

    let json = render_current_dir(Path::new("/work/dir"), OutputFormat::Json).unwrap();
    assert_eq!(json, "\"/work/dir\"");
}
