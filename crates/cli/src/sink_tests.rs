// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for sinks and output naming.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use tempfile::TempDir;

use super::*;

#[test]
fn naming_convention() {
    assert_eq!(names::word("out.txt"), "n_out.txt");
    assert_eq!(names::rolling("out.txt"), "k_rolling.out.txt");
    assert_eq!(names::k_start("out.txt"), "k_start.out.txt");
    assert_eq!(names::k_mid("out.txt"), "k_mid.out.txt");
    assert_eq!(names::k_end("out.txt"), "k_end.out.txt");
    assert_eq!(names::charset_primary("out.txt"), "c_out.txt");
    assert_eq!(
        names::charset_filter("startmid", "out.txt"),
        "c_startmid_out.txt"
    );
    assert_eq!(names::charset_rule("solo", "out.txt"), "c_solo_out.txt.rule");
}

#[test]
fn append_writer_accumulates_across_opens() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sink.txt");
    {
        let mut w = append_writer(&path).unwrap();
        write_line(&mut w, "first").unwrap();
        w.flush().unwrap();
    }
    {
        let mut w = append_writer(&path).unwrap();
        write_line(&mut w, "second").unwrap();
        w.flush().unwrap();
    }
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
}

#[test]
fn write_line_terminates_with_newline() {
    let mut buf = Vec::new();
    write_line(&mut buf, "gram").unwrap();
    assert_eq!(buf, b"gram\n");
}
