// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for the per-line charset pipeline, run against in-memory
//! sinks.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

/// Runs lines through a fresh pipeline and returns the primary sink
/// plus `(spec, content)` pairs for each filter sink.
fn run(
    lines: &[&str],
    bounds: Bounds,
    mixed: bool,
    rulify: bool,
    specs: &[&str],
) -> (String, Vec<(String, String)>) {
    let filters = specs
        .iter()
        .map(|s| FilterSink {
            spec: s.parse().unwrap(),
            writer: Vec::new(),
        })
        .collect();
    let mut runner = Runner::new(bounds, mixed, rulify, Vec::new(), filters);
    for line in lines {
        runner.process_line(line).unwrap();
    }
    let (primary, filters) = runner.into_sinks().unwrap();
    let filters = filters
        .into_iter()
        .map(|f| {
            (
                f.spec.as_str().to_string(),
                String::from_utf8(f.writer).unwrap(),
            )
        })
        .collect();
    (String::from_utf8(primary).unwrap(), filters)
}

#[test]
fn primary_gets_matches_then_glued_candidates() {
    let (primary, _) = run(&["password1letmein"], Bounds::new(3, 32), false, false, &[]);
    assert_eq!(primary, "password\nletmein\npassword1letmein\n");
}

#[test]
fn solo_sink_gets_single_match_lines_only() {
    let (primary, sinks) = run(
        &["abcdef", "ab12cd"],
        Bounds::new(1, 32),
        false,
        false,
        &["solo", "startmidend"],
    );
    // "abcdef" segments to one match, "ab12cd" to three.
    assert_eq!(sinks[0].1, "abcdef\n");
    assert_eq!(sinks[1].1, "ab\n12\ncd\n");
    assert!(primary.contains("abcdef\n"));
}

#[test]
fn startmid_writes_two_lines_for_four_segments() {
    let (_, sinks) = run(&["ab1CD!"], Bounds::new(1, 32), false, false, &["startmid"]);
    assert_eq!(sinks[0].1, "ab\n1CD\n");
}

#[test]
fn glued_generation_feeds_the_filters() {
    // No segment of "ab1cd" is within bounds on its own, but the glued
    // candidate is, and it matches solo.
    let (primary, sinks) = run(&["ab1cd"], Bounds::new(3, 32), false, false, &["solo"]);
    assert_eq!(primary, "ab1cd\n");
    assert_eq!(sinks[0].1, "ab1cd\n");
}

#[test]
fn out_of_bounds_glue_results_are_not_emitted() {
    let (primary, _) = run(&["ab1cd"], Bounds::new(8, 32), false, false, &[]);
    assert!(primary.is_empty());
}

#[test]
fn mixed_mode_runs_three_passes() {
    let (primary, _) = run(&["Pass123"], Bounds::new(1, 32), true, false, &[]);
    assert_eq!(primary, "Pass\n123\nPass\n123\nPass123\n");
}

#[test]
fn rulify_writes_rule_lines_instead_of_wordlists() {
    let (_, sinks) = run(
        &["ab1CD!"],
        Bounds::new(1, 32),
        false,
        true,
        &["startmidend"],
    );
    assert_eq!(sinks[0].1, "^b ^a i21 i3D i3C $!\n^b ^a o21 o3C o4D $!\n");
}

#[test]
fn rulify_emits_one_line_for_specs_without_mid() {
    let (_, sinks) = run(&["abcdef"], Bounds::new(1, 32), false, true, &["solo"]);
    assert_eq!(sinks[0].1, "^f ^e ^d ^c ^b ^a\n");
}

#[test]
fn empty_line_writes_nothing() {
    let (primary, sinks) = run(&[""], Bounds::new(1, 32), true, false, &["solo"]);
    assert!(primary.is_empty());
    assert!(sinks[0].1.is_empty());
}

#[test]
fn filters_apply_per_pass_in_mixed_mode() {
    // Strict sees two segments ("ab", "12"); mixed-numeric sees one and
    // fires solo.
    let (_, sinks) = run(&["ab12"], Bounds::new(1, 32), true, false, &["solo"]);
    assert_eq!(sinks[0].1, "ab12\n");
}
