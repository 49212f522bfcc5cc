// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for character classification.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use yare::parameterized;

use super::*;

#[parameterized(
    lowercase = { 'a', CharClass::Lowercase },
    uppercase = { 'Z', CharClass::Uppercase },
    digit = { '7', CharClass::Numeric },
    space = { ' ', CharClass::Special },
    bang = { '!', CharClass::Special },
    quote = { '\'', CharClass::Special },
    hyphen = { '-', CharClass::Special },
    non_ascii = { 'é', CharClass::Unknown },
    colon = { ':', CharClass::Unknown },
)]
fn strict_open_run(ch: char, expected: CharClass) {
    assert_eq!(Ruleset::Strict.classify(ch, false), expected);
}

#[test]
fn strict_first_letter_is_ambiguous() {
    assert_eq!(Ruleset::Strict.classify('a', true), CharClass::MixedCase);
    assert_eq!(Ruleset::Strict.classify('A', true), CharClass::MixedCase);
    // Non-letters do not care about run position.
    assert_eq!(Ruleset::Strict.classify('7', true), CharClass::Numeric);
    assert_eq!(Ruleset::Strict.classify('!', true), CharClass::Special);
}

#[test]
fn mixed_collapses_case() {
    assert_eq!(Ruleset::Mixed.classify('a', false), CharClass::MixedCase);
    assert_eq!(Ruleset::Mixed.classify('A', false), CharClass::MixedCase);
    assert_eq!(Ruleset::Mixed.classify('7', false), CharClass::Numeric);
}

#[test]
fn mixed_numeric_collapses_digits_too() {
    assert_eq!(
        Ruleset::MixedNumeric.classify('a', false),
        CharClass::MixedCase
    );
    assert_eq!(
        Ruleset::MixedNumeric.classify('7', false),
        CharClass::MixedCase
    );
    assert_eq!(
        Ruleset::MixedNumeric.classify('!', false),
        CharClass::Special
    );
}

#[test]
fn quote_and_hyphen_are_strict_only() {
    assert_eq!(Ruleset::Strict.classify('\'', false), CharClass::Special);
    assert_eq!(Ruleset::Mixed.classify('\'', false), CharClass::Unknown);
    assert_eq!(Ruleset::Strict.classify('-', false), CharClass::Special);
    assert_eq!(Ruleset::MixedNumeric.classify('-', false), CharClass::Unknown);
}

#[test]
fn special_sets_differ_only_by_quote_and_hyphen() {
    let relaxed: Vec<char> = SPECIAL.chars().collect();
    let strict: Vec<char> = SPECIAL_FULL.chars().collect();
    assert_eq!(&strict[..relaxed.len()], &relaxed[..]);
    assert_eq!(&strict[relaxed.len()..], ['\'', '-']);
}

#[test]
fn passes_for_mixed_mode() {
    assert_eq!(Ruleset::passes(false), &[Ruleset::Strict]);
    assert_eq!(
        Ruleset::passes(true),
        &[Ruleset::Strict, Ruleset::Mixed, Ruleset::MixedNumeric]
    );
}
