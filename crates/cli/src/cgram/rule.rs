// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule-string emission ("rulify").
//!
//! Converts a filtered segment grouping into a positional
//! transformation-rule line for external cracking rule engines instead
//! of a raw concatenation. Two variants share start/end handling: the
//! first segment becomes `^` (prepend) tokens, the last becomes `$`
//! (append) tokens; middle segments become either `i<pos><char>` insert
//! tokens (prepend-style) or `o<pos><char>` overwrite tokens
//! (overwrite-style). Positions use the 36-symbol alphabet `0-9A-Z`;
//! anything past offset 35 is out of index space and dropped.

use crate::cgram::filter::{FilterSpec, Slot};

const OFFSET_SYMBOLS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn offset_symbol(offset: usize) -> Option<char> {
    OFFSET_SYMBOLS.get(offset).map(|&b| b as char)
}

fn split<'m>(matches: &'m [&'m str]) -> (&'m str, &'m [&'m str], &'m str) {
    let first = matches[0];
    let last = matches[matches.len() - 1];
    let mids: &[&str] = if matches.len() > 2 {
        &matches[1..matches.len() - 1]
    } else {
        &[]
    };
    (first, mids, last)
}

/// Prepend-style rule line for `matches` under `spec`, or `None` when
/// the spec does not apply.
///
/// The first segment is emitted reversed as `^` tokens (repeated front
/// insertion rebuilds the original order); each middle segment is
/// emitted reversed as `i` tokens at its running offset, so inserting
/// at a fixed index reconstructs the segment left to right. A middle
/// segment whose starting offset exceeds 35 is dropped whole.
pub fn prepend_rule(spec: &FilterSpec, matches: &[&str]) -> Option<String> {
    if !spec.applies_to(matches.len()) {
        return None;
    }
    let (first, mids, last) = split(matches);
    let mut tokens: Vec<String> = Vec::new();
    for slot in spec.slots() {
        match slot {
            Slot::Start => {
                for ch in first.chars().rev() {
                    tokens.push(format!("^{ch}"));
                }
            }
            Slot::Mid => {
                let mut offset = first.chars().count();
                for mid in mids {
                    if let Some(sym) = offset_symbol(offset) {
                        for ch in mid.chars().rev() {
                            tokens.push(format!("i{sym}{ch}"));
                        }
                    }
                    offset += mid.chars().count();
                }
            }
            Slot::End => {
                for ch in last.chars() {
                    tokens.push(format!("${ch}"));
                }
            }
        }
    }
    join(tokens)
}

/// Overwrite-style rule line for `matches` under `spec`.
///
/// Start/end handling matches [`prepend_rule`]; middle segments emit
/// `o` tokens in forward order with a per-character offset, dropping
/// individual characters once the offset passes 35. Specs without a
/// `mid` token produce nothing in this variant.
pub fn overwrite_rule(spec: &FilterSpec, matches: &[&str]) -> Option<String> {
    if !spec.has_mid() || !spec.applies_to(matches.len()) {
        return None;
    }
    let (first, mids, last) = split(matches);
    let mut tokens: Vec<String> = Vec::new();
    for slot in spec.slots() {
        match slot {
            Slot::Start => {
                for ch in first.chars().rev() {
                    tokens.push(format!("^{ch}"));
                }
            }
            Slot::Mid => {
                let mut offset = first.chars().count();
                for mid in mids {
                    for ch in mid.chars() {
                        if let Some(sym) = offset_symbol(offset) {
                            tokens.push(format!("o{sym}{ch}"));
                        }
                        offset += 1;
                    }
                }
            }
            Slot::End => {
                for ch in last.chars() {
                    tokens.push(format!("${ch}"));
                }
            }
        }
    }
    join(tokens)
}

/// A rule with every token dropped carries no information; emit nothing.
fn join(tokens: Vec<String>) -> Option<String> {
    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
