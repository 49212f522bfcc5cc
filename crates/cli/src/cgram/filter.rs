// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter-combination engine.
//!
//! A [`FilterSpec`] selects which segments of a line's match sequence
//! are combined into one output destination. The short forms (`solo`,
//! `duo`, `duostart`, `duoend`) dispatch on exact sequence length; a
//! composed spec such as `startmidend` applies to sequences of three or
//! more segments, where `start` contributes the first segment, `end`
//! the last, and `mid` the whole middle slice joined. Tokens may repeat.

use std::fmt;
use std::str::FromStr;

/// Positional token inside a composed filter spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Start,
    Mid,
    End,
}

/// How a filter spec dispatches on the match sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKind {
    /// Exactly one match: emit it.
    Solo,
    /// Exactly two matches: emit their concatenation.
    Duo,
    /// Exactly two matches: emit the first.
    DuoStart,
    /// Exactly two matches: emit the second.
    DuoEnd,
    /// Three or more matches: emit one piece per token.
    Positional(Vec<Slot>),
}

/// A parsed filter pattern such as `solo` or `startmidend`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    raw: String,
    kind: FilterKind,
}

/// Error for an unparseable filter pattern.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "invalid filter '{0}': expected solo, duo, duostart, duoend, \
     or a sequence of start/mid/end tokens"
)]
pub struct FilterSpecError(pub String);

impl FromStr for FilterSpec {
    type Err = FilterSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "solo" => FilterKind::Solo,
            "duo" => FilterKind::Duo,
            "duostart" => FilterKind::DuoStart,
            "duoend" => FilterKind::DuoEnd,
            _ => {
                let mut slots = Vec::new();
                let mut rest = s;
                while !rest.is_empty() {
                    if let Some(tail) = rest.strip_prefix("start") {
                        slots.push(Slot::Start);
                        rest = tail;
                    } else if let Some(tail) = rest.strip_prefix("mid") {
                        slots.push(Slot::Mid);
                        rest = tail;
                    } else if let Some(tail) = rest.strip_prefix("end") {
                        slots.push(Slot::End);
                        rest = tail;
                    } else {
                        return Err(FilterSpecError(s.to_string()));
                    }
                }
                if slots.is_empty() {
                    return Err(FilterSpecError(s.to_string()));
                }
                FilterKind::Positional(slots)
            }
        };
        Ok(FilterSpec {
            raw: s.to_string(),
            kind,
        })
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FilterSpec {
    /// The pattern as the user wrote it (used in sink file names).
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> &FilterKind {
        &self.kind
    }

    /// Whether the spec contains a `mid` token. Overwrite-style rules
    /// are only meaningful when one exists.
    pub fn has_mid(&self) -> bool {
        matches!(&self.kind, FilterKind::Positional(slots) if slots.contains(&Slot::Mid))
    }

    /// Slot view used by the rule emitter; the short forms map onto
    /// start/end blocks.
    pub fn slots(&self) -> &[Slot] {
        match &self.kind {
            FilterKind::Solo | FilterKind::DuoStart => &[Slot::Start],
            FilterKind::Duo => &[Slot::Start, Slot::End],
            FilterKind::DuoEnd => &[Slot::End],
            FilterKind::Positional(slots) => slots,
        }
    }

    /// Whether the spec applies to a match sequence of this length.
    pub fn applies_to(&self, len: usize) -> bool {
        match self.kind {
            FilterKind::Solo => len == 1,
            FilterKind::Duo | FilterKind::DuoStart | FilterKind::DuoEnd => len == 2,
            FilterKind::Positional(_) => len >= 3,
        }
    }

    /// The pieces this spec contributes for `matches`, one output line
    /// each, or `None` when the spec does not apply.
    pub fn pieces(&self, matches: &[&str]) -> Option<Vec<String>> {
        if !self.applies_to(matches.len()) {
            return None;
        }
        let pieces = match &self.kind {
            FilterKind::Solo | FilterKind::DuoStart => vec![matches[0].to_string()],
            FilterKind::Duo => vec![format!("{}{}", matches[0], matches[1])],
            FilterKind::DuoEnd => vec![matches[1].to_string()],
            FilterKind::Positional(slots) => slots
                .iter()
                .map(|slot| match slot {
                    Slot::Start => matches[0].to_string(),
                    Slot::Mid => matches[1..matches.len() - 1].concat(),
                    Slot::End => matches[matches.len() - 1].to_string(),
                })
                .collect(),
        };
        Some(pieces)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
