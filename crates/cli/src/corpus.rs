// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Corpus line decoding.
//!
//! Splits raw input bytes on `\n`, strips trailing `\r`, decodes
//! `$HEX[...]` records, and replaces invalid UTF-8 lossily. Lines whose
//! hex payload does not parse are skipped entirely.

use std::borrow::Cow;

/// Marker prefix for hex-encoded records.
const HEX_MARKER: &[u8] = b"$HEX[";

/// Iterator over decoded corpus lines.
pub struct Lines<'a> {
    rest: &'a [u8],
    done: bool,
}

/// Iterate the decoded lines of a corpus.
pub fn lines(data: &[u8]) -> Lines<'_> {
    Lines {
        rest: data,
        done: data.is_empty(),
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }
            let raw = match memchr::memchr(b'\n', self.rest) {
                Some(at) => {
                    let line = &self.rest[..at];
                    self.rest = &self.rest[at + 1..];
                    if self.rest.is_empty() {
                        self.done = true;
                    }
                    line
                }
                None => {
                    self.done = true;
                    std::mem::take(&mut self.rest)
                }
            };
            match decode(strip_cr(raw)) {
                Some(line) => return Some(line),
                None => {
                    tracing::debug!("skipping record with malformed $HEX payload");
                }
            }
        }
    }
}

fn strip_cr(mut line: &[u8]) -> &[u8] {
    while let Some(rest) = line.strip_suffix(b"\r") {
        line = rest;
    }
    line
}

/// Decode one raw record. `None` means the record is malformed and the
/// caller must skip it.
fn decode(raw: &[u8]) -> Option<Cow<'_, str>> {
    if let Some(payload) = raw.strip_prefix(HEX_MARKER) {
        let payload = payload.strip_suffix(b"]")?;
        let bytes = hex::decode(payload).ok()?;
        return Some(Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()));
    }
    Some(String::from_utf8_lossy(raw))
}

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod tests;
