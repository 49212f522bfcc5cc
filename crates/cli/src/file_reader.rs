// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized corpus reading with size-based strategy.
//!
//! - < 64KB: direct read into memory
//! - >= 64KB: memory-mapped I/O (leaked corpora run to gigabytes)
//!
//! The corpus is exposed as raw bytes; per-line decoding (including the
//! `$HEX[...]` convention) lives in [`crate::corpus`].
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. Stale data on concurrent modification is acceptable for a batch run
#![allow(unsafe_code)]

use std::fs::{self, File};
use std::io;
use std::path::Path;

use memmap2::Mmap;

/// Files at or above this size are memory-mapped instead of read whole.
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Raw corpus bytes, either owned or memory-mapped.
pub enum CorpusBytes {
    /// Small corpus read into memory.
    Owned(Vec<u8>),
    /// Large corpus memory-mapped.
    Mapped(Mmap),
}

impl CorpusBytes {
    /// Read a corpus using the appropriate strategy based on size.
    pub fn read(path: &Path) -> io::Result<Self> {
        let meta = fs::metadata(path)?;

        if meta.len() < MMAP_THRESHOLD {
            Ok(CorpusBytes::Owned(fs::read(path)?))
        } else {
            let file = File::open(path)?;
            // SAFETY: File handle is valid (just opened), we don't mutate the
            // mapped memory, and stale data on concurrent modification is
            // acceptable for a batch run.
            let mmap = unsafe { Mmap::map(&file)? };
            Ok(CorpusBytes::Mapped(mmap))
        }
    }

    /// The corpus content as one byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            CorpusBytes::Owned(v) => v,
            CorpusBytes::Mapped(m) => m,
        }
    }
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
