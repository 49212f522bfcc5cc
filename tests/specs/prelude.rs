//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running gramify in a scratch directory and
//! inspecting the files it produces.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;

use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the gramify binary
pub fn gramify_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("gramify"))
}

/// A scratch working directory holding a corpus file. Commands run with
/// it as their cwd, so output files land inside it and are cleaned up
/// with it.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn with_corpus(content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("corpus.txt"), content).unwrap();
        // A .git marker stops config discovery from escaping the
        // scratch directory.
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Workspace { dir }
    }

    /// A gramify invocation rooted in this workspace.
    pub fn cmd(&self) -> Command {
        let mut cmd = gramify_cmd();
        cmd.current_dir(self.dir.path());
        cmd
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).unwrap()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    pub fn write(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).unwrap();
    }
}
