// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Turns text corpora into candidate grams for dictionary-based cracking tools
#[derive(Parser)]
#[command(name = "gramify")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "GRAMIFY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Word n-grams: token windows over the whole corpus
    Word(WordArgs),
    /// Character k-grams: sliding substrings per line
    Character(CharacterArgs),
    /// Charset c-grams: runs split at character-class boundaries
    Charset(CharsetArgs),
}

#[derive(clap::Args)]
pub struct WordArgs {
    /// Input corpus, one record per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output name; gram files derive from it (n_<OUTPUT>)
    #[arg(value_name = "OUTPUT")]
    pub output: String,

    /// Minimum gram size in tokens
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Maximum gram size in tokens
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,
}

#[derive(clap::Args)]
pub struct CharacterArgs {
    /// Input corpus, one record per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output name; gram files derive from it (k_*.<OUTPUT>)
    #[arg(value_name = "OUTPUT")]
    pub output: String,

    /// Minimum gram length in characters
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Maximum gram length in characters
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// One length-sorted output file instead of start/mid/end groups
    #[arg(long)]
    pub rolling: bool,
}

#[derive(clap::Args)]
pub struct CharsetArgs {
    /// Input corpus, one record per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output name; gram files derive from it (c_<OUTPUT>, c_<filter>_<OUTPUT>)
    #[arg(value_name = "OUTPUT")]
    pub output: String,

    /// Minimum gram length in characters
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Maximum gram length in characters
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Add the mixed-case and mixed-case-numeric passes
    #[arg(long)]
    pub mixed: bool,

    /// Filter patterns: solo, duo, duostart, duoend, or start/mid/end
    /// sequences such as startmidend
    #[arg(long, value_name = "SPECS", value_delimiter = ',')]
    pub filter: Vec<String>,

    /// Emit positional rule strings instead of filter wordlists
    #[arg(long)]
    pub rulify: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
