// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! gramify binary entry point.

mod cmd_character;
mod cmd_charset;
mod cmd_word;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gramify::cli::{Cli, Command};
use gramify::error::{ConfigError, ExitCode};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let result = match &cli.command {
        Command::Word(args) => cmd_word::run(&cli, args),
        Command::Character(args) => cmd_character::run(&cli, args),
        Command::Charset(args) => cmd_charset::run(&cli, args),
    };

    match result {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = if err.is::<ConfigError>() {
                ExitCode::Config
            } else {
                ExitCode::Failure
            };
            code.into()
        }
    }
}

/// Diagnostics go to stderr, filtered by GRAMIFY_LOG.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("GRAMIFY_LOG"))
        .with_writer(std::io::stderr)
        .init();
}

/// Every command ends with the same reminder; deduplication and
/// frequency sorting stay external.
pub(crate) fn print_sort_hint() {
    println!();
    println!("Don't forget to de-duplicate and sort the output. Recommended command:");
    println!(
        "cat output_file.txt | sort | uniq -c | sort -rn | grep -oP '^ *[0-9]+ \\K.*' > sorted_output.txt"
    );
}
