// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Layered configuration: CLI flags over `gramify.toml` over built-ins.
//!
//! Every value is resolved and validated once at startup; the resolved
//! structs are immutable afterwards. Validation failures are fatal
//! before any output file is created.

use std::path::Path;

use serde::Deserialize;

use crate::cgram::filter::FilterSpec;
use crate::cgram::segmenter::Bounds;
use crate::cli::{CharacterArgs, CharsetArgs, WordArgs};
use crate::error::ConfigError;

pub const WORD_MIN: usize = 1;
pub const WORD_MAX: usize = 10;
pub const CHARACTER_MIN: usize = 3;
pub const CHARACTER_MAX: usize = 8;
pub const CHARACTER_MAX_ROLLING: usize = 32;
pub const CHARSET_MIN: usize = 3;
pub const CHARSET_MAX: usize = 32;

/// Raw `gramify.toml` contents.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub word: ModeSection,
    pub character: CharacterSection,
    pub charset: CharsetSection,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ModeSection {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct CharacterSection {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub rolling: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct CharsetSection {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub mixed: Option<bool>,
    pub filter: Vec<String>,
    pub rulify: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// Load `gramify.toml`: an explicit `--config` path wins, otherwise the
/// file is discovered upward from the current directory.
pub fn load_file_config(explicit: Option<&Path>) -> Result<FileConfig, ConfigError> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => std::env::current_dir()
            .ok()
            .and_then(|dir| crate::discovery::find_config(&dir)),
    };
    match path {
        Some(p) => FileConfig::load(&p),
        None => Ok(FileConfig::default()),
    }
}

/// Resolved word-mode settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordConfig {
    pub min: usize,
    pub max: usize,
}

/// Resolved character-mode settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterConfig {
    pub min: usize,
    pub max: usize,
    pub rolling: bool,
}

/// Resolved charset-mode settings.
#[derive(Debug, Clone)]
pub struct CharsetConfig {
    pub bounds: Bounds,
    pub mixed: bool,
    pub filters: Vec<FilterSpec>,
    pub rulify: bool,
}

pub fn resolve_word(args: &WordArgs, file: &FileConfig) -> Result<WordConfig, ConfigError> {
    let min = args.min_length.or(file.word.min_length).unwrap_or(WORD_MIN);
    let max = args.max_length.or(file.word.max_length).unwrap_or(WORD_MAX);
    check_bounds(min, max)?;
    Ok(WordConfig { min, max })
}

pub fn resolve_character(
    args: &CharacterArgs,
    file: &FileConfig,
) -> Result<CharacterConfig, ConfigError> {
    let rolling = args.rolling || file.character.rolling.unwrap_or(false);
    let min = args
        .min_length
        .or(file.character.min_length)
        .unwrap_or(CHARACTER_MIN);
    let max = args.max_length.or(file.character.max_length).unwrap_or(if rolling {
        CHARACTER_MAX_ROLLING
    } else {
        CHARACTER_MAX
    });
    check_bounds(min, max)?;
    Ok(CharacterConfig { min, max, rolling })
}

pub fn resolve_charset(args: &CharsetArgs, file: &FileConfig) -> Result<CharsetConfig, ConfigError> {
    let min = args
        .min_length
        .or(file.charset.min_length)
        .unwrap_or(CHARSET_MIN);
    let max = args
        .max_length
        .or(file.charset.max_length)
        .unwrap_or(CHARSET_MAX);
    check_bounds(min, max)?;
    let mixed = args.mixed || file.charset.mixed.unwrap_or(false);
    let rulify = args.rulify || file.charset.rulify.unwrap_or(false);
    let raw = if args.filter.is_empty() {
        &file.charset.filter
    } else {
        &args.filter
    };
    let filters = raw
        .iter()
        .map(|s| s.trim().parse::<FilterSpec>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CharsetConfig {
        bounds: Bounds::new(min, max),
        mixed,
        filters,
        rulify,
    })
}

fn check_bounds(min: usize, max: usize) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedBounds { min, max });
    }
    Ok(())
}

/// Validate the input path before any sink is created.
pub fn check_input(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ConfigError::InputMissing(path.to_path_buf()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
