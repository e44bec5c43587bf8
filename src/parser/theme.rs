//! Theme file parser.
//!
//! Parses the line-oriented colour-list format into a [`ThemeConfig`].

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{IkonError, Result};
use crate::types::ThemeConfig;

/// Read and parse a theme file from disk.
pub fn parse_theme_file(path: &Path) -> Result<ThemeConfig> {
    let source = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => IkonError::ConfigNotFound {
            path: path.to_path_buf(),
            help: Some("Create it with `ikon init`".to_string()),
        },
        _ => IkonError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })?;

    parse_theme(&source, path)
}

/// Parse theme source text. `origin` is only used in error reports.
pub fn parse_theme(source: &str, origin: &Path) -> Result<ThemeConfig> {
    // Blank lines never carry meaning; trailing semicolons are decoration.
    let mut lines = source
        .lines()
        .map(|line| line.trim().trim_end_matches(';'))
        .filter(|line| !line.is_empty());

    let name = lines.next().ok_or_else(|| IkonError::ConfigEmpty {
        path: origin.to_path_buf(),
    })?;

    let mut theme = ThemeConfig::new(name);

    for line in lines {
        if let Some((name, value)) = colour_definition(line) {
            theme.define(name, value);
        }
    }

    if theme.is_empty() {
        return Err(IkonError::NoColours {
            path: origin.to_path_buf(),
        });
    }

    Ok(theme)
}

/// Match a `--name: value` line; anything else yields `None`.
fn colour_definition(line: &str) -> Option<(&str, &str)> {
    if !line.starts_with("--") {
        return None;
    }
    let (name, value) = line.split_once(':')?;
    Some((name.trim().trim_start_matches('-'), value.trim()))
}
