//! Palette command implementation.
//!
//! Prints the colours a theme file defines. Status goes to stderr;
//! stdout carries only the palette itself so it can be piped.

use std::path::PathBuf;

use clap::Args;

use crate::error::{IkonError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_theme_file;

/// Print the colours a theme file defines
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Theme file to read
    #[arg(default_value = "colors.txt")]
    pub file: PathBuf,

    /// Emit JSON instead of colour lines
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let theme = parse_theme_file(&args.file)?;

    printer.status(
        "Parsed",
        &format!(
            "{} from {} (theme '{}')",
            plural(theme.len(), "colour", "colours"),
            display_path(&args.file),
            theme.name
        ),
    );

    if args.json {
        let json = serde_json::to_string_pretty(&theme).map_err(|e| IkonError::Build {
            message: format!("Failed to serialize theme: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for (name, value) in theme.colours() {
            println!("--{}: {};", name, value);
        }
    }

    Ok(())
}
