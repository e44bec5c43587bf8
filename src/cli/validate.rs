//! Validate command implementation.
//!
//! Parses a theme file and runs validation checks without rendering
//! anything. Exits non-zero when any error-severity diagnostic exists.

use std::path::PathBuf;

use clap::Args;

use crate::error::{IkonError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_theme_file;
use crate::validation::validate_theme;

/// Validate a theme file without rendering
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Theme file to validate
    #[arg(default_value = "colors.txt")]
    pub file: PathBuf,

    /// Emit diagnostics as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    let theme = parse_theme_file(&args.file)?;
    let result = validate_theme(&theme);

    if args.json {
        let json = serde_json::to_string_pretty(&result).map_err(|e| IkonError::Build {
            message: format!("Failed to serialize diagnostics: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for diagnostic in result.iter() {
            let label = printer.severity(
                &diagnostic.severity.to_string(),
                diagnostic.severity == crate::validation::Severity::Error,
            );
            eprintln!("{}[{}]: {}", label, diagnostic.code, diagnostic.message);
            if let Some(help) = &diagnostic.help {
                eprintln!("  {}", printer.dim(help));
            }
        }
    }

    if result.has_errors() {
        return Err(IkonError::Validation {
            message: format!(
                "{} failed validation with {}",
                display_path(&args.file),
                plural(result.error_count(), "error", "errors")
            ),
            help: None,
        });
    }

    printer.success(
        "Validated",
        &format!(
            "{} ({}, {})",
            display_path(&args.file),
            plural(theme.len(), "colour", "colours"),
            plural(result.warning_count(), "warning", "warnings")
        ),
    );

    Ok(())
}
