//! Init command implementation.
//!
//! Writes a starter theme file so `ikon build` has something to chew on.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{IkonError, Result};
use crate::output::{display_path, Printer};

/// Write a starter theme file
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Theme name written on the first line
    #[arg(default_value = "mytheme")]
    pub name: String,

    /// Path of the theme file to create
    #[arg(long, default_value = "colors.txt")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    if args.path.exists() && !args.force {
        return Err(IkonError::Build {
            message: format!("{} already exists", display_path(&args.path)),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let content = format!(
        "{}\n\n--primary: #4a90d9;\n--secondary: #50c878;\n--accent: #f5a623;\n",
        args.name
    );

    fs::write(&args.path, content).map_err(|e| IkonError::Io {
        path: args.path.clone(),
        message: format!("Failed to write theme file: {}", e),
    })?;

    printer.success(
        "Created",
        &format!("{} (theme '{}', 3 colours)", display_path(&args.path), args.name),
    );

    Ok(())
}
