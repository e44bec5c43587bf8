pub mod build;
pub mod completions;
pub mod init;
pub mod palette;
pub mod validate;

use clap::{Parser, Subcommand};

/// ikon - Themed icon-set generator
#[derive(Parser, Debug)]
#[command(name = "ikon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the full icon set and archive for a theme
    Build(build::BuildArgs),

    /// Write a starter theme file
    Init(init::InitArgs),

    /// Print the colours a theme file defines
    Palette(palette::PaletteArgs),

    /// Validate a theme file without rendering
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
