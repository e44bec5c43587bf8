use clap::Parser;
use ikon::cli::{Cli, Commands};
use ikon::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => ikon::cli::build::run(args, &printer)?,
        Commands::Init(args) => ikon::cli::init::run(args, &printer)?,
        Commands::Palette(args) => ikon::cli::palette::run(args, &printer)?,
        Commands::Validate(args) => ikon::cli::validate::run(args, &printer)?,
        Commands::Completions(args) => ikon::cli::completions::run(args)?,
    }

    Ok(())
}
