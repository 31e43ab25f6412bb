use clap::Parser;
use miette::Result;
use mtf2json::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => mtf2json::cli::convert::run(args)?,
        Commands::Completions(args) => mtf2json::cli::completions::run(args)?,
    }

    Ok(())
}
