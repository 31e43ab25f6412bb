pub mod completions;
pub mod convert;

use clap::{Parser, Subcommand};

/// mtf2json - MegaMek stat block converter
#[derive(Parser, Debug)]
#[command(name = "mtf2json")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert MTF stat blocks to structured JSON
    Convert(convert::ConvertArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
