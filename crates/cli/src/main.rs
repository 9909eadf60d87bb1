mod args;
mod commands;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::{ConsensusArgs, SearchArgs};
use commands::{consensus, search};

/// Motevo: genetic search for over-represented DNA motifs
///
/// Candidate motifs are anchored in a shuffled copy of the input and compete
/// on how much more often they occur than shuffled versions of themselves.
/// Log verbosity follows RUST_LOG (default: info).
#[derive(Parser, Debug)]
#[command(name = "motevo")]
#[command(author, version, about = "Finds over-represented DNA motifs with a genetic search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a motif search.
    ///
    /// Prints every discovery as it is reported, then a summary.
    Search(Box<SearchArgs>),

    /// Count a motif on both strands and print the consensus of its matches.
    Consensus(ConsensusArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => search::run_search(&args)?,
        Commands::Consensus(args) => consensus::run_consensus(&args)?,
    }

    Ok(())
}
