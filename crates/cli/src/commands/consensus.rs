use anyhow::{Context, Result};
use motevo_sim::base::Sequence;
use motevo_sim::io::read_fasta;

use crate::args::ConsensusArgs;

pub fn run_consensus(args: &ConsensusArgs) -> Result<()> {
    let motif: Sequence = args
        .motif
        .parse()
        .with_context(|| format!("Invalid motif '{}'", args.motif))?;
    if motif.is_empty() {
        anyhow::bail!("Motif must not be empty");
    }
    let sequences = read_fasta(&args.input)
        .with_context(|| format!("Failed to read sequences from {}", args.input.display()))?;

    let windows: Vec<Sequence> = sequences
        .iter()
        .filter(|s| s.len() >= motif.len())
        .flat_map(|s| s.matching_windows(&motif, args.tolerance))
        .collect();
    log::debug!("{} windows match {motif}", windows.len());

    println!("Motif: {motif}");
    println!("Tolerance: {}", args.tolerance);
    println!("Matches: {}", windows.len());
    if windows.is_empty() {
        println!("Consensus: (none)");
    } else {
        println!("Consensus: {}", Sequence::find_consensus(&windows));
    }
    Ok(())
}
