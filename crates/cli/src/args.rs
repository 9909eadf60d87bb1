use clap::Args;
use motevo_sim::search::SearchConfig;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Input sequences (one sequence per line, '>' headers ignored)
    #[arg(short, long)]
    pub input: PathBuf,

    /// JSON file with search parameters
    ///
    /// Flags given on the command line override values from the file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Motif length
    #[arg(short = 'm', long)]
    pub motif_size: Option<usize>,

    /// Background chunk length
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Population size
    #[arg(short = 'n', long)]
    pub population_size: Option<usize>,

    /// Number of generations
    #[arg(short = 'g', long)]
    pub generations: Option<usize>,

    /// Allowed mismatches when counting occurrences
    #[arg(short = 't', long)]
    pub tolerance: Option<usize>,

    /// Random seed (default: random)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print discoveries and the run summary as JSON lines
    #[arg(long)]
    pub json: bool,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}

impl SearchArgs {
    /// Overwrite `config` with every flag that was given.
    pub fn apply(&self, config: &mut SearchConfig) {
        if let Some(size) = self.motif_size {
            config.motif_size = size;
        }
        if let Some(size) = self.chunk_size {
            config.chunk_size = size;
        }
        if let Some(size) = self.population_size {
            config.population_size = size;
        }
        if let Some(generations) = self.generations {
            config.generations = generations;
        }
        if let Some(tolerance) = self.tolerance {
            config.tolerance = tolerance;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

#[derive(Args, Debug)]
pub struct ConsensusArgs {
    /// Input sequences (one sequence per line, '>' headers ignored)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Motif to look for (IUPAC symbols)
    #[arg(short, long)]
    pub motif: String,

    /// Allowed mismatches
    #[arg(short = 't', long, default_value = "0")]
    pub tolerance: usize,
}
