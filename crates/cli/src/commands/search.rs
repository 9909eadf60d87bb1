use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use motevo_sim::io::read_fasta;
use motevo_sim::search::{
    Discovery, GenerationSummary, Individual, KillReason, SearchBuilder, SearchConfig,
    SearchObserver,
};
use std::fs;

use crate::args::SearchArgs;
use crate::printing::{discovery_line, print_parameters, print_summary};

/// Forwards search events to the log, stdout and an optional progress bar.
struct LoggingObserver {
    json: bool,
    progress: Option<ProgressBar>,
}

impl LoggingObserver {
    fn emit(&self, line: String) {
        match &self.progress {
            Some(pb) => pb.println(line),
            None => println!("{line}"),
        }
    }
}

impl SearchObserver for LoggingObserver {
    fn on_discovery(&mut self, discovery: &Discovery) {
        log::info!(
            "generation {}: {} at {} (p = {:.3e}, {} occurrences)",
            discovery.generation,
            discovery.motif,
            discovery.position,
            discovery.probability,
            discovery.occurrences
        );
        if self.json {
            match serde_json::to_string(discovery) {
                Ok(line) => self.emit(line),
                Err(e) => log::error!("failed to serialize discovery: {e}"),
            }
        } else {
            self.emit(discovery_line(discovery));
        }
    }

    fn on_cull(&mut self, generation: usize, individual: &Individual, reason: KillReason) {
        log::trace!("generation {generation}: culled {individual} ({reason})");
    }

    fn on_generation(&mut self, summary: &GenerationSummary) {
        log::debug!(
            "generation {}: population {}, killed {}, reported {}, best {:.2}, mean {:.2}",
            summary.generation,
            summary.population,
            summary.killed,
            summary.discoveries,
            summary.best_fitness,
            summary.mean_fitness
        );
        if let Some(pb) = &self.progress {
            pb.inc(1);
        }
    }
}

fn load_config(args: &SearchArgs) -> Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            SearchConfig::from_json(&text)
                .with_context(|| format!("Failed to load config {}", path.display()))?
        }
        None => SearchConfig::default(),
    };
    args.apply(&mut config);
    Ok(config)
}

pub fn run_search(args: &SearchArgs) -> Result<()> {
    let config = load_config(args)?;
    let sequences = read_fasta(&args.input)
        .with_context(|| format!("Failed to read sequences from {}", args.input.display()))?;
    log::info!(
        "read {} sequences ({} bases) from {}",
        sequences.len(),
        sequences.iter().map(|s| s.len()).sum::<usize>(),
        args.input.display()
    );

    if !args.json {
        println!("🧬 Motevo - Motif Search");
        println!("============================================");
        print_parameters(&config);
    }

    let generations = config.generations;
    let mut search = SearchBuilder::new()
        .config(config)
        .sequences(sequences)
        .build()
        .context("Failed to initialize search")?;

    let progress = if args.progress {
        let pb = ProgressBar::new(generations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut observer = LoggingObserver {
        json: args.json,
        progress,
    };
    let summary = search.run(&mut observer).context("Search failed")?;

    if let Some(pb) = observer.progress.take() {
        pb.finish_with_message("Done");
    }

    if args.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}
