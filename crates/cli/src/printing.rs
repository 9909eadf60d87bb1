use motevo_sim::search::{Discovery, RunSummary, SearchConfig};

pub fn print_parameters(config: &SearchConfig) {
    println!("\n📋 Search Configuration");
    println!("  • Motif size: {} [-m, --motif-size]", config.motif_size);
    println!("  • Chunk size: {} [--chunk-size]", config.chunk_size);
    println!("  • Population size: {} [-n, --population-size]", config.population_size);
    println!("  • Generations: {} [-g, --generations]", config.generations);
    println!("  • Tolerance: {} [-t, --tolerance]", config.tolerance);
    match config.seed {
        Some(seed) => println!("  • Random seed: {seed} [--seed]"),
        None => println!("  • Random seed: random [--seed]"),
    }

    println!("\n⚖️  Selection");
    println!("  • Fitness floor: {}", config.fitness_floor);
    println!("  • Max score: {}", config.max_score);
    println!("  • Report age: {}", config.report_age);
    println!("  • Thinness threshold: {}", config.thinness_threshold);
    println!("  • Mutation probability: {}", config.mutation_probability);
    println!();
}

pub fn discovery_line(discovery: &Discovery) -> String {
    format!(
        "gen {:>5}  pos {:>7}  {}  consensus {}  n={}  p={:.3e}",
        discovery.generation,
        discovery.position,
        discovery.motif,
        discovery.consensus,
        discovery.occurrences,
        discovery.probability,
    )
}

pub fn print_summary(summary: &RunSummary) {
    println!("\n✓ Search complete!");
    println!("  Generations: {}", summary.generations);
    println!("  Discoveries: {}", summary.discoveries);
    println!("  Culled: {}", summary.killed);
    println!("  Final population: {}", summary.final_population);
}
