use std::error::Error;
use std::fs;

use clap::Parser;

use petri::{ascii, PopulationStats, SimConfig, Simulator};

#[derive(Parser, Debug)]
#[command(name = "petri")]
#[command(about = "Run the cellular-automaton simulation headless")]
struct Args {
    /// Number of grid rows
    #[arg(short = 'd', long, default_value = "32")]
    depth: usize,

    /// Number of grid columns
    #[arg(short = 'w', long, default_value = "48")]
    width: usize,

    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of generations to simulate
    #[arg(short, long, default_value = "100")]
    generations: u32,

    /// Print a population report every N generations
    #[arg(long, default_value = "10")]
    print_every: u32,

    /// Dump an ASCII view of the final grid to stdout
    #[arg(long)]
    ascii: bool,

    /// Export the per-generation stats history as JSON
    #[arg(long)]
    export_stats: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let config = SimConfig {
        depth: args.depth,
        width: args.width,
        seed: args.seed.unwrap_or_else(rand::random),
        ..SimConfig::default()
    };
    eprintln!("Seed: {}", config.seed);

    let mut sim = Simulator::new(&config);
    let mut history = Vec::new();

    eprintln!("{}", PopulationStats::compute(&sim).report());
    for _ in 0..args.generations {
        sim.sim_one_generation();
        let stats = PopulationStats::compute(&sim);
        if args.print_every > 0 && sim.generation() % args.print_every == 0 {
            eprintln!("{}", stats.report());
        }
        if args.export_stats.is_some() {
            history.push(stats);
        }
    }

    if args.ascii {
        println!("{}", ascii::render(sim.field()));
    }

    if let Some(path) = args.export_stats {
        fs::write(&path, serde_json::to_string_pretty(&history)?)?;
        eprintln!("Stats history written to {path}");
    }

    Ok(())
}
