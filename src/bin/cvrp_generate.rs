//! Writes a random CVRP instance in the solver's input format.

use clap::Parser;
use env_logger::Env;
use log::info;
use std::fs;
use std::path::PathBuf;
use std::process;

use cvrp_heuristics::generator::{generate, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "cvrp_generate", version, about = "Generate a random CVRP instance")]
struct Args {
    /// Number of customers, depot excluded
    #[arg(short, long, default_value_t = 8)]
    customers: usize,
    /// Vehicle capacity
    #[arg(long, default_value_t = 30)]
    capacity: i64,
    /// Number of vehicles
    #[arg(short, long, default_value_t = 3)]
    vehicles: usize,
    /// Random seed
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let problem = generate(&GeneratorConfig {
        customers: args.customers,
        vehicle_capacity: args.capacity,
        num_vehicles: args.vehicles,
        seed: args.seed,
    });
    let instance = problem.to_string();

    match args.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, instance) {
                eprintln!("Error: cannot write {}: {}", path.display(), e);
                process::exit(1);
            }
            info!(
                "wrote {} customers to {}",
                problem.get_customer_count(),
                path.display()
            );
        }
        None => print!("{}", instance),
    }
}
