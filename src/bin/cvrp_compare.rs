//! Runs every construction heuristic on one instance and ranks them by cost.

use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use std::process;

use cvrp_heuristics::compare_algorithms;
use cvrp_heuristics::config::Config;
use cvrp_heuristics::error::Result;
use cvrp_heuristics::problem::Problem;

#[derive(Parser, Debug)]
#[command(name = "cvrp_compare", version, about = "Compare the CVRP heuristics on one instance")]
struct Args {
    /// Instance file
    input_file: PathBuf,
    /// Print the ranking as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let problem = Problem::from_file(&args.input_file)?;
    let ranking = compare_algorithms(&problem, &Config::new());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
        return Ok(());
    }

    println!(
        "{} customers, capacity {}, {} vehicles, total demand {}",
        problem.get_customer_count(),
        problem.vehicle_capacity,
        problem.num_vehicles,
        problem.total_demand()
    );
    for (rank, summary) in ranking.iter().enumerate() {
        println!("{}. {}", rank + 1, summary.format());
    }

    Ok(())
}
