//! Command line entry point: `vrp_solver <algorithm> <input_file>`.

use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use cvrp_heuristics::config::{Algorithm, Config};
use cvrp_heuristics::error::Result;
use cvrp_heuristics::utils::write_solution;
use cvrp_heuristics::Solver;

#[derive(Parser, Debug)]
#[command(
    name = "vrp_solver",
    version,
    about = "Construct and improve CVRP routes with a savings, nearest-neighbor or scored-insertion heuristic"
)]
struct Args {
    /// Construction heuristic: enhanced, nearest or clarke
    algorithm: String,
    /// Instance file: `numPoints capacity numVehicles` then `x y demand id` per point
    input_file: PathBuf,
    /// Print the solution as JSON instead of the plain-text format
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(1);
            }
        },
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let algorithm: Algorithm = args.algorithm.parse()?;
    let config = Config::new().with_algorithm(algorithm);
    let mut solver = Solver::from_file(&args.input_file, config)?;

    let solution = solver.run();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &solution)?;
        writeln!(out)?;
    } else {
        write_solution(&solution, &mut out)?;
    }
    out.flush()?;

    Ok(())
}
