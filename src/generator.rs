//! Seeded random instance generation.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::problem::{Customer, Problem};

/// Parameters of a generated instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub customers: usize,
    pub vehicle_capacity: i64,
    pub num_vehicles: usize,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            customers: 8,
            vehicle_capacity: 30,
            num_vehicles: 3,
            seed: 0,
        }
    }
}

/// Generate an instance: depot at (50, 50), customers uniform in
/// [10, 90)², demand uniform in `1..=max(1, capacity / 3)`.
///
/// The same config always yields the same instance.
pub fn generate(config: &GeneratorConfig) -> Problem {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let max_demand = (config.vehicle_capacity / 3).max(1);

    let mut customers = Vec::with_capacity(config.customers + 1);
    customers.push(Customer::new(0, 50.0, 50.0, 0));

    for id in 1..=config.customers {
        let x = rng.gen_range(10.0..90.0);
        let y = rng.gen_range(10.0..90.0);
        let demand = rng.gen_range(1..=max_demand);
        customers.push(Customer::new(id as i64, x, y, demand));
    }

    Problem::new(customers, config.vehicle_capacity, config.num_vehicles)
}
