//! Tests for the three construction heuristics.

use cvrp_heuristics::config::{Algorithm, Config, RouteLimit};
use cvrp_heuristics::construction::utils::Assigned;
use cvrp_heuristics::construction::Construction;
use cvrp_heuristics::generator::{generate, GeneratorConfig};
use cvrp_heuristics::problem::{Customer, Problem};
use cvrp_heuristics::solution::Solution;

/// Depot at the origin and three customers on the unit square, demand 5 each.
fn create_square_problem(num_vehicles: usize) -> Problem {
    let customers = vec![
        Customer::new(0, 0.0, 0.0, 0),
        Customer::new(1, 1.0, 0.0, 5),
        Customer::new(2, 1.0, 1.0, 5),
        Customer::new(3, 0.0, 1.0, 5),
    ];
    Problem::new(customers, 10, num_vehicles)
}

/// One customer too large for any vehicle and one that fits.
fn create_oversize_problem() -> Problem {
    let customers = vec![
        Customer::new(0, 0.0, 0.0, 0),
        Customer::new(1, 5.0, 0.0, 20),
        Customer::new(2, 0.0, 5.0, 3),
    ];
    Problem::new(customers, 10, 2)
}

/// Two customers that each fill a vehicle of capacity `i64::MAX` on their own.
fn create_max_demand_problem() -> Problem {
    let customers = vec![
        Customer::new(0, 0.0, 0.0, 0),
        Customer::new(1, 1.0, 0.0, i64::MAX),
        Customer::new(2, 0.0, 1.0, i64::MAX),
    ];
    Problem::new(customers, i64::MAX, 2)
}

fn build(problem: &Problem, algorithm: Algorithm) -> Solution {
    Construction::new(problem, &Config::new().with_algorithm(algorithm)).build(algorithm)
}

fn route_sets(solution: &Solution) -> Vec<Vec<usize>> {
    solution.routes.iter().map(|r| r.customers.clone()).collect()
}

#[test]
fn test_clarke_square_scenario() {
    let problem = create_square_problem(2);
    let solution = build(&problem, Algorithm::Clarke);

    // (1, 2) and (2, 3) tie on the best saving; enumeration order picks (1, 2).
    assert_eq!(route_sets(&solution), vec![vec![1, 2], vec![3]]);
    assert_eq!(solution.total_demand(), 15);
    assert!(solution.respects_capacity(10));
    assert!(solution.dropped.is_empty());
    assert!((solution.routes[0].total_cost - (2.0 + 2f64.sqrt())).abs() < 1e-9);
    assert!((solution.routes[1].total_cost - 2.0).abs() < 1e-9);
}

#[test]
fn test_enhanced_square_scenario() {
    let problem = create_square_problem(2);
    let solution = build(&problem, Algorithm::Enhanced);

    assert_eq!(route_sets(&solution), vec![vec![1, 2], vec![3]]);
    assert_eq!(solution.total_demand(), 15);
    assert!(solution.respects_capacity(10));
}

#[test]
fn test_enhanced_extends_route_instead_of_opening_new_one() {
    let mut problem = create_square_problem(2);
    problem.vehicle_capacity = 15;
    let solution = build(&problem, Algorithm::Enhanced);

    assert_eq!(route_sets(&solution), vec![vec![1, 2, 3]]);
    assert!(solution.dropped.is_empty());
}

#[test]
fn test_nearest_square_scenario() {
    let problem = create_square_problem(2);
    let solution = build(&problem, Algorithm::Nearest);

    // 1 and 3 are equally close to the depot; the lower index wins.
    assert_eq!(route_sets(&solution), vec![vec![1, 2], vec![3]]);
    assert_eq!(solution.total_demand(), 15);
}

#[test]
fn test_fleet_cap_drops_customer() {
    let problem = create_square_problem(1);

    for algorithm in [Algorithm::Clarke, Algorithm::Enhanced] {
        let solution = build(&problem, algorithm);
        assert_eq!(solution.routes.len(), 1, "{}", algorithm);
        assert_eq!(solution.dropped, vec![3], "{}", algorithm);
    }

    // Nearest neighbor is unbounded by default.
    let solution = build(&problem, Algorithm::Nearest);
    assert_eq!(solution.routes.len(), 2);
    assert!(solution.dropped.is_empty());
}

#[test]
fn test_oversize_customer_is_dropped() {
    let problem = create_oversize_problem();

    for algorithm in Algorithm::ALL {
        let solution = build(&problem, algorithm);

        assert_eq!(solution.dropped, vec![1], "{}", algorithm);
        assert_eq!(route_sets(&solution), vec![vec![2]], "{}", algorithm);
        assert!(solution.respects_capacity(problem.vehicle_capacity));
    }
}

#[test]
fn test_zero_vehicles_terminates() {
    let problem = create_square_problem(0);

    for algorithm in [Algorithm::Clarke, Algorithm::Enhanced] {
        let solution = build(&problem, algorithm);
        assert!(solution.routes.is_empty(), "{}", algorithm);
        assert_eq!(solution.dropped, vec![1, 2, 3], "{}", algorithm);
    }

    let solution = build(&problem, Algorithm::Nearest);
    assert_eq!(solution.served_count(), 3);
}

#[test]
fn test_route_limit_override_bounds_nearest_neighbor() {
    let problem = create_square_problem(2);
    let config = Config::new()
        .with_algorithm(Algorithm::Nearest)
        .with_route_limit(RouteLimit::Fixed(1));

    let solution = Construction::new(&problem, &config).build(Algorithm::Nearest);

    assert_eq!(route_sets(&solution), vec![vec![1, 2]]);
    assert_eq!(solution.dropped, vec![3]);
}

#[test]
fn test_clarke_appends_to_first_route_with_room() {
    // Two far-apart pairs seed two routes; customer 5 fits only the second.
    let customers = vec![
        Customer::new(0, 0.0, 0.0, 0),
        Customer::new(1, 10.0, 0.0, 4),
        Customer::new(2, 11.0, 0.0, 4),
        Customer::new(3, 0.0, 10.0, 2),
        Customer::new(4, 0.0, 11.0, 2),
        Customer::new(5, 1.0, 1.0, 3),
    ];
    let problem = Problem::new(customers, 10, 2);
    let solution = build(&problem, Algorithm::Clarke);

    assert_eq!(route_sets(&solution), vec![vec![1, 2], vec![3, 4, 5]]);
    assert_eq!(solution.routes[1].total_demand, 7);
}

#[test]
fn test_seeding_respects_route_limit() {
    let problem = generate(&GeneratorConfig {
        customers: 12,
        vehicle_capacity: 100,
        num_vehicles: 2,
        seed: 3,
    });
    let construction = Construction::new(&problem, &Config::new());
    let mut assigned = Assigned::new();

    let routes = construction.seed_savings_pairs(&mut assigned);

    assert_eq!(routes.len(), 2);
    assert!(routes.iter().all(|r| r.len() == 2));
}

#[test]
fn test_constructions_preserve_invariants() {
    for seed in 0..10 {
        let problem = generate(&GeneratorConfig {
            customers: 25,
            vehicle_capacity: 30,
            num_vehicles: 4,
            seed,
        });

        for algorithm in Algorithm::ALL {
            let solution = build(&problem, algorithm);

            assert!(solution.respects_capacity(problem.vehicle_capacity));
            assert!(solution.is_partition(&problem));
            assert!(solution.routes.iter().all(|r| r.is_consistent(&problem)));
            assert_eq!(
                solution.served_count() + solution.dropped.len(),
                problem.get_customer_count()
            );
            if algorithm != Algorithm::Nearest {
                assert!(solution.routes.len() <= problem.num_vehicles);
            }
        }
    }
}

#[test]
fn test_constructions_are_deterministic() {
    let problem = generate(&GeneratorConfig {
        customers: 30,
        seed: 11,
        ..GeneratorConfig::default()
    });

    for algorithm in Algorithm::ALL {
        let first = build(&problem, algorithm);
        let second = build(&problem, algorithm);
        assert_eq!(first.routes, second.routes, "{}", algorithm);
    }
}

#[test]
fn test_demand_sums_past_i64_max_do_not_fit() {
    let problem = create_max_demand_problem();

    for algorithm in Algorithm::ALL {
        let solution = build(&problem, algorithm);

        assert_eq!(route_sets(&solution), vec![vec![1], vec![2]], "{}", algorithm);
        assert!(solution.dropped.is_empty(), "{}", algorithm);
        assert!(solution.respects_capacity(i64::MAX), "{}", algorithm);
    }
}

#[test]
fn test_nearest_keeps_filling_a_route_with_zero_demand_customers() {
    let customers = vec![
        Customer::new(0, 0.0, 0.0, 0),
        Customer::new(1, 1.0, 0.0, 0),
        Customer::new(2, 2.0, 0.0, 0),
    ];
    let problem = Problem::new(customers, 0, 1);

    let solution = build(&problem, Algorithm::Nearest);

    assert_eq!(route_sets(&solution), vec![vec![1, 2]]);
    assert!(solution.dropped.is_empty());
}

#[test]
fn test_nearest_continues_after_route_reaches_capacity() {
    let customers = vec![
        Customer::new(0, 0.0, 0.0, 0),
        Customer::new(1, 1.0, 0.0, 10),
        Customer::new(2, 2.0, 0.0, 0),
        Customer::new(3, 0.0, 5.0, 4),
    ];
    let problem = Problem::new(customers, 10, 2);

    let solution = build(&problem, Algorithm::Nearest);

    assert_eq!(route_sets(&solution), vec![vec![1, 2], vec![3]]);
}
