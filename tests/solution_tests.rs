//! Tests for route bookkeeping and result formatting.

use cvrp_heuristics::problem::{Customer, Problem};
use cvrp_heuristics::solution::{Route, Solution};
use cvrp_heuristics::utils::{solution_to_string, write_solution};

fn create_test_problem() -> Problem {
    let customers = vec![
        Customer::new(0, 0.0, 0.0, 0),
        Customer::new(1, 3.0, 0.0, 2),
        Customer::new(2, 3.0, 4.0, 3),
        Customer::new(3, 0.0, 4.0, 4),
    ];
    Problem::new(customers, 6, 2)
}

#[test]
fn test_route_evaluation() {
    let problem = create_test_problem();
    let route = Route::from_customers(vec![1, 2, 3], &problem);

    // 3 + 4 + 3 + 4
    assert!((route.total_cost - 14.0).abs() < 1e-9);
    assert_eq!(route.total_demand, 9);
    assert!(route.is_consistent(&problem));
}

#[test]
fn test_can_accept_rejects_overflowing_demand() {
    let problem = create_test_problem();
    let route = Route::from_customers(vec![1], &problem);

    assert!(route.can_accept(4, 6));
    assert!(!route.can_accept(5, 6));
    assert!(!route.can_accept(i64::MAX, i64::MAX));
    assert!(Route::new().can_accept(i64::MAX, i64::MAX));
}

#[test]
fn test_empty_route_costs_nothing() {
    let problem = create_test_problem();
    let route = Route::from_customers(Vec::new(), &problem);

    assert_eq!(route.total_cost, 0.0);
    assert_eq!(route.total_demand, 0);
    assert!(route.is_empty());
}

#[test]
fn test_route_insert_and_push_keep_cache_fresh() {
    let problem = create_test_problem();
    let mut route = Route::new();

    route.push(1, &problem);
    route.push(3, &problem);
    route.insert(1, 2, &problem);

    assert_eq!(route.customers, vec![1, 2, 3]);
    assert!((route.total_cost - 14.0).abs() < 1e-9);
    assert_eq!(route.total_demand, 9);
    assert!(!route.can_accept(1, problem.vehicle_capacity));
}

#[test]
fn test_stale_route_is_inconsistent() {
    let problem = create_test_problem();
    let mut route = Route::from_customers(vec![1, 2], &problem);
    route.customers.push(3);

    assert!(!route.is_consistent(&problem));
    route.evaluate(&problem);
    assert!(route.is_consistent(&problem));
}

#[test]
fn test_reversed_segment_is_a_new_route() {
    let problem = create_test_problem();
    let route = Route::from_customers(vec![1, 3, 2], &problem);
    let candidate = route.with_reversed_segment(0, 2, &problem);

    assert_eq!(route.customers, vec![1, 3, 2]);
    assert_eq!(candidate.customers, vec![1, 2, 3]);
    assert!(candidate.is_consistent(&problem));
}

#[test]
fn test_partition_and_capacity_checks() {
    let problem = create_test_problem();
    let mut solution = Solution::new();
    solution.routes = vec![
        Route::from_customers(vec![1, 2], &problem),
        Route::from_customers(vec![3], &problem),
    ];

    assert!(solution.is_partition(&problem));
    assert!(solution.respects_capacity(problem.vehicle_capacity));

    solution.routes[1] = Route::from_customers(vec![3, 2], &problem);
    assert!(!solution.is_partition(&problem));
    assert!(!solution.respects_capacity(problem.vehicle_capacity));

    solution.routes[1] = Route::from_customers(vec![0], &problem);
    assert!(!solution.is_partition(&problem));
}

#[test]
fn test_collect_dropped() {
    let problem = create_test_problem();
    let mut solution = Solution::new();
    solution.routes = vec![Route::from_customers(vec![2], &problem)];
    solution.collect_dropped(&problem);

    assert_eq!(solution.dropped, vec![1, 3]);
    assert_eq!(solution.served_count(), 1);
}

#[test]
fn test_output_format() {
    let problem = create_test_problem();
    let mut solution = Solution::new();
    solution.routes = vec![
        Route::from_customers(vec![1, 2], &problem),
        Route::from_customers(vec![3], &problem),
    ];

    // 0 -> 1 -> 2 -> 0 = 3 + 4 + 5
    assert_eq!(solution_to_string(&solution).unwrap(), "2\n12 5 2 1 2\n8 4 1 3\n");

    let mut buf = Vec::new();
    write_solution(&Solution::new(), &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "0\n");
}

#[test]
fn test_json_roundtrip_keeps_routes() {
    let problem = create_test_problem();
    let mut solution = Solution::new();
    solution.routes = vec![Route::from_customers(vec![3, 1], &problem)];
    solution.collect_dropped(&problem);

    let json = serde_json::to_string(&solution).unwrap();
    let parsed: Solution = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.routes, solution.routes);
    assert_eq!(parsed.dropped, vec![2]);
}
