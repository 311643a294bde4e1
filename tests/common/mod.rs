//! Shared fixtures for railnet integration tests

#![allow(dead_code)]

use railnet::{NetworkSpec, RailNetwork, RouteSpec};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The five-town reference network
pub fn canonical() -> RailNetwork {
    NetworkSpec::canonical()
        .build()
        .expect("canonical network builds")
}

/// A random network with `towns` nodes named T0, T1, ... and positive weights
///
/// Each ordered pair gets a route with probability `density`.
pub fn random_network(seed: u64, towns: usize, density: f64, max_weight: u32) -> RailNetwork {
    let mut rng = StdRng::seed_from_u64(seed);
    let names: Vec<String> = (0..towns).map(|i| format!("T{i}")).collect();

    let mut spec = NetworkSpec {
        towns: names.clone(),
        routes: Vec::new(),
    };
    for from in &names {
        for to in &names {
            if rng.gen_bool(density) {
                spec.routes
                    .push(RouteSpec::new(from.clone(), to.clone(), rng.gen_range(1..=max_weight)));
            }
        }
    }
    spec.build().expect("random network builds")
}

pub fn town_names(network: &RailNetwork) -> Vec<String> {
    network.nodes().map(|n| n.label().to_string()).collect()
}
