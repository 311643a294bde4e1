//! Randomized checks of general query properties

mod common;

use railnet::{Distance, GraphError, ShortestRouteQuery};

const SEEDS: std::ops::Range<u64> = 0..20;

#[test]
fn two_town_distance_matches_direct_edge() {
    for seed in SEEDS {
        let network = common::random_network(seed, 6, 0.3, 9);
        for from in network.nodes() {
            for to in network.nodes() {
                let result = network.distance(&[from.label(), to.label()]);
                match from.edge_to(to.id) {
                    Some(edge) => assert_eq!(result.unwrap(), u64::from(edge.weight)),
                    None => assert!(matches!(result, Err(GraphError::NoSuchRoute))),
                }
            }
        }
    }
}

#[test]
fn trip_count_is_monotone_in_stops() {
    for seed in SEEDS {
        let network = common::random_network(seed, 5, 0.35, 9);
        let towns = common::town_names(&network);
        for start in &towns {
            for end in &towns {
                let mut previous = 0;
                for stops in 0..=5 {
                    let trips = network.number_of_trips(start, end, stops).unwrap();
                    assert!(trips >= previous, "seed {seed}: {start}->{end} at {stops} stops");
                    previous = trips;
                }
            }
        }
    }
}

#[test]
fn route_count_is_monotone_in_distance() {
    for seed in SEEDS {
        let network = common::random_network(seed, 5, 0.35, 9);
        let towns = common::town_names(&network);
        for start in &towns {
            for end in &towns {
                let mut previous = 0;
                for bound in (0..=30).step_by(3) {
                    let routes = network.amount_of_routes(start, end, bound).unwrap();
                    assert!(routes >= previous, "seed {seed}: {start}->{end} below {bound}");
                    previous = routes;
                }
            }
        }
    }
}

#[test]
fn round_trip_without_cycle_is_unreachable() {
    for seed in SEEDS {
        let network = common::random_network(seed, 6, 0.25, 9);
        for node in network.nodes() {
            let label = node.label();
            // Any cycle through a town has a simple version of at most n hops
            let on_cycle = network
                .number_of_trips(label, label, network.node_count())
                .unwrap()
                > 0;
            let shortest = network.shortest_route(label, label).unwrap();

            assert_eq!(shortest.is_reachable(), on_cycle, "seed {seed}: {label}");
            assert_ne!(shortest, Distance::ZERO);
        }
    }
}

#[test]
fn shortest_route_path_measures_its_distance() {
    for seed in SEEDS {
        let network = common::random_network(seed, 6, 0.3, 9);
        let towns = common::town_names(&network);
        for start in &towns {
            for end in &towns {
                let route = ShortestRouteQuery::between(start, end).execute(&network).unwrap();
                if let Some(distance) = route.distance.value() {
                    assert_eq!(route.path.first(), Some(start));
                    assert_eq!(route.path.last(), Some(end));
                    assert_eq!(network.distance(&route.path).unwrap(), distance);
                }
            }
        }
    }
}

#[test]
fn shortest_route_never_beats_any_exact_two_hop_route() {
    for seed in SEEDS {
        let network = common::random_network(seed, 5, 0.4, 9);
        for a in network.nodes() {
            for edge in a.edges() {
                let b = network.node(edge.to).unwrap();
                for second in b.edges() {
                    let c = network.node(second.to).unwrap().label();
                    let two_hop = u64::from(edge.weight) + u64::from(second.weight);
                    let best = network.shortest_route(a.label(), c).unwrap();
                    assert!(best.value().unwrap() <= two_hop, "seed {seed}");
                }
            }
        }
    }
}
