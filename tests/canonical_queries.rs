//! Reference answers for the five-town network

mod common;

use railnet::{Distance, GraphError, ShortestRouteQuery, TripQuery};

#[test]
fn distance_of_exact_routes() {
    let network = common::canonical();

    assert_eq!(network.distance(&["A", "B", "C"]).unwrap(), 9);
    assert_eq!(network.distance(&["A", "D"]).unwrap(), 5);
    assert_eq!(network.distance(&["A", "D", "C"]).unwrap(), 13);
    assert_eq!(network.distance(&["A", "E", "B", "C", "D"]).unwrap(), 22);
}

#[test]
fn distance_without_direct_edge_is_no_such_route() {
    let network = common::canonical();

    let err = network.distance(&["A", "E", "D"]).unwrap_err();
    assert!(matches!(err, GraphError::NoSuchRoute));
    assert_eq!(err.to_string(), "NO SUCH ROUTE");
}

#[test]
fn trips_from_c_to_c_with_at_most_three_stops() {
    let network = common::canonical();
    assert_eq!(network.number_of_trips("C", "C", 3).unwrap(), 2);
}

#[test]
fn trips_from_a_to_c_with_exactly_four_stops() {
    let network = common::canonical();
    let trips = TripQuery::between("A", "C").exact_stops(4).execute(&network).unwrap();
    assert_eq!(trips, 3);
}

#[test]
fn shortest_routes() {
    let network = common::canonical();

    assert_eq!(network.shortest_route("A", "C").unwrap(), Distance::new(9));
    assert_eq!(network.shortest_route("B", "B").unwrap(), Distance::new(9));
}

#[test]
fn shortest_route_reports_towns() {
    let network = common::canonical();
    let route = ShortestRouteQuery::between("D", "D").execute(&network).unwrap();

    // D-C-D is 16, D-E-B-C-D is 21
    assert_eq!(route.distance, Distance::new(16));
    assert_eq!(route.path, vec!["D", "C", "D"]);
}

#[test]
fn routes_below_distance_bound() {
    let network = common::canonical();

    assert_eq!(network.amount_of_routes("A", "D", 22).unwrap(), 3);
    assert_eq!(network.amount_of_routes("C", "C", 30).unwrap(), 7);
}

#[test]
fn unknown_towns_are_invalid_arguments() {
    let network = common::canonical();

    assert!(matches!(network.number_of_trips("A", "Q", 3), Err(GraphError::InvalidArgument(_))));
    assert!(matches!(network.amount_of_routes("Q", "A", 30), Err(GraphError::InvalidArgument(_))));
    assert!(matches!(network.shortest_route("", "A"), Err(GraphError::InvalidArgument(_))));
}

#[test]
fn queries_do_not_disturb_each_other() {
    let network = common::canonical();

    let first = network.shortest_route("B", "B").unwrap();
    let _ = network.amount_of_routes("C", "C", 30).unwrap();
    let _ = network.shortest_route("A", "E").unwrap();
    assert_eq!(network.shortest_route("B", "B").unwrap(), first);
}
