//! Integration tests for ag-graph.

use ag_core::{Airport, AirportId};
use ag_graph::{GraphBuilder, find_path};
use proptest::prelude::*;

fn airport(id: u32, code: &str, name: &str) -> Airport {
    Airport::new(AirportId::new(id), code, name, "City")
}

/// Four airports, one route pair recorded in both directions, one recorded
/// once, two components.
fn sample_graph() -> ag_graph::Graph {
    let a = airport(1, "AAA", "Alpha Intl");
    let b = airport(2, "BBB", "Beta Field");
    let c = airport(3, "CCC", "Gamma Muni");
    let d = airport(4, "DDD", "Delta Regional");

    let mut builder = GraphBuilder::with_vertices([a, b, c, d]);
    builder.add_route(AirportId::new(1), AirportId::new(2), 3);
    builder.add_route(AirportId::new(2), AirportId::new(1), 2);
    builder.add_route(AirportId::new(3), AirportId::new(4), 1);
    builder.build().unwrap()
}

#[test]
fn directional_aggregation_and_component_split() {
    let graph = sample_graph();

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(
        graph.edge_weight(AirportId::new(1), AirportId::new(2)),
        Some(5)
    );
    assert_eq!(
        graph.edge_weight(AirportId::new(3), AirportId::new(4)),
        Some(1)
    );

    // no edge across the two components
    for left in [1, 2] {
        for right in [3, 4] {
            assert!(!graph.are_adjacent(AirportId::new(left), AirportId::new(right)));
        }
    }
}

#[test]
fn path_within_and_across_components() {
    let graph = sample_graph();

    let path = find_path(&graph, AirportId::new(1), AirportId::new(2))
        .unwrap()
        .unwrap();
    let codes: Vec<&str> = path.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, vec!["AAA", "BBB"]);

    assert_eq!(
        find_path(&graph, AirportId::new(1), AirportId::new(4)).unwrap(),
        None
    );
}

#[test]
fn listing_is_sorted_and_stable() {
    let graph = sample_graph();
    let first: Vec<String> = graph.vertices().iter().map(|a| a.name.clone()).collect();
    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(first, sorted);

    let second: Vec<String> = graph.vertices().iter().map(|a| a.name.clone()).collect();
    assert_eq!(first, second);
}

#[test]
fn path_length_matches_hop_distance() {
    // 1-2, 2-3, 3-4, 4-5, and a 2-5 shortcut: distance 1..5 is 3 hops
    let airports: Vec<Airport> = (1..=5)
        .map(|i| airport(i, &format!("A{i:02}"), &format!("Airport {i:02}")))
        .collect();
    let mut builder = GraphBuilder::with_vertices(airports);
    for i in 1..5 {
        builder.add_route(AirportId::new(i), AirportId::new(i + 1), 1);
    }
    builder.add_route(AirportId::new(2), AirportId::new(5), 1);
    let graph = builder.build().unwrap();

    let path = find_path(&graph, AirportId::new(1), AirportId::new(5))
        .unwrap()
        .unwrap();
    let ids: Vec<u32> = path.iter().map(|a| a.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 5]);
}

fn graph_with_query() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, usize, usize)> {
    (2usize..12).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n), 0..40),
            0..n,
            0..n,
        )
    })
}

fn build_random(n: usize, routes: &[(usize, usize)]) -> ag_graph::Graph {
    let airports: Vec<Airport> = (0..n)
        .map(|i| {
            airport(
                i as u32,
                &format!("A{i:02}"),
                &format!("Airport {i:02}"),
            )
        })
        .collect();
    let mut builder = GraphBuilder::with_vertices(airports);
    for &(u, v) in routes {
        builder.add_route(AirportId::new(u as u32), AirportId::new(v as u32), 1);
    }
    builder.build().unwrap()
}

proptest! {
    #[test]
    fn bfs_paths_are_simple_adjacent_and_symmetric(
        (n, routes, from, to) in graph_with_query()
    ) {
        let graph = build_random(n, &routes);
        let from = AirportId::new(from as u32);
        let to = AirportId::new(to as u32);

        let forward = find_path(&graph, from, to).unwrap();
        let backward = find_path(&graph, to, from).unwrap();

        match forward {
            Some(path) => {
                prop_assert_eq!(path.first().unwrap().id, from);
                prop_assert_eq!(path.last().unwrap().id, to);

                // simple: no vertex repeats
                let mut ids: Vec<AirportId> = path.iter().map(|a| a.id).collect();
                ids.sort();
                ids.dedup();
                prop_assert_eq!(ids.len(), path.len());

                // every step is an edge
                for pair in path.windows(2) {
                    prop_assert!(graph.are_adjacent(pair[0].id, pair[1].id));
                }

                // hop count is symmetric in the endpoints
                let backward = backward.unwrap();
                prop_assert_eq!(backward.len(), path.len());
            }
            None => {
                prop_assert!(backward.is_none());
                prop_assert_ne!(from, to);
            }
        }
    }
}
