//! Route metrics: distance replay over recorded paths, nearest-node lookup.

use crate::graph::RoadGraph;
use crate::haversine::haversine_km;

/// Total road distance of a recorded path, in kilometers.
///
/// This replays declared edges, it does not re-search: consecutive pairs
/// without a direct edge contribute 0. The sum is therefore meaningful
/// for paths produced by the search engine. The pool composer leans on
/// the zero-for-non-adjacent behavior when ranking candidate stops by
/// direct leg distance.
///
/// Paths with fewer than two nodes have distance 0.
pub fn total_distance<S: AsRef<str>>(graph: &RoadGraph, path: &[S]) -> f64 {
    path.windows(2)
        .map(|leg| {
            graph
                .node(leg[0].as_ref())
                .and_then(|node| node.neighbors.get(leg[1].as_ref()))
                .copied()
                .unwrap_or(0.0)
        })
        .sum()
}

/// Node whose coordinates are closest (great-circle) to the given point.
///
/// Ties keep the earliest node in the graph's canonical (sorted) order.
/// `None` only for an empty graph, which the graph constructors reject.
pub fn nearest_node<'g>(graph: &'g RoadGraph, lat: f64, lon: f64) -> Option<&'g str> {
    let mut best: Option<(&str, f64)> = None;
    for (name, data) in graph.iter() {
        let dist = haversine_km((lat, lon), data.coords);
        if best.map_or(true, |(_, nearest)| dist < nearest) {
            best = Some((name, dist));
        }
    }
    best.map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> RoadGraph {
        RoadGraph::bundled().expect("bundled graph should parse")
    }

    #[test]
    fn sums_declared_edges() {
        let graph = bundled();
        let path = ["Vijayawada", "Guntur", "Tenali"];
        assert_eq!(total_distance(&graph, &path), 60.0);
    }

    #[test]
    fn short_paths_are_zero() {
        let graph = bundled();
        assert_eq!(total_distance::<&str>(&graph, &[]), 0.0);
        assert_eq!(total_distance(&graph, &["Guntur"]), 0.0);
    }

    #[test]
    fn missing_edges_contribute_zero() {
        let graph = bundled();
        // No direct Vijayawada -> Tenali edge; only the Guntur -> Tenali leg counts.
        assert_eq!(total_distance(&graph, &["Vijayawada", "Tenali"]), 0.0);
        assert_eq!(
            total_distance(&graph, &["Vijayawada", "Tenali", "Guntur"]),
            28.0
        );
    }

    #[test]
    fn unknown_nodes_contribute_zero() {
        let graph = bundled();
        assert_eq!(total_distance(&graph, &["Atlantis", "Guntur"]), 0.0);
    }

    #[test]
    fn nearest_node_at_exact_coords() {
        let graph = bundled();
        let (lat, lon) = graph.coordinates("Tenali").unwrap();
        assert_eq!(nearest_node(&graph, lat, lon), Some("Tenali"));
    }

    #[test]
    fn nearest_node_matches_brute_force() {
        let graph = bundled();
        let probes = [(16.4, 80.5), (17.9, 83.3), (13.9, 79.0), (15.0, 78.0)];
        for (lat, lon) in probes {
            let expected = graph
                .iter()
                .map(|(name, data)| (name, haversine_km((lat, lon), data.coords)))
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(name, _)| name);
            assert_eq!(nearest_node(&graph, lat, lon), expected, "probe {lat},{lon}");
        }
    }

    #[test]
    fn ties_keep_earliest_in_sorted_order() {
        let json = r#"{
            "B": {"coords": [10.0, 10.0], "neighbors": {}},
            "A": {"coords": [10.0, 10.0], "neighbors": {}}
        }"#;
        let graph = RoadGraph::from_json_str(json).unwrap();
        assert_eq!(nearest_node(&graph, 10.0, 10.0), Some("A"));
    }
}
