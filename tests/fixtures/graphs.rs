//! Synthetic road graphs with hand-checkable shortest paths.

use pool_router::graph::RoadGraph;

/// Three-city corridor: Vijayawada - Guntur - Tenali, symmetric edges.
///
/// The only route between the outer cities runs through Guntur:
/// 32 km + 28 km = 60 km.
pub fn corridor() -> RoadGraph {
    RoadGraph::from_json_str(
        r#"{
            "Vijayawada": {"coords": [16.5062, 80.648], "neighbors": {"Guntur": 32}},
            "Guntur": {"coords": [16.3067, 80.4365], "neighbors": {"Vijayawada": 32, "Tenali": 28}},
            "Tenali": {"coords": [16.2428, 80.6425], "neighbors": {"Guntur": 28}}
        }"#,
    )
    .expect("corridor graph should parse")
}

/// The corridor plus an isolated island node with no edges at all.
pub fn with_island() -> RoadGraph {
    RoadGraph::from_json_str(
        r#"{
            "Vijayawada": {"coords": [16.5062, 80.648], "neighbors": {"Guntur": 32}},
            "Guntur": {"coords": [16.3067, 80.4365], "neighbors": {"Vijayawada": 32, "Tenali": 28}},
            "Tenali": {"coords": [16.2428, 80.6425], "neighbors": {"Guntur": 28}},
            "Island": {"coords": [18.0, 83.0], "neighbors": {}}
        }"#,
    )
    .expect("island graph should parse")
}

/// Two nodes joined by a single one-directional edge.
pub fn one_way() -> RoadGraph {
    RoadGraph::from_json_str(
        r#"{
            "A": {"coords": [0.0, 0.0], "neighbors": {"B": 4.0}},
            "B": {"coords": [0.001, 0.0], "neighbors": {}}
        }"#,
    )
    .expect("one-way graph should parse")
}

/// Six-node mesh with alternate routes and one asymmetric edge (E -> A).
///
/// Coordinates are compressed to fractions of a degree so the
/// straight-line heuristic (at most ~0.5 km) never exceeds any edge
/// weight (at least 1 km): the heuristic is admissible and consistent,
/// and search results can be checked against plain Dijkstra.
pub fn mesh() -> RoadGraph {
    RoadGraph::from_json_str(
        r#"{
            "A": {"coords": [0.0, 0.0], "neighbors": {"B": 2.0, "C": 5.0}},
            "B": {"coords": [0.001, 0.0], "neighbors": {"C": 2.0, "D": 7.0}},
            "C": {"coords": [0.001, 0.001], "neighbors": {"D": 3.0, "E": 6.0}},
            "D": {"coords": [0.002, 0.001], "neighbors": {"F": 4.0}},
            "E": {"coords": [0.002, 0.0], "neighbors": {"F": 1.0, "A": 3.0}},
            "F": {"coords": [0.003, 0.001], "neighbors": {}}
        }"#,
    )
    .expect("mesh graph should parse")
}
