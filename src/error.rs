//! Error types for graph loading, path search, and pool composition.

/// Errors raised while loading or validating a road graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Could not read the graph resource
    #[error("failed to read graph file: {0}")]
    Io(#[from] std::io::Error),

    /// Graph resource is not valid JSON
    #[error("failed to parse graph data: {0}")]
    Json(#[from] serde_json::Error),

    /// Graph resource contains no nodes
    #[error("graph contains no nodes")]
    Empty,

    /// A neighbor entry names a node absent from the graph
    #[error("node '{node}' lists unknown neighbor '{neighbor}'")]
    UnknownNeighbor { node: String, neighbor: String },

    /// An edge weight is negative or not finite
    #[error("edge {node} -> {neighbor} has invalid weight {weight}")]
    BadWeight {
        node: String,
        neighbor: String,
        weight: f64,
    },
}

/// Errors raised by node lookups and shortest-path search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Named node is absent from the graph
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// Search exhausted the frontier without reaching the goal
    #[error("no path from {start} to {goal}")]
    NoPath { start: String, goal: String },
}

/// Errors raised by the pool route composer.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    /// Composition was invoked with no ride requests
    #[error("no ride requests supplied")]
    NoRides,

    /// A segment of the stitched route could not be found
    #[error("no route segment from {from} to {to}")]
    Segment {
        from: String,
        to: String,
        #[source]
        source: RouteError,
    },
}
