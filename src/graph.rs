//! Static road graph: named locations with coordinates and weighted adjacency.
//!
//! Adjacency is directed exactly as declared in the data file. The bundled
//! dataset lists some edges in one direction only; they are never mirrored,
//! so the search must treat every declared edge as one-directional.
//!
//! The graph is immutable after construction. All structural problems
//! (dangling neighbor names, bad weights, an empty node set) are rejected
//! at load time so lookups during search cannot fail structurally.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{GraphError, RouteError};

/// Road graph shipped with the crate, covering major cities of
/// Andhra Pradesh. Versioned data: edit the JSON, not this module.
const BUNDLED_GRAPH: &str = include_str!("../data/andhra_pradesh.json");

/// A single location: coordinates plus directed weighted adjacency.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeData {
    /// (latitude, longitude) in decimal degrees.
    pub coords: (f64, f64),
    /// Neighbor name to road distance in kilometers.
    #[serde(default)]
    pub neighbors: BTreeMap<String, f64>,
}

/// Static lookup table from node name to coordinates and neighbors.
///
/// `BTreeMap` keeps iteration in sorted name order, which is the graph's
/// canonical order: `node_names` comes out sorted for free and tie-breaks
/// in nearest-node scans are reproducible.
#[derive(Debug, Clone)]
pub struct RoadGraph {
    nodes: BTreeMap<String, NodeData>,
}

impl RoadGraph {
    /// Build a graph from a node table, validating it.
    pub fn new(nodes: BTreeMap<String, NodeData>) -> Result<Self, GraphError> {
        if nodes.is_empty() {
            return Err(GraphError::Empty);
        }

        for (name, data) in &nodes {
            for (neighbor, &weight) in &data.neighbors {
                if !nodes.contains_key(neighbor) {
                    return Err(GraphError::UnknownNeighbor {
                        node: name.clone(),
                        neighbor: neighbor.clone(),
                    });
                }
                if !weight.is_finite() || weight < 0.0 {
                    return Err(GraphError::BadWeight {
                        node: name.clone(),
                        neighbor: neighbor.clone(),
                        weight,
                    });
                }
            }
        }

        Ok(Self { nodes })
    }

    /// Load the graph bundled with the crate.
    pub fn bundled() -> Result<Self, GraphError> {
        Self::from_json_str(BUNDLED_GRAPH)
    }

    /// Parse a graph from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, GraphError> {
        let nodes: BTreeMap<String, NodeData> = serde_json::from_str(json)?;
        Self::new(nodes)
    }

    /// Load a graph from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Look up a node. `None` if the name is unknown.
    pub fn node(&self, name: &str) -> Option<&NodeData> {
        self.nodes.get(name)
    }

    /// Whether the graph contains a node with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Neighbor table of a node.
    pub fn neighbors(&self, name: &str) -> Result<&BTreeMap<String, f64>, RouteError> {
        self.nodes
            .get(name)
            .map(|data| &data.neighbors)
            .ok_or_else(|| RouteError::UnknownNode(name.to_string()))
    }

    /// Coordinates of a node.
    pub fn coordinates(&self, name: &str) -> Result<(f64, f64), RouteError> {
        self.nodes
            .get(name)
            .map(|data| data.coords)
            .ok_or_else(|| RouteError::UnknownNode(name.to_string()))
    }

    /// All node names in sorted order.
    pub fn node_names(&self) -> Vec<&str> {
        self.nodes.keys().map(String::as_str).collect()
    }

    /// Iterate nodes in canonical (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeData)> {
        self.nodes.iter().map(|(name, data)| (name.as_str(), data))
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a constructed graph; `new` rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
