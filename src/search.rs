//! A* shortest-path search with a memoizing route cache.
//!
//! The engine owns the graph and the cache. `find_path` takes `&self`, so
//! one engine can serve a concurrent caller pool; the cache mutex is the
//! only synchronization. Two callers racing on the same uncached pair may
//! both run the search (wasted work, identical results) but the map itself
//! stays consistent.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::RouteError;
use crate::graph::RoadGraph;
use crate::haversine::haversine_km;
use crate::polyline::Polyline;

/// A found path: node names, the parallel coordinate sequence, and the
/// accumulated road distance of the search.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Node names from start to goal, inclusive.
    pub path: Vec<String>,
    /// One coordinate pair per path node, same order.
    pub polyline: Polyline,
    /// Accumulated edge-weight cost in kilometers. 0 when start == goal.
    pub cost_km: f64,
}

/// Frontier entry ordered by `f = g + h`.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed to pop the
/// cheapest entry first. Entries with equal priority pop in unspecified
/// order; path costs are unaffected.
#[derive(Debug)]
struct FrontierEntry {
    priority: f64,
    node: String,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority.total_cmp(&other.priority) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.total_cmp(&self.priority)
    }
}

type RouteKey = (String, String);

/// Shortest-path engine over a static road graph.
pub struct PathFinder {
    graph: RoadGraph,
    cache: Mutex<HashMap<RouteKey, PathResult>>,
}

impl PathFinder {
    pub fn new(graph: RoadGraph) -> Self {
        Self {
            graph,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The underlying road graph.
    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    /// Shortest path from `start` to `goal`.
    ///
    /// Results are cached per directed `(start, goal)` pair; repeated
    /// calls return the stored result. `NoPath` outcomes are not cached:
    /// with a static graph re-searching a disconnected pair is harmless,
    /// and the cache only ever holds found paths.
    pub fn find_path(&self, start: &str, goal: &str) -> Result<PathResult, RouteError> {
        let key = (start.to_string(), goal.to_string());
        if let Some(hit) = self.lock_cache().get(&key) {
            debug!(start, goal, "route cache hit");
            return Ok(hit.clone());
        }

        if !self.graph.contains(start) {
            return Err(RouteError::UnknownNode(start.to_string()));
        }
        if !self.graph.contains(goal) {
            return Err(RouteError::UnknownNode(goal.to_string()));
        }

        let result = if start == goal {
            let coords = self.graph.coordinates(start)?;
            PathResult {
                path: vec![start.to_string()],
                polyline: Polyline::new(vec![coords]),
                cost_km: 0.0,
            }
        } else {
            self.search(start, goal)?
        };

        self.lock_cache().insert(key, result.clone());
        debug!(start, goal, cost_km = result.cost_km, "route cached");
        Ok(result)
    }

    /// Drop all cached routes.
    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    /// Number of cached routes.
    pub fn cache_len(&self) -> usize {
        self.lock_cache().len()
    }

    fn lock_cache(&self) -> MutexGuard<'_, HashMap<RouteKey, PathResult>> {
        // A poisoned cache only ever holds complete entries; keep serving it.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A* over the graph. Both endpoints are known to exist and differ.
    fn search(&self, start: &str, goal: &str) -> Result<PathResult, RouteError> {
        let goal_coords = self.graph.coordinates(goal)?;

        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry {
            priority: 0.0,
            node: start.to_string(),
        });

        let mut came_from: HashMap<String, Option<String>> = HashMap::new();
        came_from.insert(start.to_string(), None);
        let mut cost_so_far: HashMap<String, f64> = HashMap::new();
        cost_so_far.insert(start.to_string(), 0.0);

        while let Some(FrontierEntry { node: current, .. }) = frontier.pop() {
            if current == goal {
                break;
            }

            let Some(node) = self.graph.node(&current) else {
                continue;
            };
            let Some(&current_cost) = cost_so_far.get(&current) else {
                continue;
            };

            for (neighbor, &weight) in &node.neighbors {
                let new_cost = current_cost + weight;
                let cheaper = cost_so_far
                    .get(neighbor)
                    .map_or(true, |&known| new_cost < known);
                if !cheaper {
                    continue;
                }

                cost_so_far.insert(neighbor.clone(), new_cost);
                let Some(next) = self.graph.node(neighbor) else {
                    continue;
                };
                let priority = new_cost + haversine_km(next.coords, goal_coords);
                frontier.push(FrontierEntry {
                    priority,
                    node: neighbor.clone(),
                });
                came_from.insert(neighbor.clone(), Some(current.clone()));
            }
        }

        if !came_from.contains_key(goal) {
            return Err(RouteError::NoPath {
                start: start.to_string(),
                goal: goal.to_string(),
            });
        }

        // Walk the predecessor chain back from the goal.
        let mut path = Vec::new();
        let mut cursor = Some(goal.to_string());
        while let Some(node) = cursor {
            cursor = came_from.get(&node).cloned().flatten();
            path.push(node);
        }
        path.reverse();

        let cost_km = cost_so_far.get(goal).copied().unwrap_or(0.0);
        let points = path
            .iter()
            .filter_map(|name| self.graph.node(name))
            .map(|node| node.coords)
            .collect();

        Ok(PathResult {
            path,
            polyline: Polyline::new(points),
            cost_km,
        })
    }
}
