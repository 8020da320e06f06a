//! Coordinate sequences for route geometries.
//!
//! A polyline is the decoded (latitude, longitude) sequence that runs
//! alongside a path's node names. It is also the storage format for
//! route geometry handed to or recovered from external callers: an
//! explicit JSON list of pairs, parsed with serde. Stored coordinate
//! text is data, never evaluated code.

use serde::{Deserialize, Serialize};

/// A route geometry as a decoded coordinate sequence.
///
/// Serializes transparently as a list of `[lat, lon]` pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a polyline from decoded (latitude, longitude) points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Parse a stored coordinate record.
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Encode as a JSON list of pairs.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    /// Last point, if any.
    pub fn last(&self) -> Option<(f64, f64)> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append another geometry, eliding a duplicated junction point.
    ///
    /// When consecutive route segments share their junction node, the
    /// second segment starts with the point the first one ended on; that
    /// point is skipped so the stitched line never repeats it.
    pub fn join(&mut self, segment: &[(f64, f64)]) {
        let skip = match (self.points.last(), segment.first()) {
            (Some(last), Some(first)) if last == first => 1,
            _ => 0,
        };
        self.points.extend_from_slice(&segment[skip..]);
    }
}
