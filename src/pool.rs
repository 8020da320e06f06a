//! Pool route composer: one driver itinerary over several ride requests.
//!
//! The composer is a greedy heuristic, not an exact multi-stop solver.
//! It fixes the first request's pickup as the start, orders the remaining
//! stops by repeated nearest-neighbor selection, and stitches per-segment
//! shortest paths into one continuous route. On ambiguous inputs the
//! result can be longer than the true optimum; that trade is deliberate.

use std::collections::HashSet;

use tracing::warn;

use crate::error::ComposeError;
use crate::graph::RoadGraph;
use crate::metrics;
use crate::polyline::Polyline;
use crate::search::PathFinder;
use crate::traits::Ride;

/// Whether a stop picks a passenger up or drops them off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopKind {
    Pickup,
    Dropoff,
}

/// A stop in a pooled itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint<RideId, PassengerId> {
    pub ride_id: RideId,
    pub passenger_id: PassengerId,
    pub city: String,
    pub coords: (f64, f64),
    pub kind: StopKind,
}

/// The pickup or dropoff completed at a segment's destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopAction<RideId, PassengerId> {
    pub kind: StopKind,
    pub ride_id: RideId,
    pub passenger_id: PassengerId,
}

/// One stitched leg between consecutive stops of the itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment<RideId, PassengerId> {
    pub from: String,
    pub to: String,
    /// Shortest path for this leg, endpoints inclusive.
    pub path: Vec<String>,
    pub distance_km: f64,
    /// Stop completed on arrival, if a waypoint sits at `to`.
    pub action: Option<StopAction<RideId, PassengerId>>,
}

/// A composed multi-passenger route.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolItinerary<RideId, PassengerId> {
    /// Where the driver starts: the first request's pickup city.
    pub start_city: String,
    /// All pickups in visiting order.
    pub pickups: Vec<Waypoint<RideId, PassengerId>>,
    /// All dropoffs in visiting order. Same-destination rides stay an
    /// unordered batch in input order.
    pub dropoffs: Vec<Waypoint<RideId, PassengerId>>,
    /// Stops in route order, deduplicated by city.
    pub waypoints: Vec<Waypoint<RideId, PassengerId>>,
    pub segments: Vec<RouteSegment<RideId, PassengerId>>,
    /// Concatenated segment paths, junction duplicates elided.
    pub path: Vec<String>,
    /// One coordinate pair per node of `path`.
    pub polyline: Polyline,
    /// Sum of per-segment distances in kilometers.
    pub total_distance_km: f64,
}

/// Compose a single sequential route satisfying all ride requests.
///
/// Pickups come first, then dropoffs. The first request's pickup is the
/// start and is never reselected by distance; the driver is assumed to
/// already be there. Remaining stops are ordered greedily by direct-leg
/// distance from the last visited city, and every consecutive city pair
/// is then connected with a shortest-path search.
///
/// Rides whose dropoff coordinates cannot be recovered keep their pickup
/// but are excluded from the dropoff set, with a logged warning. An empty
/// request list and any unreachable segment are errors.
pub fn compose_pool_route<R: Ride>(
    finder: &PathFinder,
    rides: &[R],
) -> Result<PoolItinerary<R::Id, R::PassengerId>, ComposeError> {
    if rides.is_empty() {
        return Err(ComposeError::NoRides);
    }

    let graph = finder.graph();

    let mut pickups: Vec<Waypoint<R::Id, R::PassengerId>> = rides
        .iter()
        .map(|ride| Waypoint {
            ride_id: ride.id().clone(),
            passenger_id: ride.passenger_id().clone(),
            city: ride.pickup_city().to_string(),
            coords: ride.pickup_coords(),
            kind: StopKind::Pickup,
        })
        .collect();

    let mut dropoffs = Vec::with_capacity(rides.len());
    for ride in rides {
        match ride.dropoff_coords() {
            Some(coords) => dropoffs.push(Waypoint {
                ride_id: ride.id().clone(),
                passenger_id: ride.passenger_id().clone(),
                city: ride.dropoff_city().to_string(),
                coords,
                kind: StopKind::Dropoff,
            }),
            None => warn!(
                dropoff_city = ride.dropoff_city(),
                "excluding dropoff with unrecoverable coordinates"
            ),
        }
    }

    // The first request's pickup anchors the route.
    let mut ordered_pickups = vec![pickups.remove(0)];
    let start_city = ordered_pickups[0].city.clone();

    let mut current_city = start_city.clone();
    while !pickups.is_empty() {
        let stop = pickups.remove(nearest_stop(graph, &current_city, &pickups));
        current_city = stop.city.clone();
        ordered_pickups.push(stop);
    }

    let distinct_destinations = dropoffs
        .iter()
        .map(|stop| stop.city.as_str())
        .collect::<HashSet<_>>()
        .len();
    let ordered_dropoffs = if distinct_destinations <= 1 {
        // Shared destination: one batch, no ordering cost.
        dropoffs
    } else {
        let mut ordered = Vec::with_capacity(dropoffs.len());
        while !dropoffs.is_empty() {
            let stop = dropoffs.remove(nearest_stop(graph, &current_city, &dropoffs));
            current_city = stop.city.clone();
            ordered.push(stop);
        }
        ordered
    };

    // Route sequence with city dedup: a stop at an already-visited city
    // adds neither a sequence entry nor a waypoint.
    let mut sequence: Vec<String> = Vec::new();
    let mut waypoints: Vec<Waypoint<R::Id, R::PassengerId>> = Vec::new();
    for stop in ordered_pickups.iter().chain(ordered_dropoffs.iter()) {
        if !sequence.contains(&stop.city) {
            sequence.push(stop.city.clone());
            waypoints.push(stop.clone());
        }
    }

    let mut segments = Vec::new();
    let mut path: Vec<String> = Vec::new();
    let mut polyline = Polyline::default();
    let mut total_distance_km = 0.0;

    for leg in sequence.windows(2) {
        let (from, to) = (&leg[0], &leg[1]);
        let found = finder
            .find_path(from, to)
            .map_err(|source| ComposeError::Segment {
                from: from.clone(),
                to: to.clone(),
                source,
            })?;

        let distance_km = metrics::total_distance(graph, &found.path);
        let action = waypoints
            .iter()
            .find(|stop| &stop.city == to)
            .map(|stop| StopAction {
                kind: stop.kind,
                ride_id: stop.ride_id.clone(),
                passenger_id: stop.passenger_id.clone(),
            });

        let skip = usize::from(path.last() == found.path.first());
        path.extend_from_slice(&found.path[skip..]);
        polyline.join(found.polyline.points());

        total_distance_km += distance_km;
        segments.push(RouteSegment {
            from: from.clone(),
            to: to.clone(),
            path: found.path,
            distance_km,
            action,
        });
    }

    Ok(PoolItinerary {
        start_city,
        pickups: ordered_pickups,
        dropoffs: ordered_dropoffs,
        waypoints,
        segments,
        path,
        polyline,
        total_distance_km,
    })
}

/// Index of the stop with the smallest direct leg from `from`.
///
/// The leg is a two-city distance replay, not a search: a candidate with
/// no direct edge scores 0 and wins over any real edge. First-found
/// minimum wins ties. Only called with non-empty `stops`.
fn nearest_stop<RideId, PassengerId>(
    graph: &RoadGraph,
    from: &str,
    stops: &[Waypoint<RideId, PassengerId>],
) -> usize {
    let mut best = 0;
    let mut best_leg = f64::INFINITY;
    for (index, stop) in stops.iter().enumerate() {
        let leg = metrics::total_distance(graph, &[from, stop.city.as_str()]);
        if leg < best_leg {
            best_leg = leg;
            best = index;
        }
    }
    best
}
