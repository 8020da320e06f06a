//! Great-circle distance between geographic coordinates.
//!
//! Used both as edge-length ground truth for nearest-node lookup and as
//! the A* heuristic (straight-line distance never exceeds road distance
//! for sanely surveyed data, keeping the heuristic admissible).

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate haversine distance between two (latitude, longitude) points
/// in decimal degrees. Returns kilometers.
///
/// Purely numeric: NaN or out-of-range inputs propagate into the result,
/// validation is the caller's concern.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}
