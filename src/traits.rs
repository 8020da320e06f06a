//! Core domain traits for pool composition.
//!
//! Ride requests are owned by the caller's data model (a web or storage
//! layer); the composer only reads them. Concrete apps implement `Ride`
//! for their own request types.

use std::hash::Hash;

/// Unique identifier for caller entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A single pickup/dropoff request to be folded into a pooled itinerary.
pub trait Ride {
    type Id: Id;
    type PassengerId: Id;

    fn id(&self) -> &Self::Id;

    fn passenger_id(&self) -> &Self::PassengerId;

    /// Pickup location as a graph node name.
    fn pickup_city(&self) -> &str;

    /// Pickup coordinates (lat, lon).
    fn pickup_coords(&self) -> (f64, f64);

    /// Dropoff location as a graph node name.
    fn dropoff_city(&self) -> &str;

    /// Dropoff coordinates, if the stored coordinate record could be
    /// recovered. `None` drops this ride from the dropoff set.
    fn dropoff_coords(&self) -> Option<(f64, f64)>;
}
