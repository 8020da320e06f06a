//! Builder for ride requests implementing the crate's `Ride` trait.

use pool_router::traits::Ride;

#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct TestId(pub String);

impl TestId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Ride request with builder-style setters and sensible defaults.
#[derive(Clone, Debug)]
pub struct TestRide {
    id: TestId,
    passenger_id: TestId,
    pickup_city: String,
    pickup_coords: (f64, f64),
    dropoff_city: String,
    dropoff_coords: Option<(f64, f64)>,
}

impl TestRide {
    pub fn new(id: &str, passenger: &str) -> Self {
        Self {
            id: TestId::new(id),
            passenger_id: TestId::new(passenger),
            pickup_city: String::new(),
            pickup_coords: (0.0, 0.0),
            dropoff_city: String::new(),
            dropoff_coords: None,
        }
    }

    pub fn pickup(mut self, city: &str, coords: (f64, f64)) -> Self {
        self.pickup_city = city.to_string();
        self.pickup_coords = coords;
        self
    }

    pub fn dropoff(mut self, city: &str, coords: (f64, f64)) -> Self {
        self.dropoff_city = city.to_string();
        self.dropoff_coords = Some(coords);
        self
    }

    /// Dropoff whose stored coordinate record could not be recovered.
    pub fn dropoff_unrecoverable(mut self, city: &str) -> Self {
        self.dropoff_city = city.to_string();
        self.dropoff_coords = None;
        self
    }
}

impl Ride for TestRide {
    type Id = TestId;
    type PassengerId = TestId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn passenger_id(&self) -> &Self::PassengerId {
        &self.passenger_id
    }

    fn pickup_city(&self) -> &str {
        &self.pickup_city
    }

    fn pickup_coords(&self) -> (f64, f64) {
        self.pickup_coords
    }

    fn dropoff_city(&self) -> &str {
        &self.dropoff_city
    }

    fn dropoff_coords(&self) -> Option<(f64, f64)> {
        self.dropoff_coords
    }
}
