//! Random call generation for headless runs

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::types::{Direction, Floor, MAX_FLOOR};

/// Lowest building that can produce a non-empty trip
pub const MIN_BUILDING_FLOORS: Floor = 2;

/// A call as a rider would press it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedCall {
    pub origin: Floor,
    pub direction: i32,
    pub destination: Floor,
}

/// Produces random valid calls for a building of a given height
pub struct TrafficGenerator {
    floors: Floor,
    call_rate: f64,
    /// Optional seeded RNG for reproducible simulations
    rng: Option<StdRng>,
}

impl TrafficGenerator {
    /// `floors` is clamped into `[MIN_BUILDING_FLOORS, MAX_FLOOR]` and
    /// `call_rate` into `[0, 1]`
    pub fn new(floors: Floor, call_rate: f64, seed: Option<u64>) -> Self {
        let call_rate = if call_rate.is_nan() {
            0.0
        } else {
            call_rate.clamp(0.0, 1.0)
        };

        Self {
            floors: floors.clamp(MIN_BUILDING_FLOORS, MAX_FLOOR),
            call_rate,
            rng: seed.map(StdRng::seed_from_u64),
        }
    }

    pub fn floors(&self) -> Floor {
        self.floors
    }

    /// Get a random floor in the building, using seeded RNG if available
    fn random_floor(&mut self) -> Floor {
        let range = 0..self.floors;
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    fn roll(&mut self) -> bool {
        let p = self.call_rate;
        match &mut self.rng {
            Some(rng) => rng.random_bool(p),
            None => rand::rng().random_bool(p),
        }
    }

    /// A call with distinct origin and destination
    pub fn random_call(&mut self) -> GeneratedCall {
        let origin = self.random_floor();
        let mut destination = self.random_floor();
        while destination == origin {
            destination = self.random_floor();
        }

        GeneratedCall {
            origin,
            direction: Direction::of(destination - origin).unit(),
            destination,
        }
    }

    /// Roll for a new call this tick
    pub fn next_call(&mut self) -> Option<GeneratedCall> {
        if self.roll() {
            Some(self.random_call())
        } else {
            None
        }
    }
}
