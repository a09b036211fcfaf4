//! Pickup requests (calls) handled by the elevator bank

use super::types::{is_valid_floor, Direction, Floor};

/// A call from a rider: where they are, where they want to go, and whether
/// they are already inside the elevator serving them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupRequest {
    pub origin_floor: Floor,
    pub direction: Direction,
    pub destination_floor: Floor,
    /// Set once the owning elevator reaches `origin_floor`; never cleared
    pub boarded: bool,
    /// Trip created by an elevator override rather than a rider's call
    pub forced: bool,
}

impl PickupRequest {
    /// A call still waiting at its origin floor
    pub fn new(origin_floor: Floor, destination_floor: Floor) -> Self {
        Self {
            origin_floor,
            direction: Direction::of(destination_floor - origin_floor),
            destination_floor,
            boarded: false,
            forced: false,
        }
    }

    /// A trip whose rider is already inside the elevator
    pub fn new_boarded(origin_floor: Floor, destination_floor: Floor) -> Self {
        Self {
            boarded: true,
            ..Self::new(origin_floor, destination_floor)
        }
    }

    /// The trip synthesized when an idle elevator is overridden
    pub fn new_forced(origin_floor: Floor, destination_floor: Floor) -> Self {
        Self {
            forced: true,
            ..Self::new_boarded(origin_floor, destination_floor)
        }
    }

    /// Both floors are in range, the trip is non-empty and the direction
    /// matches the trip
    pub fn is_valid(&self) -> bool {
        is_valid_floor(self.origin_floor)
            && is_valid_floor(self.destination_floor)
            && self.origin_floor != self.destination_floor
            && self.direction == Direction::of(self.destination_floor - self.origin_floor)
    }

    /// The rider is inside and the elevator stands at their destination
    pub fn is_fulfilled_at(&self, floor: Floor) -> bool {
        self.boarded && self.destination_floor == floor
    }

    /// The rider is still waiting and the elevator stands at their floor
    pub fn is_waiting_at(&self, floor: Floor) -> bool {
        !self.boarded && self.origin_floor == floor
    }
}
