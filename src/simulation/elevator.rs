//! Elevator movement logic for the simulation
//!
//! Each elevator owns the calls it has committed to and decides on its own
//! where to go next. The dispatcher only decides which elevator gets a call.

use log::debug;

use super::error::ElevatorError;
use super::request::PickupRequest;
use super::status::ElevatorStatus;
use super::types::{is_valid_floor, Direction, ElevatorId, Floor};

/// Riders moved during a single elevator step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElevatorStepResult {
    /// Riders that boarded on the new floor
    pub picked_up: usize,
    /// Riders that reached their destination and left
    pub dropped_off: usize,
    /// Forced trips that reached their destination
    pub forced_arrivals: usize,
}

/// A single elevator in the bank
#[derive(Debug, Clone)]
pub struct SimElevator {
    id: ElevatorId,
    current_floor: Floor,
    /// `None` while idle
    destination_floor: Option<Floor>,
    direction: Direction,
    /// Committed calls in assignment order
    requests: Vec<PickupRequest>,
}

impl SimElevator {
    pub fn new(id: ElevatorId) -> Self {
        Self::new_at(id, 0)
    }

    pub fn new_at(id: ElevatorId, current_floor: Floor) -> Self {
        Self {
            id,
            current_floor,
            destination_floor: None,
            direction: Direction::Idle,
            requests: Vec::new(),
        }
    }

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn destination_floor(&self) -> Option<Floor> {
        self.destination_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn requests(&self) -> &[PickupRequest] {
        &self.requests
    }

    pub fn is_idle(&self) -> bool {
        self.direction == Direction::Idle
    }

    /// Read-only snapshot for display
    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus {
            id: self.id,
            current_floor: self.current_floor,
            destination_floor: self.destination_floor,
            direction: self.direction,
        }
    }

    /// Whether this elevator can take `request` right now
    ///
    /// An idle elevator takes anything. A moving one only takes calls in its
    /// own direction whose origin is still ahead, and never while it is on
    /// its way to collect a rider who wants to go the other way.
    pub fn can_serve(&self, request: &PickupRequest) -> bool {
        if self.is_idle() {
            return true;
        }

        if let Some(head) = self.requests.first() {
            if !head.boarded && head.direction == self.direction.opposite() {
                return false;
            }
        }

        self.direction == request.direction
            && Direction::of(request.origin_floor - self.current_floor) == self.direction
    }

    /// Distance in floors from this elevator to the given floor
    pub fn distance_to(&self, floor: Floor) -> Floor {
        (self.current_floor - floor).abs()
    }

    /// Commit to serving a call
    ///
    /// The dispatcher has already checked eligibility, so this never fails.
    /// Returns true when the rider boards on the spot.
    pub fn assign_request(&mut self, mut request: PickupRequest) -> bool {
        if request.origin_floor == self.current_floor {
            request.boarded = true;
        }
        let boarded = request.boarded;
        debug!(
            "Elevator {} assigned call {} -> {} (boarded: {})",
            self.id, request.origin_floor, request.destination_floor, request.boarded
        );
        self.requests.push(request);
        self.refresh_route();
        boarded
    }

    /// Override the elevator's position and target, bypassing call matching
    ///
    /// Only allowed while the elevator has no committed calls. A distinct
    /// destination becomes a single trip with its rider already inside.
    pub fn force_update(
        &mut self,
        current_floor: Floor,
        destination_floor: Floor,
    ) -> Result<(), ElevatorError> {
        for floor in [current_floor, destination_floor] {
            if !is_valid_floor(floor) {
                return Err(ElevatorError::OutOfRangeFloor { floor });
            }
        }

        if !self.requests.is_empty() {
            return Err(ElevatorError::OccupiedElevatorOverride { id: self.id });
        }

        self.current_floor = current_floor;
        if destination_floor != current_floor {
            self.requests
                .push(PickupRequest::new_forced(current_floor, destination_floor));
        }
        self.refresh_route();

        debug!(
            "Elevator {} forced to floor {} heading {}",
            self.id, self.current_floor, self.direction
        );
        Ok(())
    }

    /// Advance one floor and let riders in and out
    pub fn step(&mut self) -> ElevatorStepResult {
        if self.is_idle() {
            return ElevatorStepResult::default();
        }

        self.current_floor += self.direction.unit();
        let floor = self.current_floor;

        let mut dropped_off = 0;
        let mut forced_arrivals = 0;
        self.requests.retain(|request| {
            if !request.is_fulfilled_at(floor) {
                return true;
            }
            if request.forced {
                forced_arrivals += 1;
            } else {
                dropped_off += 1;
            }
            false
        });

        let mut picked_up = 0;
        for request in self.requests.iter_mut().filter(|r| r.is_waiting_at(floor)) {
            request.boarded = true;
            picked_up += 1;
        }

        self.refresh_route();

        if dropped_off + forced_arrivals > 0 || picked_up > 0 {
            debug!(
                "Elevator {} at floor {}: {} out, {} in",
                self.id,
                floor,
                dropped_off + forced_arrivals,
                picked_up
            );
        }

        ElevatorStepResult {
            picked_up,
            dropped_off,
            forced_arrivals,
        }
    }

    fn refresh_route(&mut self) {
        self.direction = next_direction(&self.requests, self.current_floor);
        self.destination_floor = next_destination(&self.requests, self.direction);
    }
}

/// Direction the elevator should travel given its committed calls
///
/// The oldest call decides: follow a rider already inside, or head
/// towards a rider still waiting.
pub fn next_direction(requests: &[PickupRequest], current_floor: Floor) -> Direction {
    match requests.first() {
        None => Direction::Idle,
        Some(head) if head.boarded => head.direction,
        Some(head) if head.origin_floor < current_floor => Direction::Down,
        Some(_) => Direction::Up,
    }
}

/// Where the elevator is heading, following the SCAN policy
///
/// Keep going to the last stop in the current direction before turning. If
/// nothing wants to travel in the current direction, the elevator is only
/// moving to collect the oldest call and stops at its origin.
pub fn next_destination(requests: &[PickupRequest], direction: Direction) -> Option<Floor> {
    let head = requests.first()?;

    if !requests.iter().any(|r| r.direction == direction) {
        return Some(head.origin_floor);
    }

    let stops = requests
        .iter()
        .filter(|r| r.direction == direction)
        .map(|r| {
            if r.boarded {
                r.destination_floor
            } else {
                r.origin_floor
            }
        });

    direction.farthest(stops)
}
