//! Dispatcher that ties the elevator bank together
//!
//! This is the entry point for driving the simulation. It owns every
//! elevator and the queue of calls nobody could take yet.

use log::{debug, warn};
use std::collections::VecDeque;

use super::elevator::SimElevator;
use super::error::ElevatorError;
use super::request::PickupRequest;
use super::status::ElevatorStatus;
use super::types::{is_valid_floor, Direction, ElevatorId, Floor, MAX_ELEVATORS, MIN_ELEVATORS};

/// What happened to a newly accepted call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupOutcome {
    /// Handed to an elevator straight away
    Assigned(ElevatorId),
    /// Handed to an elevator already standing at the origin; the rider is inside
    Boarded(ElevatorId),
    /// No elevator could take it; it will be retried every step
    Deferred,
}

/// Totals for one simulation step across the whole bank
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Elevators that moved a floor this step
    pub elevators_moved: usize,
    /// Riders that boarded, on arrival or on assignment from the queue
    pub picked_up: usize,
    pub dropped_off: usize,
    /// Forced trips that reached their destination
    pub forced_arrivals: usize,
    /// Deferred calls that found an elevator this step
    pub assigned_from_queue: usize,
    /// Calls still waiting in the deferred queue after the step
    pub still_deferred: usize,
}

/// The elevator bank and its call queue
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// Indexed by elevator ID
    elevators: Vec<SimElevator>,

    /// Calls with no eligible elevator yet, oldest first
    deferred: VecDeque<PickupRequest>,
}

impl Dispatcher {
    /// Create a bank of elevators, all idle on floor 0
    ///
    /// The count is clamped into `[MIN_ELEVATORS, MAX_ELEVATORS]`.
    pub fn new(elevator_count: usize) -> Self {
        let count = clamp_elevator_count(elevator_count);
        let elevators = (0..count)
            .map(|index| SimElevator::new(ElevatorId(index)))
            .collect();

        Self {
            elevators,
            deferred: VecDeque::new(),
        }
    }

    pub fn elevator_count(&self) -> usize {
        self.elevators.len()
    }

    pub fn elevators(&self) -> &[SimElevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: ElevatorId) -> Option<&SimElevator> {
        self.elevators.get(id.0)
    }

    /// Calls waiting for an elevator, oldest first
    pub fn deferred_requests(&self) -> impl Iterator<Item = &PickupRequest> {
        self.deferred.iter()
    }

    pub fn deferred_count(&self) -> usize {
        self.deferred.len()
    }

    /// True when no elevator is moving and no call is waiting
    pub fn is_quiescent(&self) -> bool {
        self.deferred.is_empty() && self.elevators.iter().all(SimElevator::is_idle)
    }

    /// Register a call from `origin` to `destination`
    ///
    /// `direction` is the caller's requested direction: positive for up,
    /// negative for down. It must agree with the trip.
    pub fn pickup(
        &mut self,
        origin: Floor,
        direction: i32,
        destination: Floor,
    ) -> Result<PickupOutcome, ElevatorError> {
        for floor in [origin, destination] {
            if !is_valid_floor(floor) {
                warn!("Rejected pickup: floor {} out of range", floor);
                return Err(ElevatorError::OutOfRangeFloor { floor });
            }
        }

        let request = PickupRequest::new(origin, destination);
        if !request.is_valid() || Direction::of(direction) != request.direction {
            warn!(
                "Rejected pickup: direction {} does not match trip {} -> {}",
                direction, origin, destination
            );
            return Err(ElevatorError::MalformedRequest {
                origin,
                direction,
                destination,
            });
        }

        match self.try_assign(request) {
            Some((id, false)) => Ok(PickupOutcome::Assigned(id)),
            Some((id, true)) => Ok(PickupOutcome::Boarded(id)),
            None => {
                debug!(
                    "No elevator available for call {} -> {}, deferring",
                    origin, destination
                );
                self.deferred.push_back(request);
                Ok(PickupOutcome::Deferred)
            }
        }
    }

    /// Pick the closest eligible elevator for a call
    ///
    /// Ties go to the elevator with the lowest ID.
    pub fn find_best_elevator(&self, request: &PickupRequest) -> Option<ElevatorId> {
        let mut best: Option<(Floor, ElevatorId)> = None;

        for elevator in self.elevators.iter().filter(|e| e.can_serve(request)) {
            let distance = elevator.distance_to(request.origin_floor);
            match best {
                Some((shortest, _)) if shortest <= distance => {}
                _ => best = Some((distance, elevator.id())),
            }
        }

        best.map(|(_, id)| id)
    }

    /// Hand a call to the best eligible elevator, if there is one
    ///
    /// Also reports whether the rider boarded on assignment.
    fn try_assign(&mut self, request: PickupRequest) -> Option<(ElevatorId, bool)> {
        let id = self.find_best_elevator(&request)?;
        let boarded = self.elevators[id.0].assign_request(request);
        Some((id, boarded))
    }

    /// Override an elevator's position and destination
    ///
    /// Negative IDs are reported as nonexistent elevators like any other
    /// unknown ID.
    pub fn update(
        &mut self,
        elevator_id: i64,
        current_floor: Floor,
        destination_floor: Floor,
    ) -> Result<(), ElevatorError> {
        let count = self.elevators.len();
        let elevator = usize::try_from(elevator_id)
            .ok()
            .and_then(|index| self.elevators.get_mut(index));
        let elevator = elevator.ok_or_else(|| {
            warn!(
                "Rejected update: elevator {} does not exist ({} installed)",
                elevator_id, count
            );
            ElevatorError::OutOfRangeElevator {
                id: elevator_id,
                count,
            }
        })?;

        elevator
            .force_update(current_floor, destination_floor)
            .inspect_err(|e| warn!("Rejected update of elevator {}: {}", elevator_id, e))
    }

    /// Main simulation step
    ///
    /// Every elevator moves in ID order, then each deferred call is retried
    /// against the updated bank in queue order.
    pub fn step(&mut self) -> StepReport {
        let mut report = StepReport::default();

        for elevator in &mut self.elevators {
            if elevator.is_idle() {
                continue;
            }
            let result = elevator.step();
            report.elevators_moved += 1;
            report.picked_up += result.picked_up;
            report.dropped_off += result.dropped_off;
            report.forced_arrivals += result.forced_arrivals;
        }

        let pending = std::mem::take(&mut self.deferred);
        for request in pending {
            match self.try_assign(request) {
                Some((_, boarded)) => {
                    report.assigned_from_queue += 1;
                    if boarded {
                        report.picked_up += 1;
                    }
                }
                None => self.deferred.push_back(request),
            }
        }

        report.still_deferred = self.deferred.len();
        report
    }

    /// Snapshot of every elevator in ID order
    pub fn status(&self) -> Vec<ElevatorStatus> {
        self.elevators.iter().map(SimElevator::status).collect()
    }

    /// Print a summary of the bank state
    pub fn print_summary(&self) {
        println!("=== Elevator Bank Status ===");
        for status in self.status() {
            println!("  {}", status);
        }
        println!("Deferred calls: {}", self.deferred.len());
    }
}

fn clamp_elevator_count(requested: usize) -> usize {
    let count = requested.clamp(MIN_ELEVATORS, MAX_ELEVATORS);
    if count != requested {
        warn!(
            "Elevator count {} outside [{}, {}], creating {} elevators",
            requested, MIN_ELEVATORS, MAX_ELEVATORS, count
        );
    }
    count
}
