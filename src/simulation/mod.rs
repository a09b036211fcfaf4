//! Standalone elevator bank simulation
//!
//! This module contains all the core simulation logic: the per-elevator
//! state machine and the dispatcher that hands calls to elevators. It is
//! driven one discrete step at a time and has no I/O of its own.

mod dispatcher;
mod elevator;
mod error;
mod request;
mod status;
mod traffic;
mod types;

// Re-export public types for external use
pub use dispatcher::{Dispatcher, PickupOutcome, StepReport};
pub use elevator::{next_destination, next_direction, ElevatorStepResult, SimElevator};
pub use error::ElevatorError;
pub use request::PickupRequest;
pub use status::ElevatorStatus;
pub use traffic::{GeneratedCall, TrafficGenerator, MIN_BUILDING_FLOORS};
pub use types::{
    is_valid_floor, Direction, ElevatorId, Floor, MAX_ELEVATORS, MAX_FLOOR, MIN_ELEVATORS,
};
