//! Errors reported by the elevator simulation
//!
//! None of these are fatal. Every rejected operation leaves the
//! simulation untouched and the caller is free to carry on.

use thiserror::Error;

use super::types::{ElevatorId, Floor};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElevatorError {
    /// Direction does not match the trip, or the trip has zero length
    #[error(
        "malformed pickup request: direction {direction} does not lead from floor {origin} to floor {destination}"
    )]
    MalformedRequest {
        origin: Floor,
        direction: i32,
        destination: Floor,
    },

    #[error("floor {floor} is outside the served range [0, 255]")]
    OutOfRangeFloor { floor: Floor },

    #[error("elevator {id} does not exist, this bank has {count} elevators")]
    OutOfRangeElevator { id: i64, count: usize },

    #[error("elevator {id} is occupied and cannot be overridden")]
    OccupiedElevatorOverride { id: ElevatorId },
}
