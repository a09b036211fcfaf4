//! Read-only elevator snapshots for display

use std::fmt;

use super::types::{Direction, ElevatorId, Floor};

/// Snapshot of one elevator at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorStatus {
    pub id: ElevatorId,
    pub current_floor: Floor,
    /// `None` while the elevator is idle
    pub destination_floor: Option<Floor>,
    pub direction: Direction,
}

impl ElevatorStatus {
    pub fn is_idle(&self) -> bool {
        self.destination_floor.is_none()
    }
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.destination_floor {
            Some(destination) => write!(
                f,
                "Elevator {:>2} | floor {:>3} | destination {:>3} ({})",
                self.id, self.current_floor, destination, self.direction
            ),
            None => write!(
                f,
                "Elevator {:>2} | floor {:>3} | destination idle",
                self.id, self.current_floor
            ),
        }
    }
}
