//! Core types for the elevator simulation
//!
//! These are standalone types shared by the elevators and the dispatcher.

use std::fmt;

/// A floor number. Valid floors are `0..MAX_FLOOR`.
pub type Floor = i32;

/// Number of floors served by the bank (valid range is `[0, MAX_FLOOR - 1]`)
pub const MAX_FLOOR: Floor = 256;

/// Smallest fleet the dispatcher will build
pub const MIN_ELEVATORS: usize = 1;

/// Largest fleet the dispatcher will build
pub const MAX_ELEVATORS: usize = 16;

/// Returns true if the floor lies inside the served range
pub fn is_valid_floor(floor: Floor) -> bool {
    (0..MAX_FLOOR).contains(&floor)
}

/// A wrapper type for elevator IDs
///
/// IDs are assigned at construction and double as the index into the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElevatorId(pub usize);

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Direction of travel, used both for elevator motion and for the
/// direction a caller wants to go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Idle,
    Up,
    Down,
}

impl Direction {
    /// Direction of a floor delta: zero is idle, positive is up, negative is down
    pub fn of(delta: i32) -> Self {
        match delta.signum() {
            0 => Direction::Idle,
            1 => Direction::Up,
            _ => Direction::Down,
        }
    }

    /// Unit vector for one step in this direction
    pub fn unit(self) -> i32 {
        match self {
            Direction::Idle => 0,
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Idle => Direction::Idle,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// The floor farthest along this direction (highest for up, lowest for down)
    ///
    /// Returns `None` for an idle direction or an empty iterator.
    pub fn farthest<I>(self, floors: I) -> Option<Floor>
    where
        I: IntoIterator<Item = Floor>,
    {
        match self {
            Direction::Up => floors.into_iter().max(),
            Direction::Down => floors.into_iter().min(),
            Direction::Idle => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Idle => "idle",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.pad(label)
    }
}
