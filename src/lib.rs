//! Elevator Bank Simulation Library
//!
//! A discrete-step simulation of a bank of elevators answering pickup
//! calls, usable headless or through an interactive console.

pub mod console;
pub mod simulation;
pub mod stats;
