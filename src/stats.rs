use log::info;

use crate::simulation::{ElevatorError, PickupOutcome, StepReport};

/// Running totals for a simulation session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationStats {
    pub steps: u64,
    pub calls_received: u64,
    pub calls_rejected: u64,
    pub assigned_on_arrival: u64,
    pub deferred_on_arrival: u64,
    /// Riders that boarded, including those who boarded on assignment
    pub riders_picked_up: u64,
    /// Calls carried to their destination
    pub riders_delivered: u64,
    /// Trips created by elevator overrides that reached their destination
    pub forced_trips_completed: u64,
    pub peak_deferred: usize,
}

impl SimulationStats {
    /// Record the outcome of a pickup call
    pub fn record_pickup(&mut self, outcome: &Result<PickupOutcome, ElevatorError>) {
        self.calls_received += 1;
        match outcome {
            Ok(PickupOutcome::Assigned(_)) => self.assigned_on_arrival += 1,
            Ok(PickupOutcome::Boarded(_)) => {
                self.assigned_on_arrival += 1;
                self.riders_picked_up += 1;
            }
            Ok(PickupOutcome::Deferred) => self.deferred_on_arrival += 1,
            Err(_) => self.calls_rejected += 1,
        }
    }

    pub fn record_step(&mut self, report: &StepReport) {
        self.steps += 1;
        self.riders_picked_up += report.picked_up as u64;
        self.riders_delivered += report.dropped_off as u64;
        self.forced_trips_completed += report.forced_arrivals as u64;
        self.peak_deferred = self.peak_deferred.max(report.still_deferred);
    }

    /// Share of accepted calls that have been delivered, as a percentage
    pub fn delivery_rate(&self) -> f64 {
        let accepted = self.calls_received - self.calls_rejected;
        if accepted > 0 {
            (self.riders_delivered as f64 / accepted as f64) * 100.0
        } else {
            0.0
        }
    }

    pub fn log_summary(&self) {
        info!("=== SIMULATION COMPLETE ===");
        info!("Total steps: {}", self.steps);
        info!("Total calls received: {}", self.calls_received);
        info!("Calls rejected: {}", self.calls_rejected);
        info!("Assigned on arrival: {}", self.assigned_on_arrival);
        info!("Deferred on arrival: {}", self.deferred_on_arrival);
        info!("Riders picked up: {}", self.riders_picked_up);
        info!("Riders delivered: {}", self.riders_delivered);
        info!("Forced trips completed: {}", self.forced_trips_completed);
        info!("Peak deferred queue: {}", self.peak_deferred);
        info!("Delivery rate: {:.1}%", self.delivery_rate());
    }
}
