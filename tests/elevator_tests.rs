//! Single-elevator behaviour: boarding, forced updates and route selection

use elevator_sim::simulation::{
    next_destination, next_direction, Direction, ElevatorError, ElevatorId, ElevatorStepResult,
    PickupRequest, SimElevator,
};

fn assert_consistent(elevator: &SimElevator) {
    let idle = elevator.direction() == Direction::Idle;
    assert_eq!(idle, elevator.requests().is_empty());
    assert_eq!(idle, elevator.destination_floor().is_none());
    assert!((0..256).contains(&elevator.current_floor()));
}

#[test]
fn test_direction_of_and_opposite() {
    assert_eq!(Direction::of(0), Direction::Idle);
    assert_eq!(Direction::of(7), Direction::Up);
    assert_eq!(Direction::of(-3), Direction::Down);
    assert_eq!(Direction::Up.opposite(), Direction::Down);
    assert_eq!(Direction::Down.opposite(), Direction::Up);
    assert_eq!(Direction::Idle.opposite(), Direction::Idle);
    assert_eq!(Direction::Up.unit() + Direction::Down.unit(), 0);
}

#[test]
fn test_new_elevator_is_idle_on_ground_floor() {
    let elevator = SimElevator::new(ElevatorId(4));
    assert_eq!(elevator.id(), ElevatorId(4));
    assert_eq!(elevator.current_floor(), 0);
    assert_eq!(elevator.destination_floor(), None);
    assert!(elevator.is_idle());
    assert_consistent(&elevator);
}

#[test]
fn test_assigned_call_sets_route_towards_origin() {
    let mut elevator = SimElevator::new(ElevatorId(0));
    assert!(!elevator.assign_request(PickupRequest::new(2, 3)));

    assert_eq!(elevator.direction(), Direction::Up);
    assert_eq!(elevator.destination_floor(), Some(2));
    assert!(!elevator.requests()[0].boarded);
}

#[test]
fn test_call_on_current_floor_boards_immediately() {
    let mut elevator = SimElevator::new_at(ElevatorId(0), 6);
    assert!(elevator.assign_request(PickupRequest::new(6, 2)));

    assert!(elevator.requests()[0].boarded);
    assert_eq!(elevator.direction(), Direction::Down);
    assert_eq!(elevator.destination_floor(), Some(2));
}

#[test]
fn test_step_reports_riders_in_and_out() {
    let mut elevator = SimElevator::new(ElevatorId(0));
    elevator.assign_request(PickupRequest::new(1, 2));

    let first = elevator.step();
    assert_eq!(first.picked_up, 1);
    assert_eq!(first.dropped_off, 0);
    assert_eq!(elevator.destination_floor(), Some(2));

    let second = elevator.step();
    assert_eq!(second.picked_up, 0);
    assert_eq!(second.dropped_off, 1);
    assert!(elevator.is_idle());
    assert_consistent(&elevator);
}

#[test]
fn test_forced_trip_arrival_is_not_a_delivery() {
    let mut elevator = SimElevator::new(ElevatorId(0));
    assert!(elevator.force_update(3, 4).is_ok());
    assert!(elevator.requests()[0].forced);

    let result = elevator.step();
    assert_eq!(result.forced_arrivals, 1);
    assert_eq!(result.dropped_off, 0);
    assert!(elevator.is_idle());
}

#[test]
fn test_idle_step_is_a_no_op() {
    let mut elevator = SimElevator::new_at(ElevatorId(0), 9);
    let result = elevator.step();
    assert_eq!(result.picked_up + result.dropped_off, 0);
    assert_eq!(elevator.current_floor(), 9);
}

#[test]
fn test_force_update_rejects_out_of_range_floors() {
    let mut elevator = SimElevator::new(ElevatorId(0));

    assert_eq!(
        elevator.force_update(256, 3),
        Err(ElevatorError::OutOfRangeFloor { floor: 256 })
    );
    assert_eq!(
        elevator.force_update(3, -1),
        Err(ElevatorError::OutOfRangeFloor { floor: -1 })
    );
    assert_eq!(elevator.current_floor(), 0);
    assert!(elevator.is_idle());
}

#[test]
fn test_force_update_rejected_while_occupied() {
    let mut elevator = SimElevator::new(ElevatorId(2));
    elevator.assign_request(PickupRequest::new(4, 8));

    assert_eq!(
        elevator.force_update(5, 6),
        Err(ElevatorError::OccupiedElevatorOverride { id: ElevatorId(2) })
    );
    assert_eq!(elevator.current_floor(), 0);
    assert_eq!(elevator.destination_floor(), Some(4));
    assert_eq!(elevator.requests().len(), 1);
}

#[test]
fn test_force_update_to_same_floor_stays_idle() {
    let mut elevator = SimElevator::new(ElevatorId(0));
    assert!(elevator.force_update(7, 7).is_ok());

    assert_eq!(elevator.current_floor(), 7);
    assert!(elevator.is_idle());
    assert_consistent(&elevator);
}

#[test]
fn test_forced_trip_drains_and_stays_drained() {
    let mut elevator = SimElevator::new(ElevatorId(0));
    assert!(elevator.force_update(10, 1).is_ok());

    assert_eq!(elevator.direction(), Direction::Down);
    assert_eq!(elevator.destination_floor(), Some(1));
    assert_eq!(elevator.requests().len(), 1);
    assert!(elevator.requests()[0].boarded);

    for _ in 0..9 {
        assert_consistent(&elevator);
        elevator.step();
    }
    assert_eq!(elevator.current_floor(), 1);
    assert!(elevator.is_idle());

    let result = elevator.step();
    assert_eq!(result, ElevatorStepResult::default());
    assert_eq!(elevator.current_floor(), 1);
    assert_consistent(&elevator);
}

#[test]
fn test_can_serve_only_calls_ahead_in_same_direction() {
    let mut elevator = SimElevator::new(ElevatorId(0));
    assert!(elevator.can_serve(&PickupRequest::new(3, 1)));

    assert!(elevator.force_update(2, 6).is_ok());
    assert!(elevator.can_serve(&PickupRequest::new(4, 9)));
    assert!(!elevator.can_serve(&PickupRequest::new(1, 2)));
    assert!(!elevator.can_serve(&PickupRequest::new(2, 5)));
    assert!(!elevator.can_serve(&PickupRequest::new(5, 4)));
}

#[test]
fn test_cannot_serve_while_collecting_opposite_call() {
    let mut elevator = SimElevator::new(ElevatorId(0));
    elevator.assign_request(PickupRequest::new(3, 1));

    assert_eq!(elevator.direction(), Direction::Up);
    assert!(!elevator.can_serve(&PickupRequest::new(4, 5)));
}

#[test]
fn test_next_direction_follows_head_request() {
    assert_eq!(next_direction(&[], 5), Direction::Idle);
    assert_eq!(
        next_direction(&[PickupRequest::new_boarded(5, 2)], 5),
        Direction::Down
    );
    assert_eq!(next_direction(&[PickupRequest::new(2, 9)], 5), Direction::Down);
    assert_eq!(next_direction(&[PickupRequest::new(8, 1)], 5), Direction::Up);
}

#[test]
fn test_next_destination_detours_to_opposite_call() {
    let requests = [PickupRequest::new(3, 1)];
    assert_eq!(next_destination(&requests, Direction::Up), Some(3));
    assert_eq!(next_destination(&[], Direction::Idle), None);
}

#[test]
fn test_next_destination_scans_to_farthest_stop() {
    let waiting = [PickupRequest::new(1, 5), PickupRequest::new(2, 3)];
    assert_eq!(next_destination(&waiting, Direction::Up), Some(2));

    let riding = [PickupRequest::new_boarded(1, 5), PickupRequest::new(2, 3)];
    assert_eq!(next_destination(&riding, Direction::Up), Some(5));

    let going_down = [
        PickupRequest::new_boarded(9, 4),
        PickupRequest::new(6, 2),
        PickupRequest::new(7, 1),
    ];
    assert_eq!(next_destination(&going_down, Direction::Down), Some(4));
}

#[test]
fn test_scan_picks_up_along_the_way() {
    let mut elevator = SimElevator::new(ElevatorId(0));
    elevator.assign_request(PickupRequest::new(1, 5));
    elevator.assign_request(PickupRequest::new(2, 3));
    assert_eq!(elevator.destination_floor(), Some(2));

    elevator.step();
    assert_eq!(elevator.current_floor(), 1);
    assert_eq!(elevator.destination_floor(), Some(5));

    elevator.step();
    assert!(elevator.requests().iter().all(|r| r.boarded));
    assert_eq!(elevator.destination_floor(), Some(5));

    elevator.step();
    assert_eq!(elevator.current_floor(), 3);
    assert_eq!(elevator.requests().len(), 1);

    elevator.step();
    elevator.step();
    assert_eq!(elevator.current_floor(), 5);
    assert!(elevator.is_idle());
}
