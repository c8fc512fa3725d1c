// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::{Event, NoError, Producer, Signal};
use pulse_stream::MapExt;
use pulse_test_utils::{assert_completed_with, assert_values, EventLog};

#[test]
fn test_map_transforms_signal_values() {
    // Arrange
    let (numbers, input) = Signal::<i32, NoError>::pipe();
    let log = EventLog::new();
    numbers.map(|n| format!("#{n}")).observe(log.observer());

    // Act
    input.send_next(1);
    input.send_next(2);

    // Assert
    assert_values(&log, &["#1".to_string(), "#2".to_string()]);
}

#[test]
fn test_map_passes_completion_through() {
    // Arrange
    let (numbers, input) = Signal::<i32, NoError>::pipe();
    let log = EventLog::new();
    numbers.map(|n| n + 1).observe(log.observer());

    // Act
    input.send_next(1);
    input.send_completed();

    // Assert
    assert_completed_with(&log, &[2]);
}

#[test]
fn test_map_on_producer_is_applied_per_start() {
    // Arrange
    let doubled = Producer::<i32, NoError>::from_values([1, 2, 3]).map(|n| n * 2);
    let first = EventLog::new();
    let second = EventLog::new();

    // Act
    doubled.start(first.observer());
    doubled.start(second.observer());

    // Assert
    assert_completed_with(&first, &[2, 4, 6]);
    assert_completed_with(&second, &[2, 4, 6]);
}

#[test]
fn test_chained_maps_compose() {
    // Arrange
    let (numbers, input) = Signal::<i32, NoError>::pipe();
    let log = EventLog::new();
    numbers
        .map(|n| n + 1)
        .map(|n| n * 10)
        .observe(log.observer());

    // Act
    input.send_next(1);
    input.send_interrupted();

    // Assert
    assert_eq!(log.events(), vec![Event::Next(20), Event::Interrupted]);
}
