// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::{Event, Producer, PulseError, Signal};
use pulse_stream::MapExt;
use pulse_test_utils::{EventLog, TestError};

#[test]
fn test_map_passes_failure_through_untouched() {
    // Arrange
    let (numbers, input) = Signal::<i32, TestError>::pipe();
    let log = EventLog::new();
    numbers.map(|n| n * 2).observe(log.observer());

    // Act
    input.send_next(1);
    input.send_failed(TestError::boom("map"));
    input.send_next(2);

    // Assert
    assert_eq!(
        log.events(),
        vec![Event::Next(2), Event::Failed(TestError::boom("map"))]
    );
}

#[test]
fn test_map_err_converts_the_error_type() {
    // Arrange
    let failing = Producer::<i32, TestError>::failed(TestError::Timeout)
        .map_err(|error| PulseError::stream_error(error.to_string()));
    let log = EventLog::<i32, PulseError>::new();

    // Act
    failing.start(log.observer());

    // Assert
    assert!(matches!(
        log.last(),
        Some(Event::Failed(PulseError::StreamError { ref context })) if context == "timeout"
    ));
}

#[test]
fn test_map_err_leaves_values_alone() {
    // Arrange
    let (numbers, input) = Signal::<i32, TestError>::pipe();
    let log = EventLog::<i32, String>::new();
    numbers
        .map_err(|error| error.to_string())
        .observe(log.observer());

    // Act
    input.send_next(3);
    input.send_failed(TestError::boom("x"));

    // Assert
    assert_eq!(
        log.events(),
        vec![Event::Next(3), Event::Failed("boom: x".to_string())]
    );
}
