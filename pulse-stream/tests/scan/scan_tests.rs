// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::{Event, NoError, Producer, Signal};
use pulse_stream::ScanExt;
use pulse_test_utils::{assert_completed_with, assert_values, EventLog, TestError};

#[test]
fn test_scan_emits_running_totals() {
    // Arrange
    let (numbers, input) = Signal::<i32, NoError>::pipe();
    let log = EventLog::new();
    numbers.scan(0, |total, n| total + n).observe(log.observer());

    // Act
    input.send_next(1);
    input.send_next(2);
    input.send_next(3);

    // Assert
    assert_values(&log, &[1, 3, 6]);
}

#[test]
fn test_scan_restarts_from_initial_on_every_producer_start() {
    // Arrange
    let running = Producer::<&str, NoError>::from_values(["a", "b"])
        .scan(String::new(), |mut text, piece| {
            text.push_str(piece);
            text
        });
    let first = EventLog::new();
    let second = EventLog::new();

    // Act
    running.start(first.observer());
    running.start(second.observer());

    // Assert
    let expected = ["a".to_string(), "ab".to_string()];
    assert_completed_with(&first, &expected);
    assert_completed_with(&second, &expected);
}

#[test]
fn test_scan_forwards_failure() {
    // Arrange
    let (numbers, input) = Signal::<i32, TestError>::pipe();
    let log = EventLog::new();
    numbers.scan(10, |total, n| total - n).observe(log.observer());

    // Act
    input.send_next(1);
    input.send_failed(TestError::Timeout);

    // Assert
    assert_eq!(
        log.events(),
        vec![Event::Next(9), Event::Failed(TestError::Timeout)]
    );
}
