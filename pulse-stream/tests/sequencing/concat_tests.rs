// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::{Event, NoError, Producer};
use pulse_stream::ConcatExt;
use pulse_test_utils::{assert_completed_with, EventLog, TestError};

#[test]
fn test_concat_appends_second_producer() {
    // Arrange
    let head = Producer::<i32, NoError>::from_values([1, 2]);
    let tail = Producer::<i32, NoError>::from_values([3]);
    let log = EventLog::new();

    // Act
    head.concat(&tail).start(log.observer());

    // Assert
    assert_completed_with(&log, &[1, 2, 3]);
}

#[test]
fn test_concat_stops_at_first_failure() {
    // Arrange
    let head = Producer::<i32, TestError>::failed(TestError::Timeout);
    let tail = Producer::<i32, TestError>::from_values([3]);
    let log = EventLog::new();

    // Act
    head.concat(&tail).start(log.observer());

    // Assert
    assert_eq!(log.events(), vec![Event::Failed(TestError::Timeout)]);
}
