// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use pulse_core::{Event, NoError, Producer, Signal};
use pulse_stream::TakeExt;
use pulse_test_utils::{assert_completed_with, EventLog, TestError};
use std::sync::Arc;

#[test]
fn test_take_completes_after_count_values() {
    // Arrange
    let (numbers, input) = Signal::<i32, NoError>::pipe();
    let log = EventLog::new();
    numbers.take(2).observe(log.observer());

    // Act
    input.send_next(1);
    input.send_next(2);
    input.send_next(3);

    // Assert
    assert_completed_with(&log, &[1, 2]);
    assert_eq!(numbers.observer_count(), 0);
}

#[test]
fn test_take_stops_the_upstream_producer() {
    // Arrange
    let produced = Arc::new(Mutex::new(Vec::new()));
    let counting = Producer::<i32, NoError>::new({
        let produced = produced.clone();
        move |observer, run| {
            for n in 1..=100 {
                if run.is_disposed() {
                    return;
                }
                produced.lock().push(n);
                observer.send_next(n);
            }
            observer.send_completed();
        }
    });
    let log = EventLog::new();

    // Act
    counting.take(3).start(log.observer());

    // Assert
    assert_completed_with(&log, &[1, 2, 3]);
    assert_eq!(*produced.lock(), vec![1, 2, 3]);
}

#[test]
fn test_take_zero_completes_without_values() {
    // Arrange
    let log = EventLog::new();

    // Act
    Producer::<i32, NoError>::from_values([1, 2])
        .take(0)
        .start(log.observer());

    // Assert
    assert_eq!(log.events(), vec![Event::Completed]);
}

#[test]
fn test_take_forwards_early_failure() {
    // Arrange
    let (numbers, input) = Signal::<i32, TestError>::pipe();
    let log = EventLog::new();
    numbers.take(5).observe(log.observer());

    // Act
    input.send_next(1);
    input.send_failed(TestError::Timeout);

    // Assert
    assert_eq!(
        log.events(),
        vec![Event::Next(1), Event::Failed(TestError::Timeout)]
    );
}
