// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::{Event, NoError, Producer, Signal};
use pulse_stream::ReduceExt;
use pulse_test_utils::{assert_completed_with, assert_no_events, EventLog, TestError};

#[test]
fn test_reduce_emits_fold_on_completion_only() {
    // Arrange
    let (numbers, input) = Signal::<i32, NoError>::pipe();
    let log = EventLog::new();
    numbers.reduce(0, |total, n| total + n).observe(log.observer());

    // Act
    input.send_next(3);
    input.send_next(4);

    // Assert
    assert_no_events(&log);
    input.send_completed();
    assert_completed_with(&log, &[7]);
}

#[test]
fn test_reduce_of_empty_stream_emits_seed() {
    // Arrange
    let producer = Producer::<i32, NoError>::empty().reduce(42, |total, n| total + n);
    let log = EventLog::new();

    // Act
    producer.start(log.observer());

    // Assert
    assert_completed_with(&log, &[42]);
}

#[test]
fn test_reduce_emits_nothing_on_failure() {
    // Arrange
    let (numbers, input) = Signal::<i32, TestError>::pipe();
    let log = EventLog::new();
    numbers.reduce(0, |total, n| total + n).observe(log.observer());

    // Act
    input.send_next(1);
    input.send_failed(TestError::boom("reduce"));

    // Assert
    assert_eq!(log.events(), vec![Event::Failed(TestError::boom("reduce"))]);
}

#[test]
fn test_reduce_emits_nothing_on_interruption() {
    // Arrange
    let (numbers, input) = Signal::<i32, NoError>::pipe();
    let log = EventLog::new();
    numbers.reduce(0, |total, n| total + n).observe(log.observer());

    // Act
    input.send_next(1);
    input.send_interrupted();

    // Assert
    assert_eq!(log.events(), vec![Event::Interrupted]);
}

#[test]
fn test_reduce_on_producer_folds_each_run_from_seed() {
    // Arrange
    let product = Producer::<i64, NoError>::from_values([2, 3, 4]).reduce(1, |acc, n| acc * n);
    let first = EventLog::new();
    let second = EventLog::new();

    // Act
    product.start(first.observer());
    product.start(second.observer());

    // Assert
    assert_completed_with(&first, &[24]);
    assert_completed_with(&second, &[24]);
}
