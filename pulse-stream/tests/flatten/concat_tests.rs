// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::{Event, NoError, Producer, Signal};
use pulse_stream::{FlattenExt, FlattenStrategy};
use pulse_test_utils::{assert_completed_with, assert_values, EventLog, TestError};

#[test]
fn test_concat_subscribes_inners_one_after_another() {
    // Arrange
    let (outer, outer_in) = Signal::<Producer<i32, NoError>, NoError>::pipe();
    let (first, first_in) = Producer::<i32, NoError>::buffer(10);
    let (second, second_in) = Producer::<i32, NoError>::buffer(10);
    let log = EventLog::new();
    outer.flatten(FlattenStrategy::Concat).observe(log.observer());
    outer_in.send_next(first);
    outer_in.send_next(second);

    // Act
    second_in.send_next(10);
    first_in.send_next(1);
    first_in.send_next(2);
    first_in.send_completed();
    second_in.send_next(20);

    // Assert
    assert_values(&log, &[1, 2, 10, 20]);
}

#[test]
fn test_concat_of_producers_completes_after_last_inner() {
    // Arrange
    let outer = Producer::<Producer<i32, NoError>, NoError>::from_values([
        Producer::from_values([1, 2]),
        Producer::empty(),
        Producer::from_values([3]),
    ]);
    let log = EventLog::new();

    // Act
    outer.flatten(FlattenStrategy::Concat).start(log.observer());

    // Assert
    assert_completed_with(&log, &[1, 2, 3]);
}

#[test]
fn test_concat_queued_signal_misses_events_sent_while_waiting() {
    // Arrange
    let (outer, outer_in) = Signal::<Signal<i32, NoError>, NoError>::pipe();
    let (first, first_in) = Signal::<i32, NoError>::pipe();
    let (second, second_in) = Signal::<i32, NoError>::pipe();
    let log = EventLog::new();
    outer.flatten(FlattenStrategy::Concat).observe(log.observer());
    outer_in.send_next(first);
    outer_in.send_next(second);

    // Act
    second_in.send_next(99);
    first_in.send_next(1);
    first_in.send_completed();
    second_in.send_next(2);

    // Assert
    assert_values(&log, &[1, 2]);
}

#[test]
fn test_concat_waits_for_active_inner_after_outer_completes() {
    // Arrange
    let (outer, outer_in) = Signal::<Signal<i32, NoError>, NoError>::pipe();
    let (inner, inner_in) = Signal::<i32, NoError>::pipe();
    let log = EventLog::new();
    outer.flatten(FlattenStrategy::Concat).observe(log.observer());
    outer_in.send_next(inner);

    // Act
    outer_in.send_completed();
    inner_in.send_next(1);
    inner_in.send_completed();

    // Assert
    assert_completed_with(&log, &[1]);
}

#[test]
fn test_concat_inner_failure_drops_pending_inners() {
    // Arrange
    let started = EventLog::<&str, TestError>::new();
    let pending = Producer::<i32, TestError>::new({
        let started = started.observer();
        move |observer, _| {
            started.send_next("pending started");
            observer.send_completed();
        }
    });
    let outer = Producer::<Producer<i32, TestError>, TestError>::from_values([
        Producer::failed(TestError::boom("first")),
        pending,
    ]);
    let log = EventLog::new();

    // Act
    outer.flatten(FlattenStrategy::Concat).start(log.observer());

    // Assert
    assert_eq!(log.events(), vec![Event::Failed(TestError::boom("first"))]);
    assert!(started.is_empty());
}

#[test]
fn test_concat_of_buffered_producers_replays_inner_when_its_turn_comes() {
    // Arrange
    let (first, first_in) = Producer::<&str, NoError>::buffer(5);
    let (second, second_in) = Producer::<&str, NoError>::buffer(1);
    let (outer, outer_in) = Producer::<Producer<&str, NoError>, NoError>::buffer(5);
    let log = EventLog::new();
    outer.flatten(FlattenStrategy::Concat).start(log.observer());
    outer_in.send_next(first);
    outer_in.send_next(second);
    outer_in.send_completed();

    // Act
    first_in.send_next("A");
    second_in.send_next("1");
    second_in.send_next("2");
    second_in.send_next("3");
    first_in.send_next("B");
    first_in.send_completed();
    second_in.send_next("4");
    second_in.send_completed();

    // Assert
    assert_completed_with(&log, &["A", "B", "3", "4"]);
}

#[test]
fn test_concat_drains_a_long_queue_of_synchronous_inners() {
    // Arrange
    let (outer, outer_in) = Signal::<Producer<i32, NoError>, NoError>::pipe();
    let (first, first_in) = Producer::<i32, NoError>::buffer(0);
    let log = EventLog::new();
    outer.flatten(FlattenStrategy::Concat).observe(log.observer());
    outer_in.send_next(first);
    for _ in 0..10_000 {
        outer_in.send_next(Producer::from_values([1]));
    }
    outer_in.send_completed();

    // Act
    first_in.send_completed();

    // Assert
    assert_eq!(log.values().len(), 10_000);
    assert!(log.is_completed());
}
