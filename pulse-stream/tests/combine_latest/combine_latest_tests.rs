// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::{Event, NoError, Producer, Signal};
use pulse_stream::{combine_latest, CombineLatestExt};
use pulse_test_utils::{assert_completed_with, assert_no_events, EventLog};

#[test]
fn test_combine_latest_pairs_latest_values() {
    // Arrange
    let (numbers, numbers_in) = Signal::<i32, NoError>::pipe();
    let (letters, letters_in) = Signal::<&str, NoError>::pipe();
    let log = EventLog::new();
    numbers.combine_latest_with(&letters).observe(log.observer());

    // Act & Assert
    numbers_in.send_next(0);
    numbers_in.send_next(1);
    letters_in.send_next("A");
    assert_eq!(log.take(), vec![Event::Next((1, "A"))]);

    numbers_in.send_next(2);
    assert_eq!(log.take(), vec![Event::Next((2, "A"))]);

    numbers_in.send_completed();
    assert_no_events(&log);

    letters_in.send_next("B");
    assert_eq!(log.take(), vec![Event::Next((2, "B"))]);

    letters_in.send_next("C");
    assert_eq!(log.take(), vec![Event::Next((2, "C"))]);

    letters_in.send_completed();
    assert_eq!(log.take(), vec![Event::Completed]);
}

#[test]
fn test_combine_latest_waits_for_both_sides() {
    // Arrange
    let (numbers, numbers_in) = Signal::<i32, NoError>::pipe();
    let (letters, _letters_in) = Signal::<&str, NoError>::pipe();
    let log = EventLog::new();
    combine_latest(&numbers, &letters).observe(log.observer());

    // Act
    numbers_in.send_next(1);
    numbers_in.send_next(2);

    // Assert
    assert_no_events(&log);
}

#[test]
fn test_combine_latest_completes_only_when_both_complete() {
    // Arrange
    let (numbers, numbers_in) = Signal::<i32, NoError>::pipe();
    let (letters, letters_in) = Signal::<&str, NoError>::pipe();
    let log = EventLog::new();
    numbers.combine_latest_with(&letters).observe(log.observer());

    // Act
    letters_in.send_completed();
    numbers_in.send_next(1);

    // Assert
    assert_no_events(&log);
    numbers_in.send_completed();
    assert_eq!(log.events(), vec![Event::Completed]);
}

#[test]
fn test_combine_latest_of_producers_runs_both_per_start() {
    // Arrange
    let numbers = Producer::<i32, NoError>::from_values([1, 2]);
    let letters = Producer::<&str, NoError>::from_values(["x"]);
    let combined = numbers.combine_latest_with(&letters);
    let log = EventLog::new();

    // Act
    combined.start(log.observer());

    // Assert
    assert_completed_with(&log, &[(1, "x"), (2, "x")]);
}
