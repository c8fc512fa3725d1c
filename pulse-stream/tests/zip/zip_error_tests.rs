// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::{Event, Signal};
use pulse_stream::ZipExt;
use pulse_test_utils::{EventLog, TestError};

#[test]
fn test_zip_fails_immediately_even_with_queued_values() {
    // Arrange
    let (numbers, numbers_in) = Signal::<i32, TestError>::pipe();
    let (letters, letters_in) = Signal::<&str, TestError>::pipe();
    let log = EventLog::new();
    numbers.zip_with(&letters).observe(log.observer());

    // Act
    numbers_in.send_next(1);
    numbers_in.send_next(2);
    letters_in.send_failed(TestError::boom("letters"));
    numbers_in.send_next(3);

    // Assert
    assert_eq!(log.events(), vec![Event::Failed(TestError::boom("letters"))]);
    assert_eq!(numbers.observer_count(), 0);
}

#[test]
fn test_zip_forwards_interruption() {
    // Arrange
    let (numbers, numbers_in) = Signal::<i32, TestError>::pipe();
    let (letters, _letters_in) = Signal::<&str, TestError>::pipe();
    let log = EventLog::new();
    numbers.zip_with(&letters).observe(log.observer());

    // Act
    numbers_in.send_interrupted();

    // Assert
    assert_eq!(log.events(), vec![Event::Interrupted]);
    assert_eq!(letters.observer_count(), 0);
}
