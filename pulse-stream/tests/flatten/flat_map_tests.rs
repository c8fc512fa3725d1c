// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::{NoError, Producer, Signal};
use pulse_stream::{FlatMapExt, FlattenStrategy};
use pulse_test_utils::{assert_completed_with, assert_values, EventLog};

#[test]
fn test_flat_map_expands_each_value() {
    // Arrange
    let log = EventLog::new();

    // Act
    Producer::<i32, NoError>::from_values([1, 2, 3])
        .flat_map(FlattenStrategy::Concat, |n| {
            Producer::<i32, NoError>::from_values(vec![n; n as usize])
        })
        .start(log.observer());

    // Assert
    assert_completed_with(&log, &[1, 2, 2, 3, 3, 3]);
}

#[test]
fn test_flat_map_latest_switches_to_newest_signal() {
    // Arrange
    let (keys, keys_in) = Signal::<&str, NoError>::pipe();
    let (lower, lower_in) = Signal::<String, NoError>::pipe();
    let (upper, upper_in) = Signal::<String, NoError>::pipe();
    let log = EventLog::new();
    keys.flat_map(FlattenStrategy::Latest, move |key| {
        if key == "lower" {
            lower.clone()
        } else {
            upper.clone()
        }
    })
    .observe(log.observer());

    // Act
    keys_in.send_next("lower");
    lower_in.send_next("a".to_string());
    keys_in.send_next("upper");
    lower_in.send_next("b".to_string());
    upper_in.send_next("B".to_string());

    // Assert
    assert_values(&log, &["a".to_string(), "B".to_string()]);
}
