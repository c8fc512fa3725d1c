// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::{NoError, Signal};
use pulse_stream::{CollectExt, ReduceExt};
use pulse_test_utils::{assert_completed_with, value_sequences, EventLog};

const SEED: u64 = 0x5EED;

#[test]
fn test_collect_equals_sent_sequence_for_random_inputs() {
    for values in value_sequences(SEED, 32) {
        // Arrange
        let (numbers, input) = Signal::<i64, NoError>::pipe();
        let log = EventLog::new();
        numbers.collect().observe(log.observer());

        // Act
        for value in &values {
            input.send_next(*value);
        }
        input.send_completed();

        // Assert
        assert_completed_with(&log, &[values]);
    }
}

#[test]
fn test_reduce_equals_left_fold_for_random_inputs() {
    let fold = |acc: i64, n: i64| acc.wrapping_mul(31).wrapping_add(n);

    for values in value_sequences(SEED + 1, 32) {
        // Arrange
        let (numbers, input) = Signal::<i64, NoError>::pipe();
        let log = EventLog::new();
        numbers.reduce(7, fold).observe(log.observer());
        let expected = values.iter().copied().fold(7, fold);

        // Act
        for value in &values {
            input.send_next(*value);
        }
        input.send_completed();

        // Assert
        assert_completed_with(&log, &[expected]);
    }
}
