// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::EventLog;
use pulse_core::{Event, PulseItem};
use std::fmt::Debug;

/// Asserts the log holds exactly `expected` as `Next` values and nothing terminal.
pub fn assert_values<T, E>(log: &EventLog<T, E>, expected: &[T])
where
    T: PulseItem + PartialEq + Debug,
    E: PulseItem + PartialEq + Debug,
{
    let expected: Vec<Event<T, E>> = expected.iter().cloned().map(Event::Next).collect();
    assert_eq!(log.events(), expected);
}

/// Asserts the log holds `expected` values followed by a single `Completed`.
pub fn assert_completed_with<T, E>(log: &EventLog<T, E>, expected: &[T])
where
    T: PulseItem + PartialEq + Debug,
    E: PulseItem + PartialEq + Debug,
{
    let mut expected: Vec<Event<T, E>> = expected.iter().cloned().map(Event::Next).collect();
    expected.push(Event::Completed);
    assert_eq!(log.events(), expected);
}

/// Asserts nothing was recorded.
pub fn assert_no_events<T, E>(log: &EventLog<T, E>)
where
    T: PulseItem + Debug,
    E: PulseItem + Debug,
{
    let events = log.events();
    assert!(
        events.is_empty(),
        "Unexpected events emitted, expected no output: {events:?}"
    );
}
