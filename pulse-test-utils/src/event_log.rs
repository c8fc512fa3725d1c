// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use pulse_core::{Event, Observer, PulseItem};
use std::sync::Arc;

/// Records every event delivered to the observers it creates, in delivery order.
///
/// Cloning the log shares the recording.
pub struct EventLog<T, E> {
    events: Arc<Mutex<Vec<Event<T, E>>>>,
}

impl<T: PulseItem, E: PulseItem> EventLog<T, E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// An observer appending to this log.
    pub fn observer(&self) -> Observer<T, E> {
        let events = Arc::clone(&self.events);
        Observer::new(move |event| events.lock().push(event))
    }

    /// An observer appending `Next` values mapped through `f`, for logs shared by
    /// several streams of different types.
    pub fn observer_mapped<U, F>(&self, f: F) -> Observer<U, E>
    where
        U: PulseItem,
        F: Fn(U) -> T + Send + Sync + 'static,
    {
        let events = Arc::clone(&self.events);
        Observer::new(move |event: Event<U, E>| events.lock().push(event.map(&f)))
    }

    /// All recorded events.
    pub fn events(&self) -> Vec<Event<T, E>> {
        self.events.lock().clone()
    }

    /// Removes and returns all recorded events.
    pub fn take(&self) -> Vec<Event<T, E>> {
        std::mem::take(&mut *self.events.lock())
    }

    /// The recorded `Next` values.
    pub fn values(&self) -> Vec<T> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::Next(value) => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn last(&self) -> Option<Event<T, E>> {
        self.events.lock().last().cloned()
    }

    pub fn is_completed(&self) -> bool {
        self.events.lock().iter().any(Event::is_completed)
    }

    pub fn is_failed(&self) -> bool {
        self.events.lock().iter().any(Event::is_failed)
    }

    pub fn is_interrupted(&self) -> bool {
        self.events.lock().iter().any(Event::is_interrupted)
    }

    /// Number of terminal events recorded.
    pub fn terminal_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| event.is_terminal())
            .count()
    }
}

impl<T: PulseItem, E: PulseItem> Default for EventLog<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for EventLog<T, E> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}
