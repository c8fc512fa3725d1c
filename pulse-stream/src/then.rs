// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sequencing one producer after another, ignoring the first one's values.

use pulse_core::{Event, Observer, Producer, PulseItem, Source};

/// Extension trait providing `then` for producers.
pub trait ThenExt: Source {
    /// Runs `self` for its side effects, then `next` once `self` completes.
    ///
    /// Values of `self` are dropped. A failure or interruption of `self` ends
    /// the combined run without starting `next`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pulse_core::{NoError, Producer};
    /// use pulse_stream::{CollectExt, ThenExt};
    /// use parking_lot::Mutex;
    /// use std::sync::Arc;
    ///
    /// let warmup = Producer::<i32, NoError>::from_values([1, 2, 3]);
    /// let greeting = Producer::<&str, NoError>::from_values(["ready"]);
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    ///
    /// warmup.then(&greeting).collect().start_with_next({
    ///     let seen = seen.clone();
    ///     move |values| *seen.lock() = values
    /// });
    ///
    /// assert_eq!(*seen.lock(), vec!["ready"]);
    /// ```
    fn then<U: PulseItem>(&self, next: &Producer<U, Self::Error>) -> Producer<U, Self::Error>;
}

impl<T: PulseItem, E: PulseItem> ThenExt for Producer<T, E> {
    fn then<U: PulseItem>(&self, next: &Producer<U, E>) -> Producer<U, E> {
        let first = self.clone();
        let next = next.clone();

        Producer::new(move |observer, run| {
            let next = next.clone();
            let next_run = run.clone();
            run.add(first.start(Observer::new(move |event: Event<T, E>| {
                match event.into_terminal() {
                    Err(_) => {}
                    Ok(Event::Completed) => next_run.add(next.start(observer.clone())),
                    Ok(terminal) => observer.send(terminal),
                }
            })));
        })
    }
}
