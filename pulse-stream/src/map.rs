// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Value and error transformation.

use pulse_core::{Event, Lift, Observer, PulseItem, Signal};
use std::sync::Arc;

/// Extension trait providing `map` and `map_err` for signals and producers.
pub trait MapExt: Lift {
    /// Transforms each value with `f`; terminal events pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pulse_core::{NoError, Signal};
    /// use pulse_stream::MapExt;
    /// use parking_lot::Mutex;
    /// use std::sync::Arc;
    ///
    /// let (numbers, input) = Signal::<i32, NoError>::pipe();
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    ///
    /// numbers.map(|n| n * 10).observe_next({
    ///     let seen = seen.clone();
    ///     move |n| seen.lock().push(n)
    /// });
    ///
    /// input.send_next(1);
    /// input.send_next(2);
    /// assert_eq!(*seen.lock(), vec![10, 20]);
    /// ```
    fn map<U, Func>(&self, f: Func) -> Self::Lifted<U, Self::Error>
    where
        U: PulseItem,
        Func: Fn(Self::Item) -> U + Send + Sync + 'static;

    /// Transforms the error of a `Failed` event with `f`.
    fn map_err<F, Func>(&self, f: Func) -> Self::Lifted<Self::Item, F>
    where
        F: PulseItem,
        Func: Fn(Self::Error) -> F + Send + Sync + 'static;
}

impl<S: Lift> MapExt for S {
    fn map<U, Func>(&self, f: Func) -> Self::Lifted<U, Self::Error>
    where
        U: PulseItem,
        Func: Fn(Self::Item) -> U + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        self.lift(move |signal| {
            let f = Arc::clone(&f);
            transform(signal, move |event| event.map(|value| f(value)))
        })
    }

    fn map_err<F, Func>(&self, f: Func) -> Self::Lifted<Self::Item, F>
    where
        F: PulseItem,
        Func: Fn(Self::Error) -> F + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        self.lift(move |signal| {
            let f = Arc::clone(&f);
            transform(signal, move |event| event.map_err(|error| f(error)))
        })
    }
}

fn transform<T, E, U, F, Func>(source: Signal<T, E>, f: Func) -> Signal<U, F>
where
    T: PulseItem,
    E: PulseItem,
    U: PulseItem,
    F: PulseItem,
    Func: Fn(Event<T, E>) -> Event<U, F> + Send + Sync + 'static,
{
    Signal::new(move |observer| {
        Some(source.observe(Observer::new(move |event| observer.send(f(event)))))
    })
}

pub(crate) fn map_signal<T, E, U, Func>(source: Signal<T, E>, f: Func) -> Signal<U, E>
where
    T: PulseItem,
    E: PulseItem,
    U: PulseItem,
    Func: Fn(T) -> U + Send + Sync + 'static,
{
    transform(source, move |event| event.map(|value| f(value)))
}
