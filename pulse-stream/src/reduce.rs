// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Aggregation on completion.

use parking_lot::Mutex;
use pulse_core::{Event, Lift, Observer, PulseItem, Signal};
use std::sync::Arc;

/// Extension trait providing the `reduce` operator for signals and producers.
pub trait ReduceExt: Lift {
    /// Folds every value into an accumulator starting at `initial`.
    ///
    /// When the source completes, emits the final accumulator followed by
    /// `Completed`. If the source fails or is interrupted first, only that
    /// terminal event is forwarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pulse_core::{NoError, Signal};
    /// use pulse_stream::ReduceExt;
    /// use parking_lot::Mutex;
    /// use std::sync::Arc;
    ///
    /// let (numbers, input) = Signal::<i32, NoError>::pipe();
    /// let total = Arc::new(Mutex::new(None));
    ///
    /// numbers.reduce(1, |acc, n| acc + n).observe_next({
    ///     let total = total.clone();
    ///     move |sum| *total.lock() = Some(sum)
    /// });
    ///
    /// input.send_next(1);
    /// input.send_next(2);
    /// input.send_next(3);
    /// assert_eq!(*total.lock(), None);
    ///
    /// input.send_completed();
    /// assert_eq!(*total.lock(), Some(7));
    /// ```
    fn reduce<A, Func>(&self, initial: A, f: Func) -> Self::Lifted<A, Self::Error>
    where
        A: PulseItem,
        Func: Fn(A, Self::Item) -> A + Send + Sync + 'static;
}

impl<S: Lift> ReduceExt for S {
    fn reduce<A, Func>(&self, initial: A, f: Func) -> Self::Lifted<A, Self::Error>
    where
        A: PulseItem,
        Func: Fn(A, Self::Item) -> A + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        self.lift(move |source| {
            let f = Arc::clone(&f);
            aggregate(source, initial.clone(), move |acc, value| f(acc, value))
        })
    }
}

/// Extension trait providing the `collect` operator for signals and producers.
pub trait CollectExt: Lift {
    /// Gathers every value, in order, into a single `Vec` emitted on completion
    /// and followed by `Completed`.
    ///
    /// Failure and interruption propagate as with [`ReduceExt::reduce`].
    fn collect(&self) -> Self::Lifted<Vec<Self::Item>, Self::Error>;
}

impl<S: Lift> CollectExt for S {
    fn collect(&self) -> Self::Lifted<Vec<Self::Item>, Self::Error> {
        self.lift(|source| {
            aggregate(source, Vec::new(), |mut values, value| {
                values.push(value);
                values
            })
        })
    }
}

pub(crate) fn aggregate<T, E, A, Func>(source: Signal<T, E>, initial: A, f: Func) -> Signal<A, E>
where
    T: PulseItem,
    E: PulseItem,
    A: PulseItem,
    Func: Fn(A, T) -> A + Send + Sync + 'static,
{
    // `None` once the accumulator has been handed out
    let accumulator = Mutex::new(Some(initial));
    Signal::new(move |observer| {
        Some(source.observe(Observer::new(move |event| match event {
            Event::Next(value) => {
                let mut accumulator = accumulator.lock();
                if let Some(current) = accumulator.take() {
                    *accumulator = Some(f(current, value));
                }
            }
            Event::Completed => {
                let result = accumulator.lock().take();
                if let Some(result) = result {
                    observer.send_next(result);
                }
                observer.send_completed();
            }
            Event::Failed(error) => observer.send_failed(error),
            Event::Interrupted => observer.send_interrupted(),
        })))
    })
}
