// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use pulse_core::{Event, Lift, Observer, PulseItem, Signal};
use std::sync::Arc;

/// Extension trait providing the `scan` operator for signals and producers.
pub trait ScanExt: Lift {
    /// Accumulates values with `f` starting from `initial`, emitting every
    /// intermediate accumulator.
    ///
    /// Terminal events pass through. On a producer each run starts again from `initial`.
    fn scan<A, Func>(&self, initial: A, f: Func) -> Self::Lifted<A, Self::Error>
    where
        A: PulseItem,
        Func: Fn(A, Self::Item) -> A + Send + Sync + 'static;
}

impl<S: Lift> ScanExt for S {
    fn scan<A, Func>(&self, initial: A, f: Func) -> Self::Lifted<A, Self::Error>
    where
        A: PulseItem,
        Func: Fn(A, Self::Item) -> A + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        self.lift(move |source: Signal<Self::Item, Self::Error>| {
            let f = Arc::clone(&f);
            let accumulator = Mutex::new(initial.clone());
            Signal::new(move |observer| {
                Some(source.observe(Observer::new(move |event| match event {
                    Event::Next(value) => {
                        // The closure runs unlocked so it may feed the source again
                        let current = accumulator.lock().clone();
                        let next = f(current, value);
                        *accumulator.lock() = next.clone();
                        observer.send_next(next);
                    }
                    terminal => {
                        if let Ok(terminal) = terminal.into_terminal() {
                            observer.send(terminal);
                        }
                    }
                })))
            })
        })
    }
}
