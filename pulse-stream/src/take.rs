// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use pulse_core::{Event, Lift, Observer, Signal};

/// Extension trait providing the `take` operator for signals and producers.
pub trait TakeExt: Lift {
    /// Forwards the first `count` values, then completes and detaches from the source.
    ///
    /// `take(0)` forwards nothing and completes on the first upstream event. On a
    /// producer, completing early also interrupts the upstream run.
    fn take(&self, count: usize) -> Self::Lifted<Self::Item, Self::Error>;
}

impl<S: Lift> TakeExt for S {
    fn take(&self, count: usize) -> Self::Lifted<Self::Item, Self::Error> {
        self.lift(move |source: Signal<Self::Item, Self::Error>| {
            Signal::new(move |observer| {
                let remaining = Mutex::new(count);
                Some(source.observe(Observer::new(move |event| {
                    let left = {
                        let mut remaining = remaining.lock();
                        if observer.is_terminated() {
                            return;
                        }
                        if *remaining == 0 {
                            None
                        } else {
                            if event.is_next() {
                                *remaining -= 1;
                            }
                            Some(*remaining)
                        }
                    };

                    match (event, left) {
                        // Nothing may pass: the first upstream event ends the stream
                        (Event::Next(_), None) => observer.send_completed(),
                        (Event::Next(value), Some(left)) => {
                            observer.send_next(value);
                            if left == 0 {
                                observer.send_completed();
                            }
                        }
                        (terminal, _) => observer.send(terminal),
                    }
                })))
            })
        })
    }
}
