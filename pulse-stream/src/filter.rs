// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pulse_core::{Event, Lift, Observer, Signal};
use std::sync::Arc;

/// Extension trait providing the `filter` operator for signals and producers.
pub trait FilterExt: Lift {
    /// Forwards only the values for which `predicate` returns `true`.
    ///
    /// Terminal events always pass through.
    fn filter<P>(&self, predicate: P) -> Self::Lifted<Self::Item, Self::Error>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static;
}

impl<S: Lift> FilterExt for S {
    fn filter<P>(&self, predicate: P) -> Self::Lifted<Self::Item, Self::Error>
    where
        P: Fn(&Self::Item) -> bool + Send + Sync + 'static,
    {
        let predicate = Arc::new(predicate);
        self.lift(move |source: Signal<Self::Item, Self::Error>| {
            let predicate = Arc::clone(&predicate);
            Signal::new(move |observer| {
                Some(source.observe(Observer::new(move |event| match event {
                    Event::Next(value) => {
                        if predicate(&value) {
                            observer.send_next(value);
                        }
                    }
                    terminal => observer.send(terminal),
                })))
            })
        })
    }
}
