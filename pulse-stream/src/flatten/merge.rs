// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use pulse_core::{
    debug, CompositeDisposable, Disposable, Event, Observer, PulseItem, SerialDisposable, Signal,
    Source,
};
use std::sync::Arc;

struct MergeState {
    // The outer stream counts as one active source until it completes.
    active: usize,
    done: bool,
}

struct Merger<T, E> {
    observer: Observer<T, E>,
    subscriptions: CompositeDisposable,
    state: Mutex<MergeState>,
}

impl<T: PulseItem, E: PulseItem> Merger<T, E> {
    fn on_outer<I>(self: &Arc<Self>, event: Event<I, E>)
    where
        I: Source<Item = T, Error = E>,
    {
        match event.into_terminal() {
            Err(inner) => {
                {
                    let mut state = self.state.lock();
                    if state.done {
                        return;
                    }
                    state.active += 1;
                }
                debug!("merge: subscribing to inner stream");

                // Created before subscribing: a synchronous inner may complete
                // before `subscribe` returns its handle.
                let slot = SerialDisposable::new();
                let entry = Disposable::from(slot.clone());
                self.subscriptions.add(entry.clone());

                let this = Arc::clone(self);
                let subscription =
                    inner.subscribe(Observer::new(move |event| this.on_inner(event, &entry)));
                slot.set(subscription);
            }
            Ok(Event::Completed) => self.release(),
            Ok(terminal) => self.finish(terminal),
        }
    }

    fn on_inner(&self, event: Event<T, E>, entry: &Disposable) {
        match event.into_terminal() {
            Err(value) => {
                if self.state.lock().done {
                    return;
                }
                self.observer.send_next(value);
            }
            Ok(Event::Completed) => {
                debug!("merge: inner stream completed, releasing its subscription");
                self.subscriptions.remove(entry);
                entry.dispose();
                self.release();
            }
            Ok(terminal) => self.finish(terminal),
        }
    }

    fn release(&self) {
        {
            let mut state = self.state.lock();
            if state.done {
                return;
            }
            state.active -= 1;
            if state.active > 0 {
                return;
            }
            state.done = true;
        }

        self.subscriptions.dispose();
        self.observer.send_completed();
    }

    fn finish(&self, terminal: Event<T, E>) {
        {
            let mut state = self.state.lock();
            if state.done {
                return;
            }
            state.done = true;
        }

        self.subscriptions.dispose();
        self.observer.send(terminal);
    }
}

pub(super) fn merge<I: Source>(outer: Signal<I, I::Error>) -> Signal<I::Item, I::Error> {
    Signal::new(move |observer| {
        let merger = Arc::new(Merger {
            observer,
            subscriptions: CompositeDisposable::new(),
            state: Mutex::new(MergeState {
                active: 1,
                done: false,
            }),
        });

        let on_outer = Arc::clone(&merger);
        merger
            .subscriptions
            .add(outer.observe(Observer::new(move |event| on_outer.on_outer(event))));

        Some(merger.subscriptions.as_disposable())
    })
}
