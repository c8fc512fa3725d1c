// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use pulse_core::{
    debug, CompositeDisposable, Disposable, Event, Observer, PulseItem, SerialDisposable, Signal,
    Source,
};
use std::sync::Arc;

struct LatestState {
    // Bumped on every new inner stream; events tagged with an older generation are stale.
    generation: u64,
    inner_active: bool,
    outer_completed: bool,
    done: bool,
}

struct Switcher<T, E> {
    observer: Observer<T, E>,
    subscriptions: CompositeDisposable,
    inner: SerialDisposable,
    state: Mutex<LatestState>,
}

impl<T: PulseItem, E: PulseItem> Switcher<T, E> {
    fn on_outer<I>(self: &Arc<Self>, event: Event<I, E>)
    where
        I: Source<Item = T, Error = E>,
    {
        match event.into_terminal() {
            Err(inner) => {
                let generation = {
                    let mut state = self.state.lock();
                    if state.done {
                        return;
                    }
                    state.generation += 1;
                    state.inner_active = true;
                    state.generation
                };
                debug!("latest: switching to inner stream #{}", generation);

                self.inner.set(Disposable::empty());

                let this = Arc::clone(self);
                let subscription = inner
                    .subscribe(Observer::new(move |event| this.on_inner(generation, event)));

                let current = self.state.lock().generation == generation;
                if current {
                    self.inner.set(subscription);
                } else {
                    subscription.dispose();
                }
            }
            Ok(Event::Completed) => {
                {
                    let mut state = self.state.lock();
                    if state.done {
                        return;
                    }
                    state.outer_completed = true;
                    if state.inner_active {
                        return;
                    }
                    state.done = true;
                }
                self.subscriptions.dispose();
                self.observer.send_completed();
            }
            Ok(terminal) => self.finish(terminal),
        }
    }

    fn on_inner(&self, generation: u64, event: Event<T, E>) {
        match event.into_terminal() {
            Err(value) => {
                {
                    let state = self.state.lock();
                    if state.done || state.generation != generation {
                        return;
                    }
                }
                self.observer.send_next(value);
            }
            Ok(Event::Completed) => {
                {
                    let mut state = self.state.lock();
                    if state.done || state.generation != generation {
                        return;
                    }
                    state.inner_active = false;
                    if !state.outer_completed {
                        return;
                    }
                    state.done = true;
                }
                self.subscriptions.dispose();
                self.observer.send_completed();
            }
            Ok(terminal) => {
                if self.state.lock().generation != generation {
                    return;
                }
                self.finish(terminal);
            }
        }
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

pub(super) fn latest<I: Source>(outer: Signal<I, I::Error>) -> Signal<I::Item, I::Error> {
    Signal::new(move |observer| {
        let switcher = Arc::new(Switcher {
            observer,
            subscriptions: CompositeDisposable::new(),
            inner: SerialDisposable::new(),
            state: Mutex::new(LatestState {
                generation: 0,
                inner_active: false,
                outer_completed: false,
                done: false,
            }),
        });
        switcher
            .subscriptions
            .add(Disposable::from(switcher.inner.clone()));

        let on_outer = Arc::clone(&switcher);
        switcher
            .subscriptions
            .add(outer.observe(Observer::new(move |event| on_outer.on_outer(event))));

        Some(switcher.subscriptions.as_disposable())
    })
}
