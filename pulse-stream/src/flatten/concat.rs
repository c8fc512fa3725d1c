// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use pulse_core::{
    debug, CompositeDisposable, Disposable, Event, Observer, SerialDisposable, Signal, Source,
};
use std::collections::VecDeque;
use std::sync::Arc;

struct ConcatState<I> {
    pending: VecDeque<I>,
    inner_active: bool,
    outer_completed: bool,
    done: bool,
    // A `drain` loop is subscribing inners on some stack frame.
    draining: bool,
    // The current inner completed while `drain` was still subscribing it.
    inner_finished: bool,
}

struct Concatenator<I: Source> {
    observer: Observer<I::Item, I::Error>,
    subscriptions: CompositeDisposable,
    state: Mutex<ConcatState<I>>,
}

impl<I: Source> Concatenator<I> {
    fn on_outer(self: &Arc<Self>, event: Event<I, I::Error>) {
        match event.into_terminal() {
            Err(inner) => {
                {
                    let mut state = self.state.lock();
                    if state.done {
                        return;
                    }
                    if state.inner_active {
                        state.pending.push_back(inner);
                        return;
                    }
                    state.inner_active = true;
                    state.draining = true;
                }
                self.drain(inner);
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

    fn on_inner(self: &Arc<Self>, event: Event<I::Item, I::Error>, entry: &Disposable) {
        match event.into_terminal() {
            Err(value) => {
                if self.state.lock().done {
                    return;
                }
                self.observer.send_next(value);
            }
            Ok(Event::Completed) => {
                self.subscriptions.remove(entry);
                entry.dispose();
                self.advance();
            }
            Ok(terminal) => self.finish(terminal),
        }
    }

    fn advance(self: &Arc<Self>) {
        let next = {
            let mut state = self.state.lock();
            if state.done {
                return;
            }
            if state.draining {
                state.inner_finished = true;
                return;
            }
            let next = state.pending.pop_front();
            if next.is_some() {
                state.draining = true;
            }
            Self::settle(&mut *state, next)
        };

        match next {
            Ok(next) => self.drain(next),
            Err(completed) => self.complete(completed),
        }
    }

    // Subscribes `inner` and every pending inner after it as long as each one
    // completes during its own subscription, without growing the stack.
    fn drain(self: &Arc<Self>, inner: I) {
        let mut inner = inner;
        loop {
            self.subscribe_inner(inner);

            let next = {
                let mut state = self.state.lock();
                if state.done || !state.inner_finished {
                    state.draining = false;
                    return;
                }
                state.inner_finished = false;

                let next = state.pending.pop_front();
                if next.is_none() {
                    state.draining = false;
                }
                Self::settle(&mut *state, next)
            };

            match next {
                Ok(next) => inner = next,
                Err(completed) => return self.complete(completed),
            }
        }
    }

    // With no inner left to subscribe, concat is done once the outer completed.
    fn settle(state: &mut ConcatState<I>, next: Option<I>) -> Result<I, bool> {
        next.ok_or_else(|| {
            state.inner_active = false;
            state.done = state.outer_completed;
            state.done
        })
    }

    fn complete(&self, completed: bool) {
        if completed {
            self.subscriptions.dispose();
            self.observer.send_completed();
        }
    }

    fn subscribe_inner(self: &Arc<Self>, inner: I) {
        debug!("concat: subscribing to next inner stream");

        // Created before subscribing: the inner may complete before `subscribe`
        // returns its handle.
        let slot = SerialDisposable::new();
        let entry = Disposable::from(slot.clone());
        self.subscriptions.add(entry.clone());

        let this = Arc::clone(self);
        let subscription =
            inner.subscribe(Observer::new(move |event| this.on_inner(event, &entry)));
        slot.set(subscription);
    }

    fn finish(&self, terminal: Event<I::Item, I::Error>) {
        {
            let mut state = self.state.lock();
            if state.done {
                return;
            }
            state.done = true;
            state.pending.clear();
        }

        self.subscriptions.dispose();
        self.observer.send(terminal);
    }
}

pub(super) fn concat<I: Source>(outer: Signal<I, I::Error>) -> Signal<I::Item, I::Error> {
    Signal::new(move |observer| {
        let concatenator = Arc::new(Concatenator {
            observer,
            subscriptions: CompositeDisposable::new(),
            state: Mutex::new(ConcatState {
                pending: VecDeque::new(),
                inner_active: false,
                outer_completed: false,
                done: false,
                draining: false,
                inner_finished: false,
            }),
        });

        let on_outer = Arc::clone(&concatenator);
        concatenator
            .subscriptions
            .add(outer.observe(Observer::new(move |event| on_outer.on_outer(event))));

        Some(concatenator.subscriptions.as_disposable())
    })
}
