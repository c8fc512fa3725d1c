// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pairs the values of two streams by position.

use parking_lot::Mutex;
use pulse_core::{CompositeDisposable, Event, Lift, Observer, PulseItem, Signal};
use std::collections::VecDeque;
use std::sync::Arc;

/// Extension trait providing the `zip_with` operator.
pub trait ZipExt: Lift {
    /// Emits `(self_i, other_i)` once both streams have produced their i-th value.
    ///
    /// Values waiting for a partner are queued per stream. Completes as soon as
    /// no further pair is possible: one stream has completed and its queue is
    /// empty. Fails or interrupts as soon as either stream does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pulse_core::{NoError, Signal};
    /// use pulse_stream::ZipExt;
    /// use parking_lot::Mutex;
    /// use std::sync::Arc;
    ///
    /// let (numbers, numbers_in) = Signal::<i32, NoError>::pipe();
    /// let (letters, letters_in) = Signal::<&str, NoError>::pipe();
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    ///
    /// numbers.zip_with(&letters).observe_next({
    ///     let seen = seen.clone();
    ///     move |pair| seen.lock().push(pair)
    /// });
    ///
    /// numbers_in.send_next(0);
    /// numbers_in.send_next(1);
    /// letters_in.send_next("A");
    /// letters_in.send_next("B");
    ///
    /// assert_eq!(*seen.lock(), vec![(0, "A"), (1, "B")]);
    /// ```
    fn zip_with<U>(
        &self,
        other: &Self::Lifted<U, Self::Error>,
    ) -> Self::Lifted<(Self::Item, U), Self::Error>
    where
        U: PulseItem;
}

impl<S: Lift> ZipExt for S {
    fn zip_with<U>(
        &self,
        other: &Self::Lifted<U, Self::Error>,
    ) -> Self::Lifted<(Self::Item, U), Self::Error>
    where
        U: PulseItem,
    {
        self.lift_with(other, zip_signals)
    }
}

/// Zips two signals by position. See [`ZipExt::zip_with`].
pub fn zip<A, B, E>(left: &Signal<A, E>, right: &Signal<B, E>) -> Signal<(A, B), E>
where
    A: PulseItem,
    B: PulseItem,
    E: PulseItem,
{
    zip_signals(left.clone(), right.clone())
}

struct ZipState<A, B> {
    left: VecDeque<A>,
    right: VecDeque<B>,
    left_completed: bool,
    right_completed: bool,
    done: bool,
}

impl<A, B> ZipState<A, B> {
    fn next_pair(&mut self) -> Option<(A, B)> {
        if self.left.is_empty() || self.right.is_empty() {
            return None;
        }
        self.left.pop_front().zip(self.right.pop_front())
    }

    // No further pair can ever form once a completed side has run dry.
    fn is_exhausted(&self) -> bool {
        (self.left_completed && self.left.is_empty())
            || (self.right_completed && self.right.is_empty())
    }
}

struct Zipper<A, B, E> {
    observer: Observer<(A, B), E>,
    subscriptions: CompositeDisposable,
    state: Mutex<ZipState<A, B>>,
}

impl<A: PulseItem, B: PulseItem, E: PulseItem> Zipper<A, B, E> {
    fn on_left(&self, event: Event<A, E>) {
        self.on_event(event, |state, value| state.left.push_back(value), |state| {
            state.left_completed = true;
        });
    }

    fn on_right(&self, event: Event<B, E>) {
        self.on_event(event, |state, value| state.right.push_back(value), |state| {
            state.right_completed = true;
        });
    }

    fn on_event<V, Push, Complete>(&self, event: Event<V, E>, push: Push, complete: Complete)
    where
        Push: FnOnce(&mut ZipState<A, B>, V),
        Complete: FnOnce(&mut ZipState<A, B>),
    {
        let (pair, terminal) = {
            let mut state = self.state.lock();
            if state.done {
                return;
            }

            let (pair, terminal) = match event.into_terminal() {
                Err(value) => {
                    push(&mut *state, value);
                    (state.next_pair(), None)
                }
                Ok(Event::Completed) => {
                    complete(&mut *state);
                    (None, None)
                }
                Ok(terminal) => (None, Some(terminal)),
            };

            let terminal = terminal.or_else(|| state.is_exhausted().then_some(Event::Completed));
            if terminal.is_some() {
                state.done = true;
            }
            (pair, terminal)
        };

        if let Some(pair) = pair {
            self.observer.send_next(pair);
        }
        if let Some(terminal) = terminal {
            self.subscriptions.dispose();
            self.observer.send(terminal);
        }
    }
}

fn zip_signals<A, B, E>(left: Signal<A, E>, right: Signal<B, E>) -> Signal<(A, B), E>
where
    A: PulseItem,
    B: PulseItem,
    E: PulseItem,
{
    Signal::new(move |observer| {
        let zipper = Arc::new(Zipper {
            observer,
            subscriptions: CompositeDisposable::new(),
            state: Mutex::new(ZipState {
                left: VecDeque::new(),
                right: VecDeque::new(),
                left_completed: false,
                right_completed: false,
                done: false,
            }),
        });

        let on_left = Arc::clone(&zipper);
        zipper
            .subscriptions
            .add(left.observe(Observer::new(move |event| on_left.on_left(event))));

        let on_right = Arc::clone(&zipper);
        zipper
            .subscriptions
            .add(right.observe(Observer::new(move |event| on_right.on_right(event))));

        Some(zipper.subscriptions.as_disposable())
    })
}
