// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pairs the latest values of two streams.

use parking_lot::Mutex;
use pulse_core::{CompositeDisposable, Event, Lift, Observer, PulseItem, Signal};
use std::sync::Arc;

/// Extension trait providing the `combine_latest_with` operator.
pub trait CombineLatestExt: Lift {
    /// Emits `(latest_self, latest_other)` whenever either stream emits, once
    /// both have emitted at least once.
    ///
    /// - A completed stream's last value stays "latest" until both complete.
    /// - Completes when both streams have completed.
    /// - Fails or interrupts as soon as either stream does, detaching from the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pulse_core::{NoError, Signal};
    /// use pulse_stream::CombineLatestExt;
    /// use parking_lot::Mutex;
    /// use std::sync::Arc;
    ///
    /// let (numbers, numbers_in) = Signal::<i32, NoError>::pipe();
    /// let (letters, letters_in) = Signal::<&str, NoError>::pipe();
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    ///
    /// numbers.combine_latest_with(&letters).observe_next({
    ///     let seen = seen.clone();
    ///     move |pair| seen.lock().push(pair)
    /// });
    ///
    /// numbers_in.send_next(0);
    /// numbers_in.send_next(1);
    /// letters_in.send_next("A");
    /// numbers_in.send_next(2);
    ///
    /// assert_eq!(*seen.lock(), vec![(1, "A"), (2, "A")]);
    /// ```
    fn combine_latest_with<U>(
        &self,
        other: &Self::Lifted<U, Self::Error>,
    ) -> Self::Lifted<(Self::Item, U), Self::Error>
    where
        U: PulseItem;
}

impl<S: Lift> CombineLatestExt for S {
    fn combine_latest_with<U>(
        &self,
        other: &Self::Lifted<U, Self::Error>,
    ) -> Self::Lifted<(Self::Item, U), Self::Error>
    where
        U: PulseItem,
    {
        self.lift_with(other, combine_latest_signals)
    }
}

/// Combines the latest values of two signals. See [`CombineLatestExt::combine_latest_with`].
pub fn combine_latest<A, B, E>(left: &Signal<A, E>, right: &Signal<B, E>) -> Signal<(A, B), E>
where
    A: PulseItem,
    B: PulseItem,
    E: PulseItem,
{
    combine_latest_signals(left.clone(), right.clone())
}

struct CombineState<A, B> {
    left: Option<A>,
    right: Option<B>,
    left_completed: bool,
    right_completed: bool,
    done: bool,
}

struct Combiner<A, B, E> {
    observer: Observer<(A, B), E>,
    subscriptions: CompositeDisposable,
    state: Mutex<CombineState<A, B>>,
}

impl<A: PulseItem, B: PulseItem, E: PulseItem> Combiner<A, B, E> {
    fn on_left(&self, event: Event<A, E>) {
        match event.into_terminal() {
            Err(value) => {
                let pair = {
                    let mut state = self.state.lock();
                    if state.done {
                        return;
                    }
                    state.left = Some(value);
                    state.pair()
                };
                if let Some(pair) = pair {
                    self.observer.send_next(pair);
                }
            }
            Ok(terminal) => self.on_terminal(terminal, |state| {
                state.left_completed = true;
            }),
        }
    }

    fn on_right(&self, event: Event<B, E>) {
        match event.into_terminal() {
            Err(value) => {
                let pair = {
                    let mut state = self.state.lock();
                    if state.done {
                        return;
                    }
                    state.right = Some(value);
                    state.pair()
                };
                if let Some(pair) = pair {
                    self.observer.send_next(pair);
                }
            }
            Ok(terminal) => self.on_terminal(terminal, |state| {
                state.right_completed = true;
            }),
        }
    }

    fn on_terminal<F>(&self, terminal: Event<(A, B), E>, mark_completed: F)
    where
        F: FnOnce(&mut CombineState<A, B>),
    {
        {
            let mut state = self.state.lock();
            if state.done {
                return;
            }
            if terminal.is_completed() {
                mark_completed(&mut *state);
                if !(state.left_completed && state.right_completed) {
                    return;
                }
            }
            state.done = true;
        }

        self.subscriptions.dispose();
        self.observer.send(terminal);
    }
}

impl<A: Clone, B: Clone> CombineState<A, B> {
    fn pair(&self) -> Option<(A, B)> {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => Some((left.clone(), right.clone())),
            _ => None,
        }
    }
}

fn combine_latest_signals<A, B, E>(left: Signal<A, E>, right: Signal<B, E>) -> Signal<(A, B), E>
where
    A: PulseItem,
    B: PulseItem,
    E: PulseItem,
{
    Signal::new(move |observer| {
        let combiner = Arc::new(Combiner {
            observer,
            subscriptions: CompositeDisposable::new(),
            state: Mutex::new(CombineState {
                left: None,
                right: None,
                left_completed: false,
                right_completed: false,
                done: false,
            }),
        });

        let on_left = Arc::clone(&combiner);
        combiner
            .subscriptions
            .add(left.observe(Observer::new(move |event| on_left.on_left(event))));

        let on_right = Arc::clone(&combiner);
        combiner
            .subscriptions
            .add(right.observe(Observer::new(move |event| on_right.on_right(event))));

        Some(combiner.subscriptions.as_disposable())
    })
}
