// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cold, restartable streams.
//!
//! A [`Producer`] stores the logic that produces events. Every
//! [`start`](Producer::start) runs that logic again against a fresh
//! [`Signal`], so two runs are independent.
//!
//! [`Producer::buffer`] is the exception: all runs share one hot stream plus a
//! bounded history that is replayed to every new run before live events.
//!
//! ## Example
//!
//! ```
//! use pulse_core::{NoError, Producer};
//! use parking_lot::Mutex;
//! use std::sync::Arc;
//!
//! let (producer, input) = Producer::<&str, NoError>::buffer(2);
//! input.send_next("a");
//! input.send_next("b");
//! input.send_next("c"); // evicts "a"
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! producer.start_with_next({
//!     let seen = seen.clone();
//!     move |value| seen.lock().push(value)
//! });
//! input.send_next("d");
//!
//! assert_eq!(*seen.lock(), vec!["b", "c", "d"]);
//! ```

use crate::{
    CompositeDisposable, Disposable, Event, Lift, Observer, PulseError, PulseItem, Signal, Source,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

type Builder<T, E> = dyn Fn(Observer<T, E>, &CompositeDisposable) + Send + Sync;

/// A cold stream: a factory of signals.
///
/// See the [module documentation](self) for examples and more details.
pub struct Producer<T, E = PulseError> {
    builder: Arc<Builder<T, E>>,
}

impl<T: PulseItem, E: PulseItem> Producer<T, E> {
    /// Creates a producer from its production logic.
    ///
    /// `builder` runs on every start with the observer feeding that run and the
    /// run's composite disposable. Long-running builders should stop once the
    /// composite is disposed and register their own cleanup on it.
    pub fn new<F>(builder: F) -> Self
    where
        F: Fn(Observer<T, E>, &CompositeDisposable) + Send + Sync + 'static,
    {
        Self {
            builder: Arc::new(builder),
        }
    }

    /// Creates a buffered producer together with the observer that feeds it.
    ///
    /// Every start first replays, in order, the last `capacity` values sent
    /// through the observer (and the terminal event, once sent), then delivers
    /// live events. Older values are evicted once `capacity` is exceeded.
    pub fn buffer(capacity: usize) -> (Self, Observer<T, E>) {
        let (live, live_input) = Signal::<(u64, T), E>::pipe();
        let history = Arc::new(Mutex::new(ReplayBuffer::new(capacity)));

        let input = Observer::input({
            let history = Arc::clone(&history);
            move |event| {
                let tagged = history.lock().record(event);
                live_input.send(tagged);
            }
        });

        let producer = Self::new(move |observer, run| {
            replay_then_attach(&history, &live, observer, run);
        });

        (producer, input)
    }

    /// A producer sending `values` and then completing.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        Self::new(move |observer, run| {
            for value in &values {
                if run.is_disposed() {
                    return;
                }
                observer.send_next(value.clone());
            }
            observer.send_completed();
        })
    }

    /// A producer that completes immediately.
    pub fn empty() -> Self {
        Self::new(|observer, _| observer.send_completed())
    }

    /// A producer that fails immediately with `error`.
    pub fn failed(error: E) -> Self {
        Self::new(move |observer, _| observer.send_failed(error.clone()))
    }

    /// A producer that never sends anything.
    pub fn never() -> Self {
        Self::new(|_, _| {})
    }

    /// A producer whose every start observes `signal`.
    ///
    /// The signal is hot, so each run only sees events sent after it started.
    pub fn from_signal(signal: Signal<T, E>) -> Self {
        Self::new(move |observer, run| run.add(signal.observe(observer)))
    }

    /// Start a run, delivering its events to `observer`.
    ///
    /// Disposing the returned handle interrupts the run.
    pub fn start(&self, observer: Observer<T, E>) -> Disposable {
        self.start_with_signal(|signal, _| {
            signal.observe(observer);
        })
    }

    /// Start a run, reacting only to its values.
    pub fn start_with_next<F>(&self, on_next: F) -> Disposable
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.start(Observer::from_next(on_next))
    }

    /// Start a run, handing its signal to `setup` before any event is produced.
    ///
    /// `setup` also receives the handle that interrupts the run, the same handle
    /// this method returns. If `setup` disposes it, the production logic never runs.
    pub fn start_with_signal<F>(&self, setup: F) -> Disposable
    where
        F: FnOnce(Signal<T, E>, &Disposable),
    {
        let (signal, input) = Signal::relay();
        let run = CompositeDisposable::new();

        let handle = Disposable::new({
            let input = input.clone();
            let run = run.clone();
            move || {
                if !input.is_terminated() {
                    debug!("interrupting producer run");
                    input.send_interrupted();
                }
                run.dispose();
            }
        });

        setup(signal.clone(), &handle);

        run.add(signal.observe(Observer::new({
            let run = run.clone();
            move |event: Event<T, E>| {
                if event.is_terminal() {
                    run.dispose();
                }
            }
        })));

        if run.is_disposed() {
            return handle;
        }

        (self.builder)(input, &run);
        handle
    }
}

struct ReplayBuffer<T, E> {
    capacity: usize,
    next_sequence: u64,
    values: VecDeque<(u64, T)>,
    terminal: Option<Event<T, E>>,
}

impl<T: PulseItem, E: PulseItem> ReplayBuffer<T, E> {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            next_sequence: 1,
            values: VecDeque::with_capacity(capacity),
            terminal: None,
        }
    }

    // Positions start at 1 so that 0 means "nothing replayed yet".
    fn record(&mut self, event: Event<T, E>) -> Event<(u64, T), E> {
        match event {
            Event::Next(value) => {
                let sequence = self.next_sequence;
                self.next_sequence += 1;
                if self.capacity > 0 {
                    self.values.push_back((sequence, value.clone()));
                    while self.values.len() > self.capacity {
                        self.values.pop_front();
                        trace!("replay buffer full, evicted oldest value");
                    }
                }
                Event::Next((sequence, value))
            }
            terminal => {
                self.terminal = Some(terminal.clone());
                terminal.map(|value| (0, value))
            }
        }
    }

    fn pending_after(&self, position: u64) -> Vec<(u64, T)> {
        self.values
            .iter()
            .filter(|(sequence, _)| *sequence > position)
            .cloned()
            .collect()
    }
}

enum ReplayStep<T, E> {
    Replay(Vec<(u64, T)>),
    Finish(Event<T, E>),
    Live(Disposable),
}

fn replay_then_attach<T: PulseItem, E: PulseItem>(
    history: &Mutex<ReplayBuffer<T, E>>,
    live: &Signal<(u64, T), E>,
    observer: Observer<T, E>,
    run: &CompositeDisposable,
) {
    let mut position = 0;

    // Replay until caught up, then attach while still holding the history lock
    // so nothing recorded in between is missed. Values recorded before the
    // attachment but delivered live after it are filtered by position.
    loop {
        let step = {
            let history = history.lock();
            let pending = history.pending_after(position);
            if !pending.is_empty() {
                ReplayStep::Replay(pending)
            } else if let Some(terminal) = &history.terminal {
                ReplayStep::Finish(terminal.clone())
            } else {
                let replayed_up_to = position;
                let observer = observer.clone();
                ReplayStep::Live(live.observe(Observer::new(
                    move |event: Event<(u64, T), E>| match event {
                        Event::Next((sequence, _)) if sequence <= replayed_up_to => {}
                        event => observer.send(event.map(|(_, value)| value)),
                    },
                )))
            }
        };

        match step {
            ReplayStep::Replay(pending) => {
                trace!("replaying {} buffered values", pending.len());
                for (sequence, value) in pending {
                    if run.is_disposed() {
                        return;
                    }
                    position = sequence;
                    observer.send_next(value);
                }
            }
            ReplayStep::Finish(terminal) => {
                observer.send(terminal);
                return;
            }
            ReplayStep::Live(attachment) => {
                run.add(attachment);
                return;
            }
        }
    }
}

impl<T, E> Clone for Producer<T, E> {
    fn clone(&self) -> Self {
        Self {
            builder: Arc::clone(&self.builder),
        }
    }
}

impl<T, E> fmt::Debug for Producer<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer").finish_non_exhaustive()
    }
}

impl<T: PulseItem, E: PulseItem> Source for Producer<T, E> {
    type Item = T;
    type Error = E;

    fn subscribe(&self, observer: Observer<T, E>) -> Disposable {
        self.start(observer)
    }
}

impl<T: PulseItem, E: PulseItem> Lift for Producer<T, E> {
    type Lifted<U: PulseItem, F: PulseItem> = Producer<U, F>;

    fn lift<U, F, Op>(&self, op: Op) -> Producer<U, F>
    where
        U: PulseItem,
        F: PulseItem,
        Op: Fn(Signal<T, E>) -> Signal<U, F> + Send + Sync + 'static,
    {
        let source = self.clone();
        Producer::new(move |observer, run| {
            source.start_with_signal(|signal, upstream| {
                run.add(upstream.clone());
                run.add(op(signal).observe(observer));
            });
        })
    }

    fn lift_with<U, V, Op>(&self, other: &Producer<U, E>, op: Op) -> Producer<V, E>
    where
        U: PulseItem,
        V: PulseItem,
        Op: Fn(Signal<T, E>, Signal<U, E>) -> Signal<V, E> + Send + Sync + 'static,
    {
        let left = self.clone();
        let right = other.clone();
        Producer::new(move |observer, run| {
            left.start_with_signal(|left_signal, left_upstream| {
                run.add(left_upstream.clone());
                right.start_with_signal(|right_signal, right_upstream| {
                    run.add(right_upstream.clone());
                    run.add(op(left_signal, right_signal).observe(observer));
                });
            });
        })
    }
}
