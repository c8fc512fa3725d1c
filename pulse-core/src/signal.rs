// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-observer signals.
//!
//! A [`Signal`] broadcasts each [`Event`] to all currently attached observers.
//!
//! ## Characteristics
//!
//! - **Hot**: Late observers do not receive past events, only events sent after attaching.
//! - **Synchronous**: `send` delivers to every attached observer before returning.
//!   A send issued while another one is delivering is queued and delivered by
//!   that first send, so every observer sees the same order.
//! - **Ordered**: Observers are called in attachment order.
//! - **Terminal**: A terminal event detaches every observer; later sends are dropped.
//!
//! ## Example
//!
//! ```
//! use pulse_core::{NoError, Signal};
//! use parking_lot::Mutex;
//! use std::sync::Arc;
//!
//! let (signal, input) = Signal::<i32, NoError>::pipe();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! input.send_next(0); // nobody is listening yet
//!
//! signal.observe_next({
//!     let seen = seen.clone();
//!     move |value| seen.lock().push(value)
//! });
//!
//! input.send_next(1);
//! input.send_next(2);
//! input.send_completed();
//!
//! assert_eq!(*seen.lock(), vec![1, 2]);
//! assert!(signal.is_terminated());
//! ```

use crate::{Disposable, Event, Observer, PulseError, PulseItem, Source};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

struct Attachment<T, E> {
    id: u64,
    active: Arc<AtomicBool>,
    observer: Observer<T, E>,
}

impl<T, E> Clone for Attachment<T, E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            active: Arc::clone(&self.active),
            observer: self.observer.clone(),
        }
    }
}

struct SignalState<T, E> {
    terminated: bool,
    // Set while some call to `send` is delivering; later sends queue up behind it.
    delivering: bool,
    queue: VecDeque<Event<T, E>>,
    next_id: u64,
    observers: Vec<Attachment<T, E>>,
    // Released once the signal terminates
    resources: Option<Disposable>,
}

struct SignalCore<T, E> {
    state: Mutex<SignalState<T, E>>,
}

impl<T: PulseItem, E: PulseItem> SignalCore<T, E> {
    fn new() -> Self {
        Self {
            state: Mutex::new(SignalState {
                terminated: false,
                delivering: false,
                queue: VecDeque::new(),
                next_id: 0,
                observers: Vec::new(),
                resources: None,
            }),
        }
    }

    fn send(&self, event: Event<T, E>) {
        {
            let mut state = self.state.lock();
            if state.terminated {
                return;
            }
            if state.delivering {
                // Delivered by the active sender once the current event is done
                state.terminated = event.is_terminal();
                state.queue.push_back(event);
                return;
            }
            state.delivering = true;
        }

        let mut event = event;
        loop {
            self.deliver(event);

            let mut state = self.state.lock();
            match state.queue.pop_front() {
                Some(queued) => event = queued,
                None => {
                    state.delivering = false;
                    return;
                }
            }
        }
    }

    fn deliver(&self, event: Event<T, E>) {
        let terminal = event.is_terminal();

        // Snapshot under the lock, deliver without it: observers may attach,
        // detach or send while being called.
        let (snapshot, resources) = {
            let mut state = self.state.lock();
            if terminal {
                state.terminated = true;
                (std::mem::take(&mut state.observers), state.resources.take())
            } else {
                (state.observers.clone(), None)
            }
        };

        for attachment in &snapshot {
            if attachment.active.load(Ordering::Acquire) {
                attachment.observer.send(event.clone());
            }
        }

        if terminal {
            for attachment in &snapshot {
                attachment.active.store(false, Ordering::Release);
            }
            if let Some(resources) = resources {
                resources.dispose();
            }
        }
    }

    fn detach(&self, id: u64) {
        self.state
            .lock()
            .observers
            .retain(|attachment| attachment.id != id);
    }
}

/// A hot stream of events shared by all of its observers.
///
/// See the [module documentation](self) for examples and more details.
pub struct Signal<T, E = PulseError> {
    core: Arc<SignalCore<T, E>>,
}

impl<T: PulseItem, E: PulseItem> Signal<T, E> {
    /// Creates a signal together with the observer that feeds it.
    ///
    /// With the `strict` feature enabled, sending through the returned observer
    /// after a terminal event panics.
    pub fn pipe() -> (Self, Observer<T, E>) {
        let core = Arc::new(SignalCore::new());
        let input = Observer::input({
            let core = Arc::clone(&core);
            move |event| core.send(event)
        });
        (Self { core }, input)
    }

    // Like `pipe`, but the input is never strict: producer runs may be
    // interrupted after they already ended.
    pub(crate) fn relay() -> (Self, Observer<T, E>) {
        let core = Arc::new(SignalCore::new());
        let input = Observer::new({
            let core = Arc::clone(&core);
            move |event| core.send(event)
        });
        (Self { core }, input)
    }

    /// Creates a signal whose events are produced by `generator`.
    ///
    /// The generator runs once, immediately, with the observer feeding the new
    /// signal. The disposable it returns is released when the signal terminates.
    /// Events sent before anyone observes the signal are lost.
    pub fn new<G>(generator: G) -> Self
    where
        G: FnOnce(Observer<T, E>) -> Option<Disposable>,
    {
        let core = Arc::new(SignalCore::new());
        let input = Observer::new({
            let core = Arc::clone(&core);
            move |event| core.send(event)
        });

        if let Some(resources) = generator(input) {
            let mut state = core.state.lock();
            if state.terminated {
                drop(state);
                resources.dispose();
            } else {
                state.resources = Some(resources);
            }
        }

        Self { core }
    }

    /// Attach an observer.
    ///
    /// The observer receives every event sent from now on. If the signal has
    /// already terminated the observer immediately receives `Interrupted` and the
    /// returned handle is already disposed.
    pub fn observe(&self, observer: Observer<T, E>) -> Disposable {
        let mut state = self.core.state.lock();
        if state.terminated {
            drop(state);
            observer.send_interrupted();
            return Disposable::disposed();
        }

        let id = state.next_id;
        state.next_id += 1;
        let active = Arc::new(AtomicBool::new(true));
        state.observers.push(Attachment {
            id,
            active: Arc::clone(&active),
            observer,
        });
        drop(state);

        let core: Weak<SignalCore<T, E>> = Arc::downgrade(&self.core);
        Disposable::new(move || {
            active.store(false, Ordering::Release);
            if let Some(core) = core.upgrade() {
                core.detach(id);
            }
        })
    }

    /// Attach a closure reacting only to values.
    pub fn observe_next<F>(&self, on_next: F) -> Disposable
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.observe(Observer::from_next(on_next))
    }

    /// Attach a closure reacting only to `Completed`.
    pub fn observe_completed<F>(&self, on_completed: F) -> Disposable
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.observe(Observer::builder().on_completed(on_completed).build())
    }

    /// Attach a closure reacting only to `Failed`.
    pub fn observe_failed<F>(&self, on_failed: F) -> Disposable
    where
        F: Fn(E) + Send + Sync + 'static,
    {
        self.observe(Observer::builder().on_failed(on_failed).build())
    }

    /// Attach a closure reacting only to `Interrupted`.
    pub fn observe_interrupted<F>(&self, on_interrupted: F) -> Disposable
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.observe(Observer::builder().on_interrupted(on_interrupted).build())
    }

    /// Returns `true` once a terminal event has been delivered.
    pub fn is_terminated(&self) -> bool {
        self.core.state.lock().terminated
    }

    /// Returns the number of currently attached observers.
    pub fn observer_count(&self) -> usize {
        self.core.state.lock().observers.len()
    }
}

impl<T, E> Clone for Signal<T, E> {
    fn clone(&self) -> Self {
        Self {
            core: Arc::clone(&self.core),
        }
    }
}

impl<T: PulseItem, E: PulseItem> fmt::Debug for Signal<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.core.state.lock();
        f.debug_struct("Signal")
            .field("observers", &state.observers.len())
            .field("terminated", &state.terminated)
            .finish()
    }
}

impl<T: PulseItem, E: PulseItem> Source for Signal<T, E> {
    type Item = T;
    type Error = E;

    fn subscribe(&self, observer: Observer<T, E>) -> Disposable {
        self.observe(observer)
    }
}
