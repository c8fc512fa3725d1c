// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Event sinks.
//!
//! An [`Observer`] is the receiving end of a stream and, for the pair returned
//! by [`Signal::pipe`](crate::Signal::pipe), the sending end as well. It is cheap
//! to clone; all clones share the same termination state.
//!
//! ## Example
//!
//! ```
//! use pulse_core::{Event, NoError, Observer};
//! use parking_lot::Mutex;
//! use std::sync::Arc;
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let observer: Observer<i32, NoError> = Observer::new({
//!     let seen = seen.clone();
//!     move |event| seen.lock().push(event)
//! });
//!
//! observer.send_next(1);
//! observer.send_completed();
//! observer.send_next(2); // dropped: already terminated
//!
//! assert_eq!(*seen.lock(), vec![Event::Next(1), Event::Completed]);
//! ```

use crate::{Event, PulseError, PulseItem};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Sink<T, E> = Box<dyn Fn(Event<T, E>) + Send + Sync>;

/// A sink for the four kinds of [`Event`].
///
/// After the first terminal event every later event is dropped. Observers
/// created by [`Signal::pipe`](crate::Signal::pipe) and
/// [`Producer::buffer`](crate::Producer::buffer) panic instead when the
/// `strict` feature is enabled.
pub struct Observer<T, E = PulseError> {
    inner: Arc<Inner<T, E>>,
}

struct Inner<T, E> {
    sink: Sink<T, E>,
    terminated: AtomicBool,
    // Handed out by `Signal::pipe` or `Producer::buffer`; misuse is reported.
    input: bool,
}

impl<T: PulseItem, E: PulseItem> Observer<T, E> {
    /// Create an observer handling every event kind in one closure.
    pub fn new<F>(sink: F) -> Self
    where
        F: Fn(Event<T, E>) + Send + Sync + 'static,
    {
        Self::with_policy(sink, false)
    }

    /// Create an observer reacting only to `Next` values.
    pub fn from_next<F>(on_next: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self::new(move |event| {
            if let Event::Next(value) = event {
                on_next(value);
            }
        })
    }

    /// Start building an observer from per-kind callbacks.
    pub fn builder() -> ObserverBuilder<T, E> {
        ObserverBuilder::default()
    }

    pub(crate) fn input<F>(sink: F) -> Self
    where
        F: Fn(Event<T, E>) + Send + Sync + 'static,
    {
        Self::with_policy(sink, true)
    }

    fn with_policy<F>(sink: F, input: bool) -> Self
    where
        F: Fn(Event<T, E>) + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                sink: Box::new(sink),
                terminated: AtomicBool::new(false),
                input,
            }),
        }
    }

    /// Deliver an event.
    ///
    /// # Panics
    ///
    /// With the `strict` feature, panics when an input observer receives an
    /// event after its terminal event.
    pub fn send(&self, event: Event<T, E>) {
        let rejected = if event.is_terminal() {
            self.inner.terminated.swap(true, Ordering::AcqRel)
        } else {
            self.inner.terminated.load(Ordering::Acquire)
        };

        if rejected {
            self.reject(&event);
            return;
        }

        (self.inner.sink)(event);
    }

    /// Deliver `Next(value)`.
    pub fn send_next(&self, value: T) {
        self.send(Event::Next(value));
    }

    /// Deliver `Failed(error)`.
    pub fn send_failed(&self, error: E) {
        self.send(Event::Failed(error));
    }

    /// Deliver `Completed`.
    pub fn send_completed(&self) {
        self.send(Event::Completed);
    }

    /// Deliver `Interrupted`.
    pub fn send_interrupted(&self) {
        self.send(Event::Interrupted);
    }

    /// Returns `true` once a terminal event went through this observer.
    pub fn is_terminated(&self) -> bool {
        self.inner.terminated.load(Ordering::Acquire)
    }

    fn reject(&self, event: &Event<T, E>) {
        let kind = if event.is_next() { "Next" } else { "terminal" };

        if !self.inner.input {
            trace!("dropping {} event sent after termination", kind);
            return;
        }

        if cfg!(feature = "strict") {
            panic!(
                "{}",
                PulseError::misuse(format!("{kind} event sent after the stream terminated"))
            );
        }
        warn!("dropping {} event sent to a terminated stream input", kind);
    }
}

impl<T, E> Clone for Observer<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, E> fmt::Debug for Observer<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("terminated", &self.inner.terminated.load(Ordering::Acquire))
            .field("input", &self.inner.input)
            .finish()
    }
}

type Callback<A> = Box<dyn Fn(A) + Send + Sync>;

/// Builds an [`Observer`] from optional per-kind callbacks.
///
/// Kinds without a callback are ignored.
///
/// ```
/// use pulse_core::{NoError, Observer};
///
/// let observer: Observer<i32, NoError> = Observer::builder()
///     .on_next(|value| println!("next: {value}"))
///     .on_completed(|| println!("completed"))
///     .build();
///
/// observer.send_next(1);
/// observer.send_completed();
/// ```
pub struct ObserverBuilder<T, E> {
    next: Option<Callback<T>>,
    failed: Option<Callback<E>>,
    completed: Option<Callback<()>>,
    interrupted: Option<Callback<()>>,
}

impl<T: PulseItem, E: PulseItem> ObserverBuilder<T, E> {
    #[must_use]
    pub fn on_next<F>(mut self, f: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.next = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_failed<F>(mut self, f: F) -> Self
    where
        F: Fn(E) + Send + Sync + 'static,
    {
        self.failed = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_completed<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.completed = Some(Box::new(move |()| f()));
        self
    }

    #[must_use]
    pub fn on_interrupted<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.interrupted = Some(Box::new(move |()| f()));
        self
    }

    pub fn build(self) -> Observer<T, E> {
        let Self {
            next,
            failed,
            completed,
            interrupted,
        } = self;

        Observer::new(move |event| match event {
            Event::Next(value) => {
                if let Some(f) = &next {
                    f(value);
                }
            }
            Event::Failed(error) => {
                if let Some(f) = &failed {
                    f(error);
                }
            }
            Event::Completed => {
                if let Some(f) = &completed {
                    f(());
                }
            }
            Event::Interrupted => {
                if let Some(f) = &interrupted {
                    f(());
                }
            }
        })
    }
}

impl<T, E> Default for ObserverBuilder<T, E> {
    fn default() -> Self {
        Self {
            next: None,
            failed: None,
            completed: None,
            interrupted: None,
        }
    }
}
