// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellation handles.
//!
//! A [`Disposable`] can be cloned to create multiple handles to the same
//! cancellation state. Disposing any clone runs the attached action exactly once.
//!
//! # Example
//!
//! ```
//! use pulse_core::Disposable;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let runs = Arc::new(AtomicUsize::new(0));
//! let disposable = Disposable::new({
//!     let runs = runs.clone();
//!     move || {
//!         runs.fetch_add(1, Ordering::SeqCst);
//!     }
//! });
//!
//! disposable.dispose();
//! disposable.clone().dispose();
//! assert_eq!(runs.load(Ordering::SeqCst), 1);
//! assert!(disposable.is_disposed());
//! ```

use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type DisposeAction = Box<dyn FnOnce() + Send>;

/// Idempotent cancellation handle returned by `observe` and `start`.
#[derive(Clone)]
pub struct Disposable {
    inner: Arc<Inner>,
}

struct Inner {
    disposed: AtomicBool,
    action: Mutex<Option<DisposeAction>>,
}

impl Disposable {
    /// Create a handle running `action` on first disposal.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::from_parts(false, Some(Box::new(action)))
    }

    /// Create a handle with nothing to release.
    pub fn empty() -> Self {
        Self::from_parts(false, None)
    }

    /// Create a handle that is already disposed.
    pub fn disposed() -> Self {
        Self::from_parts(true, None)
    }

    fn from_parts(disposed: bool, action: Option<DisposeAction>) -> Self {
        Self {
            inner: Arc::new(Inner {
                disposed: AtomicBool::new(disposed),
                action: Mutex::new(action),
            }),
        }
    }

    /// Run the release action. Calling it again has no effect.
    pub fn dispose(&self) {
        if self.inner.disposed.swap(true, Ordering::AcqRel) {
            return;
        }

        // Taken out of the lock so the action may dispose other handles freely
        let action = self.inner.action.lock().take();
        if let Some(action) = action {
            action();
        }
    }

    /// Returns `true` once [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::Acquire)
    }

    /// Wrap this handle in a guard that disposes it when dropped.
    #[must_use]
    pub fn scoped(self) -> ScopedDisposable {
        ScopedDisposable { inner: Some(self) }
    }
}

impl Default for Disposable {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Disposable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposable")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Disposes the wrapped handle on drop.
#[derive(Debug)]
pub struct ScopedDisposable {
    inner: Option<Disposable>,
}

impl ScopedDisposable {
    /// Release the guard without disposing the handle.
    pub fn into_inner(mut self) -> Disposable {
        self.inner.take().unwrap_or_default()
    }
}

impl Drop for ScopedDisposable {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.take() {
            inner.dispose();
        }
    }
}

struct CompositeState {
    disposed: bool,
    children: Vec<Disposable>,
}

/// A set of handles disposed together.
///
/// Adding a handle to an already-disposed composite disposes it immediately.
#[derive(Clone)]
pub struct CompositeDisposable {
    state: Arc<Mutex<CompositeState>>,
}

impl CompositeDisposable {
    /// Creates an empty composite.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(CompositeState {
                disposed: false,
                children: Vec::new(),
            })),
        }
    }

    /// Add a child handle.
    pub fn add(&self, disposable: Disposable) {
        let mut state = self.state.lock();
        if state.disposed {
            drop(state);
            disposable.dispose();
            return;
        }
        state.children.retain(|child| !child.is_disposed());
        state.children.push(disposable);
    }

    /// Stop holding `disposable` without disposing it.
    ///
    /// Returns `true` if it was a child of this composite.
    pub fn remove(&self, disposable: &Disposable) -> bool {
        let mut state = self.state.lock();
        let held = state.children.len();
        state
            .children
            .retain(|child| !Arc::ptr_eq(&child.inner, &disposable.inner));
        state.children.len() != held
    }

    /// Add a release action.
    pub fn add_action<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.add(Disposable::new(action));
    }

    /// Dispose every child, now and for any child added later.
    pub fn dispose(&self) {
        let children = {
            let mut state = self.state.lock();
            if state.disposed {
                return;
            }
            state.disposed = true;
            std::mem::take(&mut state.children)
        };

        for child in children {
            child.dispose();
        }
    }

    /// Returns `true` once the composite has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.state.lock().disposed
    }

    /// Number of children that are still live.
    pub fn len(&self) -> usize {
        self.state
            .lock()
            .children
            .iter()
            .filter(|child| !child.is_disposed())
            .count()
    }

    /// Returns `true` if no live child is held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A plain [`Disposable`] that disposes this composite.
    pub fn as_disposable(&self) -> Disposable {
        let composite = self.clone();
        Disposable::new(move || composite.dispose())
    }
}

impl Default for CompositeDisposable {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CompositeDisposable> for Disposable {
    fn from(composite: CompositeDisposable) -> Self {
        composite.as_disposable()
    }
}

impl fmt::Debug for CompositeDisposable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeDisposable")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

struct SerialState {
    disposed: bool,
    current: Option<Disposable>,
}

/// Holds at most one handle; replacing it disposes the previous one.
#[derive(Clone)]
pub struct SerialDisposable {
    state: Arc<Mutex<SerialState>>,
}

impl SerialDisposable {
    /// Creates an empty serial handle.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SerialState {
                disposed: false,
                current: None,
            })),
        }
    }

    /// Replace the held handle, disposing the previous one.
    ///
    /// If this serial handle is already disposed, `disposable` is disposed immediately.
    pub fn set(&self, disposable: Disposable) {
        let previous = {
            let mut state = self.state.lock();
            if state.disposed {
                Some(disposable)
            } else {
                state.current.replace(disposable)
            }
        };

        if let Some(previous) = previous {
            previous.dispose();
        }
    }

    /// Dispose the held handle and every handle set later.
    pub fn dispose(&self) {
        let current = {
            let mut state = self.state.lock();
            if state.disposed {
                return;
            }
            state.disposed = true;
            state.current.take()
        };

        if let Some(current) = current {
            current.dispose();
        }
    }

    /// Returns `true` once this serial handle has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.state.lock().disposed
    }
}

impl Default for SerialDisposable {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SerialDisposable> for Disposable {
    fn from(serial: SerialDisposable) -> Self {
        Disposable::new(move || serial.dispose())
    }
}

impl fmt::Debug for SerialDisposable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerialDisposable")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
