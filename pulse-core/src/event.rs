// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::PulseError;

/// An event delivered by a stream.
///
/// `Next` carries a value; the other three variants are terminal. A stream
/// delivers at most one terminal event, after which it delivers nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<T, E = PulseError> {
    /// A value
    Next(T),
    /// The stream failed with a domain error
    Failed(E),
    /// The stream ran out of values successfully
    Completed,
    /// The stream was cancelled externally
    Interrupted,
}

impl<T, E> Event<T, E> {
    /// Returns `true` if this is a `Next`.
    pub const fn is_next(&self) -> bool {
        matches!(self, Event::Next(_))
    }

    /// Returns `true` for `Failed`, `Completed` and `Interrupted`.
    pub const fn is_terminal(&self) -> bool {
        !self.is_next()
    }

    /// Returns `true` if this is `Completed`.
    pub const fn is_completed(&self) -> bool {
        matches!(self, Event::Completed)
    }

    /// Returns `true` if this is `Failed`.
    pub const fn is_failed(&self) -> bool {
        matches!(self, Event::Failed(_))
    }

    /// Returns `true` if this is `Interrupted`.
    pub const fn is_interrupted(&self) -> bool {
        matches!(self, Event::Interrupted)
    }

    /// Converts into the carried value, discarding terminal events.
    pub fn value(self) -> Option<T> {
        match self {
            Event::Next(v) => Some(v),
            _ => None,
        }
    }

    /// Converts into the carried error, discarding everything else.
    pub fn error(self) -> Option<E> {
        match self {
            Event::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Maps the value of a `Next`; terminal events pass through unchanged.
    pub fn map<U, F>(self, f: F) -> Event<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Event::Next(v) => Event::Next(f(v)),
            Event::Failed(e) => Event::Failed(e),
            Event::Completed => Event::Completed,
            Event::Interrupted => Event::Interrupted,
        }
    }

    /// Maps the error of a `Failed`; other events pass through unchanged.
    pub fn map_err<F2, F>(self, f: F) -> Event<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Event::Next(v) => Event::Next(v),
            Event::Failed(e) => Event::Failed(f(e)),
            Event::Completed => Event::Completed,
            Event::Interrupted => Event::Interrupted,
        }
    }

    /// Re-types a terminal event for a stream of another value type.
    ///
    /// Returns `Err` with the value when called on a `Next`.
    pub fn into_terminal<U>(self) -> std::result::Result<Event<U, E>, T> {
        match self {
            Event::Next(v) => Err(v),
            Event::Failed(e) => Ok(Event::Failed(e)),
            Event::Completed => Ok(Event::Completed),
            Event::Interrupted => Ok(Event::Interrupted),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Event<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(v) => Event::Next(v),
            Err(e) => Event::Failed(e),
        }
    }
}
