// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{PulseItem, Signal, Source};

/// Applies signal-level transformations to a stream.
///
/// Every operator is written once as a function from [`Signal`] to [`Signal`]
/// and lifted through this trait:
///
/// - for a `Signal`, the transformation is applied right away to the running stream;
/// - for a `Producer`, it is applied to the signal of every run, so operator
///   state is private to each `start`.
pub trait Lift: Source {
    /// The stream kind produced by lifting (`Signal` for signals, `Producer` for producers).
    type Lifted<U: PulseItem, F: PulseItem>: Source<Item = U, Error = F>;

    /// Transform this stream with a signal-level operator.
    fn lift<U, F, Op>(&self, op: Op) -> Self::Lifted<U, F>
    where
        U: PulseItem,
        F: PulseItem,
        Op: Fn(Signal<Self::Item, Self::Error>) -> Signal<U, F> + Send + Sync + 'static;

    /// Combine this stream with another of the same kind through a two-input operator.
    ///
    /// For producers both upstream runs are started on every start, `other`
    /// producing first.
    fn lift_with<U, V, Op>(
        &self,
        other: &Self::Lifted<U, Self::Error>,
        op: Op,
    ) -> Self::Lifted<V, Self::Error>
    where
        U: PulseItem,
        V: PulseItem,
        Op: Fn(Signal<Self::Item, Self::Error>, Signal<U, Self::Error>) -> Signal<V, Self::Error>
            + Send
            + Sync
            + 'static;
}

impl<T: PulseItem, E: PulseItem> Lift for Signal<T, E> {
    type Lifted<U: PulseItem, F: PulseItem> = Signal<U, F>;

    fn lift<U, F, Op>(&self, op: Op) -> Signal<U, F>
    where
        U: PulseItem,
        F: PulseItem,
        Op: Fn(Signal<T, E>) -> Signal<U, F> + Send + Sync + 'static,
    {
        op(self.clone())
    }

    fn lift_with<U, V, Op>(&self, other: &Signal<U, E>, op: Op) -> Signal<V, E>
    where
        U: PulseItem,
        V: PulseItem,
        Op: Fn(Signal<T, E>, Signal<U, E>) -> Signal<V, E> + Send + Sync + 'static,
    {
        op(self.clone(), other.clone())
    }
}
