// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Flattening a stream of streams into a single stream.
//!
//! The outer stream's values are themselves [`Source`]s: signals, producers, or
//! a mix of both through a common wrapper. How their events are interleaved is
//! chosen with a [`FlattenStrategy`]:
//!
//! | Strategy | Inner subscriptions | Completes when |
//! |----------|---------------------|----------------|
//! | [`Concat`](FlattenStrategy::Concat) | One at a time, in outer order | Outer and last inner completed |
//! | [`Merge`](FlattenStrategy::Merge) | All at once, as they arrive | Outer and every inner completed |
//! | [`Latest`](FlattenStrategy::Latest) | Only the newest, older ones disposed | Outer and current inner completed |
//!
//! A failure or interruption of the outer or of any subscribed inner stream
//! ends the flattened stream immediately and disposes every other subscription.
//!
//! Inner producers start a fresh run on subscription. Inner signals are hot:
//! whatever they sent before being subscribed is lost, which is why a queued
//! signal under `Concat` misses the events sent while it waited, while a
//! buffered producer replays them.

mod concat;
mod latest;
mod merge;

use crate::map::map_signal;
use pulse_core::{Lift, Signal, Source};
use std::sync::Arc;

/// Policy for subscribing to the inner streams of a stream of streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlattenStrategy {
    /// Subscribe to inner streams strictly one after another.
    Concat,
    /// Subscribe to every inner stream as soon as it arrives.
    Merge,
    /// Keep only the most recent inner stream subscribed.
    Latest,
}

/// Extension trait providing `flatten` for streams whose values are streams.
pub trait FlattenExt: Lift {
    /// Flattens a stream of streams according to `strategy`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pulse_core::{NoError, Producer, Signal};
    /// use pulse_stream::{FlattenExt, FlattenStrategy};
    /// use parking_lot::Mutex;
    /// use std::sync::Arc;
    ///
    /// let (outer, outer_in) = Signal::<Producer<&str, NoError>, NoError>::pipe();
    /// let (inner, inner_in) = Producer::<&str, NoError>::buffer(1);
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    ///
    /// outer.flatten(FlattenStrategy::Merge).observe_next({
    ///     let seen = seen.clone();
    ///     move |value| seen.lock().push(value)
    /// });
    ///
    /// inner_in.send_next("early");
    /// outer_in.send_next(inner); // replays "early"
    /// inner_in.send_next("live");
    ///
    /// assert_eq!(*seen.lock(), vec!["early", "live"]);
    /// ```
    fn flatten(
        &self,
        strategy: FlattenStrategy,
    ) -> Self::Lifted<<Self::Item as Source>::Item, Self::Error>
    where
        Self::Item: Source<Error = Self::Error>;
}

impl<S: Lift> FlattenExt for S {
    fn flatten(
        &self,
        strategy: FlattenStrategy,
    ) -> Self::Lifted<<Self::Item as Source>::Item, Self::Error>
    where
        Self::Item: Source<Error = Self::Error>,
    {
        self.lift(move |outer| flatten_signal(outer, strategy))
    }
}

/// Extension trait providing `flat_map`: map every value to a stream, then flatten.
pub trait FlatMapExt: Lift {
    /// Maps each value to an inner stream with `f` and flattens the result
    /// according to `strategy`.
    fn flat_map<I, Func>(
        &self,
        strategy: FlattenStrategy,
        f: Func,
    ) -> Self::Lifted<I::Item, Self::Error>
    where
        I: Source<Error = Self::Error>,
        Func: Fn(Self::Item) -> I + Send + Sync + 'static;
}

impl<S: Lift> FlatMapExt for S {
    fn flat_map<I, Func>(
        &self,
        strategy: FlattenStrategy,
        f: Func,
    ) -> Self::Lifted<I::Item, Self::Error>
    where
        I: Source<Error = Self::Error>,
        Func: Fn(Self::Item) -> I + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        self.lift(move |source| {
            let f = Arc::clone(&f);
            flatten_signal(map_signal(source, move |value| f(value)), strategy)
        })
    }
}

pub(crate) fn flatten_signal<I: Source>(
    outer: Signal<I, I::Error>,
    strategy: FlattenStrategy,
) -> Signal<I::Item, I::Error> {
    match strategy {
        FlattenStrategy::Concat => concat::concat(outer),
        FlattenStrategy::Merge => merge::merge(outer),
        FlattenStrategy::Latest => latest::latest(outer),
    }
}
