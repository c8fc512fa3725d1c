// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridging push-based streams into `futures::Stream`.

use futures::channel::mpsc::{self, UnboundedReceiver};
use futures::Stream;
use pulse_core::{trace, Disposable, Event, Observer, Source};
use std::pin::Pin;
use std::task::{Context, Poll};

/// A `futures::Stream` fed by a signal or producer.
///
/// Values arrive as `Ok`, a failure as a final `Err`. The stream ends after the
/// source completes, fails or is interrupted. Dropping it disposes the
/// underlying subscription.
pub struct EventStream<T, E> {
    receiver: UnboundedReceiver<Result<T, E>>,
    subscription: Disposable,
}

impl<T, E> Stream for EventStream<T, E> {
    type Item = Result<T, E>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.receiver).poll_next(cx)
    }
}

impl<T, E> Drop for EventStream<T, E> {
    fn drop(&mut self) {
        self.subscription.dispose();
    }
}

/// Extension trait providing `into_stream` for any source.
pub trait IntoStreamExt: Source {
    /// Subscribes to `self` and exposes its events as an async stream.
    ///
    /// Events are queued without bound until polled. Producers start
    /// immediately, so a synchronous producer's values are already queued
    /// when this returns.
    fn into_stream(&self) -> EventStream<Self::Item, Self::Error>;
}

impl<S: Source> IntoStreamExt for S {
    fn into_stream(&self) -> EventStream<S::Item, S::Error> {
        let (sender, receiver) = mpsc::unbounded();

        let subscription = self.subscribe(Observer::new(move |event| match event {
            Event::Next(value) => {
                if sender.unbounded_send(Ok(value)).is_err() {
                    trace!("into_stream: receiver dropped, value discarded");
                }
            }
            Event::Failed(error) => {
                if sender.unbounded_send(Err(error)).is_err() {
                    trace!("into_stream: receiver dropped, failure discarded");
                }
                sender.close_channel();
            }
            Event::Completed | Event::Interrupted => sender.close_channel(),
        }));

        EventStream {
            receiver,
            subscription,
        }
    }
}
