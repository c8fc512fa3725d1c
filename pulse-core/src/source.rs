// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Disposable, Observer, PulseItem};

/// Anything an observer can be attached to.
///
/// Implemented by [`Signal`](crate::Signal) (attaches to the running stream) and
/// [`Producer`](crate::Producer) (starts a fresh run). Flatten strategies accept
/// any `Source` as inner stream, so hot and cold inners can be mixed freely.
pub trait Source: Clone + Send + Sync + 'static {
    /// Value type of the stream
    type Item: PulseItem;
    /// Error type of the stream
    type Error: PulseItem;

    /// Attach `observer`, returning the handle that detaches it.
    fn subscribe(&self, observer: Observer<Self::Item, Self::Error>) -> Disposable;
}
