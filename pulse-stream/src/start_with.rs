// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prepending a value to a producer.

use crate::concat::ConcatExt;
use pulse_core::{Producer, PulseItem, Source};

/// Extension trait providing `start_with` for producers.
pub trait StartWithExt: Source {
    /// Sends `value` on every run before the values of `self`.
    fn start_with(&self, value: Self::Item) -> Self;
}

impl<T: PulseItem, E: PulseItem> StartWithExt for Producer<T, E> {
    fn start_with(&self, value: T) -> Self {
        Producer::from_values([value]).concat(self)
    }
}
