// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Appending one producer to another.

use crate::flatten::{FlattenExt, FlattenStrategy};
use pulse_core::{Producer, PulseItem, Source};

/// Extension trait providing `concat` for producers.
pub trait ConcatExt: Source {
    /// Runs `self` to completion, then `next`, forwarding the values of both.
    fn concat(&self, next: &Self) -> Self;
}

impl<T: PulseItem, E: PulseItem> ConcatExt for Producer<T, E> {
    fn concat(&self, next: &Self) -> Self {
        Producer::<Producer<T, E>, E>::from_values([self.clone(), next.clone()])
            .flatten(FlattenStrategy::Concat)
    }
}
