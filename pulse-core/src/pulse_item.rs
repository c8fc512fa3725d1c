// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// The standard trait for values and errors flowing through Pulse streams.
///
/// This trait aggregates the bounds needed to broadcast a value to several
/// observers and to move it across threads:
/// - Cloneable (each observer receives its own copy)
/// - Thread-safe (Send + Sync)
/// - 'static (owned data)
///
/// # Automatic Implementation
///
/// This trait is automatically implemented for any type that satisfies the bounds.
pub trait PulseItem: Clone + Send + Sync + 'static {}

impl<T> PulseItem for T where T: Clone + Send + Sync + 'static {}
