// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A minimal push-based reactive stream engine.
//!
//! Two stream kinds share one event model:
//!
//! - A [`Signal`] is hot. It delivers events as they are sent, and late
//!   observers miss whatever happened before they attached.
//! - A [`Producer`] is cold. Nothing happens until it is started, and every
//!   start is an independent run. A buffered producer replays its last `N`
//!   values to every new run before delivering live ones.
//!
//! Every stream carries [`Event`]s: any number of `Next` values followed by at
//! most one terminal event (`Completed`, `Failed` or `Interrupted`).
//!
//! # Quick Start
//!
//! ```
//! use pulse::prelude::*;
//! use parking_lot::Mutex;
//! use std::sync::Arc;
//!
//! let (numbers, input) = Signal::<i32, NoError>::pipe();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! numbers
//!     .map(|n| n * 10)
//!     .filter(|n| *n > 10)
//!     .observe_next({
//!         let seen = seen.clone();
//!         move |n| seen.lock().push(n)
//!     });
//!
//! for n in [1, 2, 3] {
//!     input.send_next(n);
//! }
//! assert_eq!(*seen.lock(), vec![20, 30]);
//! ```
//!
//! # Crate Organization
//!
//! - [`pulse_core`]: events, observers, disposables, signals and producers
//! - [`pulse_stream`]: the operators, as extension traits
//!
//! # Features
//!
//! - `tracing`: emit `tracing` events from the engine internals
//! - `strict`: panic when a stream input is used after its terminal event

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

// Re-export core types
pub use pulse_core::{
    CompositeDisposable, Disposable, Event, Lift, NoError, Observer, ObserverBuilder, Producer,
    PulseError, PulseItem, ScopedDisposable, SerialDisposable, Signal, Source,
};

// Re-export the operators
pub use pulse_stream::{combine_latest, zip, EventStream, FlattenStrategy};

/// Prelude module for convenient imports
pub mod prelude {
    pub use pulse_core::{
        CompositeDisposable, Disposable, Event, Lift, NoError, Observer, Producer, PulseError,
        SerialDisposable, Signal, Source,
    };
    pub use pulse_stream::prelude::*;
}
