// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for push-based reactive streams.
//!
//! - [`Event`]: the four-case event model (`Next`, `Failed`, `Completed`, `Interrupted`)
//! - [`Observer`]: a sink receiving events, enforcing a single terminal event
//! - [`Signal`]: a hot stream with no replay
//! - [`Producer`]: a cold, restartable stream factory, optionally buffered
//! - [`Disposable`]: idempotent cancellation handles
//!
//! Operators built on these types live in `pulse-stream`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[doc(hidden)]
#[cfg(feature = "tracing")]
pub use tracing;

#[macro_use]
pub mod logging;

pub mod disposable;
pub mod error;
pub mod event;
pub mod lift;
pub mod observer;
pub mod producer;
pub mod pulse_item;
pub mod signal;
pub mod source;

pub use self::disposable::{CompositeDisposable, Disposable, ScopedDisposable, SerialDisposable};
pub use self::error::{IntoPulseError, NoError, PulseError, Result};
pub use self::event::Event;
pub use self::lift::Lift;
pub use self::observer::{Observer, ObserverBuilder};
pub use self::producer::Producer;
pub use self::pulse_item::PulseItem;
pub use self::signal::Signal;
pub use self::source::Source;
