// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the Pulse reactive streams.
//!
//! This crate is for development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `EventLog<T, E>`
//!
//! A test-owned, append-only sink. Each test creates its own log and attaches
//! observers produced by it, then asserts on what was recorded:
//!
//! ```rust
//! use pulse_core::Signal;
//! use pulse_test_utils::{EventLog, TestError};
//!
//! let (signal, input) = Signal::<i32, TestError>::pipe();
//! let log = EventLog::new();
//! signal.observe(log.observer());
//!
//! input.send_next(1);
//! input.send_completed();
//!
//! assert_eq!(log.values(), vec![1]);
//! assert!(log.is_completed());
//! ```
//!
//! ## `TestError`
//!
//! A comparable error fixture, so recorded `Failed` events can be asserted with `assert_eq!`.
//!
//! # Module Organization
//!
//! - `event_log` - `EventLog<T, E>` sink
//! - `test_error` - `TestError` fixture
//! - `helpers` - Assertion helpers
//! - `generators` - Seeded value sequences for property-style tests

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod event_log;
pub mod generators;
pub mod helpers;
pub mod test_error;

pub use event_log::EventLog;
pub use generators::{random_values, value_sequences};
pub use helpers::{assert_completed_with, assert_no_events, assert_values};
pub use test_error::TestError;
