// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators for pulse signals and producers.
//!
//! Every operator is an extension trait. Operators written against [`Lift`]
//! work on both stream kinds with the same semantics:
//!
//! - On a [`Signal`], the operator attaches to the source once, when applied,
//!   and its result is another hot signal.
//! - On a [`Producer`], nothing runs until the result is started; each start
//!   starts the upstream producer afresh with its own operator state.
//!
//! ## Operator Categories
//!
//! ### Transformation
//!
//! - **[`map`](MapExt::map)** / **[`map_err`](MapExt::map_err)**: Transform values or errors
//! - **[`scan`](ScanExt::scan)**: Emit every intermediate accumulator
//!
//! ### Filtering
//!
//! - **[`filter`](FilterExt::filter)**: Keep values matching a predicate
//! - **[`take`](TakeExt::take)**: Keep the first `n` values, then complete
//!
//! ### Aggregation
//!
//! - **[`reduce`](ReduceExt::reduce)**: Fold to a single value on completion
//! - **[`collect`](CollectExt::collect)**: Gather all values into a `Vec` on completion
//!
//! ### Combination
//!
//! - **[`combine_latest_with`](CombineLatestExt::combine_latest_with)**: Pair the latest values of two streams
//! - **[`zip_with`](ZipExt::zip_with)**: Pair values by position
//! - **[`flatten`](FlattenExt::flatten)** / **[`flat_map`](FlatMapExt::flat_map)**: Flatten a stream of streams
//!
//! ### Producer Sequencing
//!
//! - **[`then`](ThenExt::then)**: Run one producer after another, keeping only the second's values
//! - **[`concat`](ConcatExt::concat)**: Append one producer to another
//! - **[`start_with`](StartWithExt::start_with)**: Prepend a value
//!
//! ### Async Interop
//!
//! - **[`into_stream`](IntoStreamExt::into_stream)**: Consume any source as a `futures::Stream`
//!
//! # Terminal Events
//!
//! Unless documented otherwise, operators forward `Failed` and `Interrupted`
//! immediately and stop. Aggregations emit their single value right before
//! forwarding `Completed`, and emit nothing when the source fails.
//!
//! [`Lift`]: pulse_core::Lift
//! [`Signal`]: pulse_core::Signal
//! [`Producer`]: pulse_core::Producer

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod combine_latest;
pub mod concat;
pub mod filter;
pub mod flatten;
pub mod into_stream;
pub mod map;
pub mod prelude;
pub mod reduce;
pub mod scan;
pub mod start_with;
pub mod take;
pub mod then;
pub mod zip;

// Re-export commonly used types
pub use combine_latest::{combine_latest, CombineLatestExt};
pub use concat::ConcatExt;
pub use filter::FilterExt;
pub use flatten::{FlatMapExt, FlattenExt, FlattenStrategy};
pub use into_stream::{EventStream, IntoStreamExt};
pub use map::MapExt;
pub use reduce::{CollectExt, ReduceExt};
pub use scan::ScanExt;
pub use start_with::StartWithExt;
pub use take::TakeExt;
pub use then::ThenExt;
pub use zip::{zip, ZipExt};
