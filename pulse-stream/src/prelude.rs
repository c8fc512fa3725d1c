// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting all operator traits.
//!
//! ```
//! use pulse_stream::prelude::*;
//! use pulse_core::{NoError, Producer};
//!
//! let evens = Producer::<i32, NoError>::from_values(1..=6)
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * 10)
//!     .collect();
//! # let _ = evens;
//! ```

pub use crate::combine_latest::{combine_latest, CombineLatestExt};
pub use crate::concat::ConcatExt;
pub use crate::filter::FilterExt;
pub use crate::flatten::{FlatMapExt, FlattenExt, FlattenStrategy};
pub use crate::into_stream::{EventStream, IntoStreamExt};
pub use crate::map::MapExt;
pub use crate::reduce::{CollectExt, ReduceExt};
pub use crate::scan::ScanExt;
pub use crate::start_with::StartWithExt;
pub use crate::take::TakeExt;
pub use crate::then::ThenExt;
pub use crate::zip::{zip, ZipExt};
