// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for Pulse streams.
//!
//! [`PulseError`] is the default error carried by [`Event::Failed`](crate::Event::Failed).
//! Streams that cannot fail use [`NoError`].
//!
//! # Examples
//!
//! ```
//! use pulse_core::{Event, PulseError};
//!
//! let event: Event<i32> = Event::Failed(PulseError::stream_error("sensor offline"));
//! assert!(event.is_terminal());
//! ```

use std::convert::Infallible;

/// Error type for streams that never fail.
pub type NoError = Infallible;

/// Root error type carried by failing Pulse streams.
#[derive(Debug, thiserror::Error)]
pub enum PulseError {
    /// A stream failed while producing or transforming values.
    #[error("Stream error: {context}")]
    StreamError {
        /// Description of what went wrong
        context: String,
    },

    /// Custom error from user code
    ///
    /// This wraps errors produced by user-provided closures so they can travel
    /// through a stream as a `Failed` event.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// An input observer was used after it delivered its terminal event.
    ///
    /// Only raised when the `strict` feature is enabled.
    #[error("Misuse: {context}")]
    Misuse {
        /// Description of the misuse
        context: String,
    },
}

impl PulseError {
    /// Create a stream error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Create a misuse error with the given context
    pub fn misuse(context: impl Into<String>) -> Self {
        Self::Misuse {
            context: context.into(),
        }
    }
}

/// Specialized Result type for Pulse operations
pub type Result<T> = std::result::Result<T, PulseError>;

/// Extension trait for converting foreign errors into [`PulseError`].
pub trait IntoPulseError {
    /// Convert this error into a `PulseError`, keeping it as the source.
    fn into_pulse_error(self) -> PulseError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoPulseError for E {
    fn into_pulse_error(self) -> PulseError {
        PulseError::user_error(self)
    }
}

impl Clone for PulseError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamError { context } => Self::StreamError {
                context: context.clone(),
            },
            // The boxed source can't be cloned; keep its message
            Self::UserError(e) => Self::StreamError {
                context: format!("User error: {e}"),
            },
            Self::Misuse { context } => Self::Misuse {
                context: context.clone(),
            },
        }
    }
}
