// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Comparable error fixture for failing streams.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestError {
    #[error("boom: {0}")]
    Boom(String),
    #[error("timeout")]
    Timeout,
}

impl TestError {
    #[must_use]
    pub fn boom(context: &str) -> Self {
        Self::Boom(context.to_string())
    }
}
