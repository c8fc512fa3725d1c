// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A reproducible sequence of `len` values in `-1000..1000`.
#[must_use]
pub fn random_values(seed: u64, len: usize) -> Vec<i64> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..len).map(|_| rng.i64(-1000..1000)).collect()
}

/// Seeded sequences of every length in `0..max_len`, for property-style tests.
#[must_use]
pub fn value_sequences(seed: u64, max_len: usize) -> Vec<Vec<i64>> {
    (0..max_len)
        .map(|len| random_values(seed.wrapping_add(len as u64), len))
        .collect()
}
