// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Seeded random utilities for exercising the filter.
//!
//! The measurement and test drivers around a Bloom filter need streams of
//! random probe items; a small seeded generator keeps those streams
//! reproducible without pulling in a full RNG dependency.

use std::process;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_() ";

/// Random number source for filter test data.
pub trait RandomSource {
    /// Returns the next random 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Returns a uniformly distributed value in `[0, bound)`.
    ///
    /// `bound` must be nonzero. The slight modulo bias is irrelevant for
    /// test-data generation.
    fn next_below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0);
        self.next_u64() % bound
    }
}

/// Xorshift-based random generator for filter test data.
#[derive(Debug, Clone, Copy)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Creates a new generator using the provided seed.
    pub fn seeded(seed: u64) -> Self {
        let state = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        Self { state }
    }
}

impl Default for XorShift64 {
    fn default() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let mut seed = nanos as u64 ^ (process::id() as u64);
        if seed == 0 {
            seed = 0x9e3779b97f4a7c15;
        }
        Self::seeded(seed)
    }
}

impl RandomSource for XorShift64 {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// Generates `count` random alphanumeric-ish strings with lengths drawn
/// uniformly from `[min_len, max_len]`.
///
/// The strings are drawn from letters, digits, and a few punctuation
/// characters; with lengths of a few dozen characters, collisions between
/// generated strings are vanishingly rare.
pub fn random_strings<R: RandomSource>(
    rng: &mut R,
    count: usize,
    min_len: usize,
    max_len: usize,
) -> Vec<String> {
    assert!(min_len >= 1 && min_len <= max_len);

    let mut words = Vec::with_capacity(count);
    for _ in 0..count {
        let len = min_len + rng.next_below((max_len - min_len + 1) as u64) as usize;
        let word: String = (0..len)
            .map(|_| CHARSET[rng.next_below(CHARSET.len() as u64) as usize] as char)
            .collect();
        words.push(word);
    }
    words
}
