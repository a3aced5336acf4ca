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

use super::BloomFilter;
use super::HashMode;
use crate::error::Error;
use crate::hash::DEFAULT_UPDATE_SEED;

/// Minimum number of bits in a filter.
pub const MIN_NUM_BITS: u64 = 1;
/// Maximum number of bits in a filter (~4 GB of storage).
pub const MAX_NUM_BITS: u64 = (1u64 << 35) - 64;
/// Minimum number of hash functions.
pub const MIN_NUM_HASHES: u16 = 1;
/// Maximum number of hash functions.
pub const MAX_NUM_HASHES: u16 = 1024;

/// Builder for creating [`BloomFilter`] instances.
///
/// Provides two construction modes:
/// - [`with_accuracy()`](Self::with_accuracy): specify expected items and a
///   target false positive rate (recommended)
/// - [`with_size()`](Self::with_size): specify exact bit count and hash
///   functions (manual)
///
/// Both return an [`InvalidParameter`](crate::error::ErrorKind::InvalidParameter)
/// error for out-of-domain inputs; a filter is never partially constructed.
#[derive(Debug, Clone)]
pub struct BloomFilterBuilder {
    num_bits: u64,
    num_hashes: u16,
    seed: u32,
    mode: HashMode,
}

impl BloomFilterBuilder {
    /// Creates a builder with optimal parameters for a target accuracy.
    ///
    /// Derives the optimal number of bits and hash functions to achieve the
    /// desired false positive probability for the expected number of items.
    /// `max_items` is informational only: inserting more than `max_items`
    /// items does not fail, it degrades the false positive rate.
    ///
    /// # Arguments
    ///
    /// - `max_items`: expected number of distinct items, at least 1
    /// - `fpp`: target false positive probability, strictly between 0 and 1
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `max_items` is 0 or `fpp` is not in
    /// (0.0, 1.0).
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsketch::bloom::BloomFilterBuilder;
    /// // Optimal for 10,000 items with 1% FPP
    /// let filter = BloomFilterBuilder::with_accuracy(10_000, 0.01)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn with_accuracy(max_items: u64, fpp: f64) -> Result<Self, Error> {
        if max_items == 0 {
            return Err(
                Error::invalid_parameter("max_items", "max_items must be at least 1")
                    .with_context("max_items", max_items),
            );
        }
        if !(fpp > 0.0 && fpp < 1.0) {
            return Err(Error::invalid_parameter(
                "fpp",
                "fpp must be strictly between 0.0 and 1.0",
            )
            .with_context("fpp", fpp));
        }

        let num_bits = Self::suggest_num_bits(max_items, fpp);
        let num_hashes = Self::suggest_num_hashes(max_items, num_bits);

        Ok(BloomFilterBuilder {
            num_bits,
            num_hashes,
            seed: DEFAULT_UPDATE_SEED,
            mode: HashMode::default(),
        })
    }

    /// Creates a builder with manual size specification.
    ///
    /// Use this for precise control over the filter size, or when working
    /// with pre-calculated parameters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `num_bits` is outside
    /// [[`MIN_NUM_BITS`], [`MAX_NUM_BITS`]] or `num_hashes` is outside
    /// [[`MIN_NUM_HASHES`], [`MAX_NUM_HASHES`]].
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsketch::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::with_size(10_000, 7).unwrap().build();
    /// ```
    pub fn with_size(num_bits: u64, num_hashes: u16) -> Result<Self, Error> {
        if !(MIN_NUM_BITS..=MAX_NUM_BITS).contains(&num_bits) {
            return Err(Error::invalid_parameter(
                "num_bits",
                format!("num_bits must be in [{MIN_NUM_BITS}, {MAX_NUM_BITS}]"),
            )
            .with_context("num_bits", num_bits));
        }
        if !(MIN_NUM_HASHES..=MAX_NUM_HASHES).contains(&num_hashes) {
            return Err(Error::invalid_parameter(
                "num_hashes",
                format!("num_hashes must be in [{MIN_NUM_HASHES}, {MAX_NUM_HASHES}]"),
            )
            .with_context("num_hashes", num_hashes));
        }

        Ok(BloomFilterBuilder {
            num_bits,
            num_hashes,
            seed: DEFAULT_UPDATE_SEED,
            mode: HashMode::default(),
        })
    }

    /// Sets a custom hash seed (default: 9001).
    ///
    /// Filters built with different seeds map the same item to different bit
    /// positions.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Selects the hashing strategy (default: [`HashMode::DoubleHashing`]).
    ///
    /// Both strategies produce statistically equivalent false positive
    /// behavior; they differ only in hash evaluations per operation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsketch::bloom::{BloomFilterBuilder, HashMode};
    /// let filter = BloomFilterBuilder::with_accuracy(100, 0.05)
    ///     .unwrap()
    ///     .hash_mode(HashMode::IndependentSeeded)
    ///     .build();
    /// ```
    pub fn hash_mode(mut self, mode: HashMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builds the Bloom filter.
    pub fn build(self) -> BloomFilter {
        BloomFilter::with_config(self.num_bits, self.num_hashes, self.seed, self.mode)
    }

    /// Suggests the optimal number of bits given expected items and target FPP.
    ///
    /// Formula: `m = ceil(-n * ln(p) / ln(2)^2)`, clamped to at least 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsketch::bloom::BloomFilterBuilder;
    /// let bits = BloomFilterBuilder::suggest_num_bits(1000, 0.01);
    /// assert!(bits > 9000 && bits < 10000); // ~9586 bits
    /// ```
    pub fn suggest_num_bits(max_items: u64, fpp: f64) -> u64 {
        let n = max_items as f64;
        let ln2_squared = std::f64::consts::LN_2 * std::f64::consts::LN_2;

        let bits = (-n * fpp.ln() / ln2_squared).ceil() as u64;
        bits.clamp(MIN_NUM_BITS, MAX_NUM_BITS)
    }

    /// Suggests the optimal number of hash functions given expected items and
    /// bit count.
    ///
    /// Formula: `k = ceil((m / n) * ln(2))`, clamped to at least 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsketch::bloom::BloomFilterBuilder;
    /// let hashes = BloomFilterBuilder::suggest_num_hashes(1000, 9586);
    /// assert_eq!(hashes, 7); // Optimal k ≈ 6.64
    /// ```
    pub fn suggest_num_hashes(max_items: u64, num_bits: u64) -> u16 {
        let m = num_bits as f64;
        let n = max_items as f64;

        let k = (m / n * std::f64::consts::LN_2).ceil();
        k.clamp(f64::from(MIN_NUM_HASHES), f64::from(MAX_NUM_HASHES)) as u16
    }
}
