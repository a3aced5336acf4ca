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

use crate::hash;

/// Hashing strategy used to map an item to its bit positions.
///
/// Both strategies are deterministic per filter instance and produce
/// statistically equivalent false positive behavior; they differ only in
/// hash evaluations per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashMode {
    /// Kirsch-Mitzenmacher double hashing: one 128-bit hash evaluation yields
    /// `(h1, h2)`; position i is `(h1 + i * h2) mod m` for i in 0..k.
    #[default]
    DoubleHashing,
    /// One independent hash evaluation per position, seeded `seed + i` for
    /// i in 0..k; position i is the hash reduced mod m.
    IndependentSeeded,
}

/// Point-in-time view of a filter's configuration and fill state.
///
/// Returned by [`BloomFilter::stats`]. Any display or logging of these values
/// is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterStats {
    /// Total number of bits in the filter (m).
    pub num_bits: u64,
    /// Number of hash functions (k).
    pub num_hashes: u16,
    /// Number of insert operations performed since construction or the last
    /// clear, counting repeats.
    pub inserted_count: u64,
    /// Estimated false positive probability at the current fill level.
    pub estimated_fpp: f64,
}

/// A Bloom filter for probabilistic set membership testing.
///
/// Items are opaque byte sequences. Provides fast membership queries with:
/// - No false negatives (inserted items always return `true`)
/// - Tunable false positive rate
/// - Constant space, fixed at construction
///
/// Use [`BloomFilterBuilder`](super::BloomFilterBuilder) to construct
/// instances.
///
/// # Concurrency
///
/// A filter is a plain single-threaded structure: mutation takes `&mut self`
/// and no internal synchronization is performed. Callers that share a filter
/// across threads must wrap the whole filter in one exclusive lock around
/// every insert, query, and clear.
#[derive(Debug, Clone, PartialEq)]
pub struct BloomFilter {
    /// Base seed for all hash evaluations
    seed: u32,
    /// Number of hash functions to use (k)
    num_hashes: u16,
    /// Total number of bits in the filter (m)
    num_bits: u64,
    /// Hashing strategy, fixed at construction
    mode: HashMode,
    /// Count of bits set to 1 (for statistics)
    num_bits_set: u64,
    /// Count of insert operations performed, including repeats
    inserted_count: u64,
    /// Bit array packed into u64 words
    /// Length = ceil(num_bits / 64)
    bit_array: Vec<u64>,
}

impl BloomFilter {
    /// Invoked by the builder; parameters are already validated.
    pub(super) fn with_config(num_bits: u64, num_hashes: u16, seed: u32, mode: HashMode) -> Self {
        let num_words = num_bits.div_ceil(64) as usize;

        BloomFilter {
            seed,
            num_hashes,
            num_bits,
            mode,
            num_bits_set: 0,
            inserted_count: 0,
            bit_array: vec![0u64; num_words],
        }
    }

    // ========================================================================
    // Query Operations
    // ========================================================================

    /// Tests whether an item is possibly in the set.
    ///
    /// Returns:
    /// - `true`: item was **possibly** inserted (or is a false positive)
    /// - `false`: item was **definitely not** inserted
    ///
    /// Short-circuits on the first unset bit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsketch::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01).unwrap().build();
    /// filter.insert("apple");
    ///
    /// assert!(filter.contains("apple")); // true - was inserted
    /// assert!(!filter.contains("grape")); // false - never inserted (probably)
    /// ```
    pub fn contains(&self, item: impl AsRef<[u8]>) -> bool {
        if self.is_empty() {
            return false;
        }
        self.check_bits(item.as_ref())
    }

    // ========================================================================
    // Update Operations
    // ========================================================================

    /// Inserts an item into the filter.
    ///
    /// After insertion, `contains(item)` will always return `true`. Repeated
    /// inserts of the same item leave the bit array unchanged but still bump
    /// the insert counter, so the estimated false positive rate treats every
    /// call as a new item. Insertion cannot fail; over-inserting past the
    /// configured capacity silently degrades the false positive rate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsketch::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01).unwrap().build();
    ///
    /// filter.insert("apple");
    /// filter.insert(b"raw bytes".as_slice());
    ///
    /// assert!(filter.contains("apple"));
    /// ```
    pub fn insert(&mut self, item: impl AsRef<[u8]>) {
        self.set_bits(item.as_ref());
        self.inserted_count += 1;
    }

    /// Resets the filter to its initial empty state.
    ///
    /// Clears all bits and the insert counter while preserving the bit count,
    /// hash count, seed, and hashing mode. No reallocation is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsketch::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::with_accuracy(100, 0.01).unwrap().build();
    /// filter.insert("apple");
    /// assert!(!filter.is_empty());
    ///
    /// filter.clear();
    /// assert!(filter.is_empty());
    /// assert!(!filter.contains("apple"));
    /// ```
    pub fn clear(&mut self) {
        for word in &mut self.bit_array {
            *word = 0;
        }
        self.num_bits_set = 0;
        self.inserted_count = 0;
    }

    // ========================================================================
    // Statistics and Properties
    // ========================================================================

    /// Returns whether the filter is empty (no bits set).
    pub fn is_empty(&self) -> bool {
        self.num_bits_set == 0
    }

    /// Returns the total number of bits in the filter (m).
    pub fn num_bits(&self) -> u64 {
        self.num_bits
    }

    /// Returns the number of hash functions used (k).
    pub fn num_hashes(&self) -> u16 {
        self.num_hashes
    }

    /// Returns the number of insert operations performed, counting repeats.
    pub fn inserted_count(&self) -> u64 {
        self.inserted_count
    }

    /// Returns the hash seed.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the hashing strategy.
    pub fn hash_mode(&self) -> HashMode {
        self.mode
    }

    /// Returns the number of bits set to 1.
    ///
    /// Useful for monitoring filter saturation.
    pub fn bits_used(&self) -> u64 {
        self.num_bits_set
    }

    /// Returns the current load factor (fraction of bits set).
    ///
    /// Values above 0.5 indicate degraded false positive rates.
    pub fn load_factor(&self) -> f64 {
        self.num_bits_set as f64 / self.num_bits as f64
    }

    /// Estimates the current false positive probability.
    ///
    /// Computed from live state as `(1 - e^(-k*n/m))^k` where:
    /// - k = num_hashes
    /// - n = inserted_count
    /// - m = num_bits
    ///
    /// This is an estimate, not an exact count: it assumes hash outputs are
    /// uniformly distributed and independent.
    pub fn estimated_fpp(&self) -> f64 {
        let k = f64::from(self.num_hashes);
        let n = self.inserted_count as f64;
        let m = self.num_bits as f64;

        (1.0 - (-k * n / m).exp()).powf(k)
    }

    /// Returns a point-in-time snapshot of configuration and fill state.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomsketch::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::with_size(1024, 5).unwrap().build();
    /// filter.insert("apple");
    ///
    /// let stats = filter.stats();
    /// assert_eq!(stats.num_bits, 1024);
    /// assert_eq!(stats.num_hashes, 5);
    /// assert_eq!(stats.inserted_count, 1);
    /// assert!(stats.estimated_fpp > 0.0);
    /// ```
    pub fn stats(&self) -> FilterStats {
        FilterStats {
            num_bits: self.num_bits,
            num_hashes: self.num_hashes,
            inserted_count: self.inserted_count,
            estimated_fpp: self.estimated_fpp(),
        }
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    /// Checks if all k bits for the item are set.
    fn check_bits(&self, item: &[u8]) -> bool {
        match self.mode {
            HashMode::DoubleHashing => {
                let (h1, h2) = hash::murmur3_x64_128(item, self.seed);
                for i in 0..self.num_hashes {
                    if !self.get_bit(self.double_hash_index(h1, h2, i)) {
                        return false;
                    }
                }
            }
            HashMode::IndependentSeeded => {
                for i in 0..self.num_hashes {
                    if !self.get_bit(self.seeded_index(item, i)) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Sets all k bits for the item.
    fn set_bits(&mut self, item: &[u8]) {
        match self.mode {
            HashMode::DoubleHashing => {
                let (h1, h2) = hash::murmur3_x64_128(item, self.seed);
                for i in 0..self.num_hashes {
                    let bit_index = self.double_hash_index(h1, h2, i);
                    self.set_bit(bit_index);
                }
            }
            HashMode::IndependentSeeded => {
                for i in 0..self.num_hashes {
                    let bit_index = self.seeded_index(item, i);
                    self.set_bit(bit_index);
                }
            }
        }
    }

    /// Computes a bit index using double hashing (Kirsch-Mitzenmacher).
    /// Formula: (h1 + i * h2) mod num_bits, with wrapping arithmetic.
    fn double_hash_index(&self, h1: u64, h2: u64, i: u16) -> u64 {
        h1.wrapping_add(u64::from(i).wrapping_mul(h2)) % self.num_bits
    }

    /// Computes the i-th bit index by re-hashing the item under seed + i.
    fn seeded_index(&self, item: &[u8], i: u16) -> u64 {
        hash::murmur3_x64_64(item, self.seed.wrapping_add(u32::from(i))) % self.num_bits
    }

    /// Gets the value of a single bit.
    fn get_bit(&self, bit_index: u64) -> bool {
        let word_index = (bit_index / 64) as usize;
        let mask = 1u64 << (bit_index % 64);
        (self.bit_array[word_index] & mask) != 0
    }

    /// Sets a single bit and updates the count if it wasn't already set.
    fn set_bit(&mut self, bit_index: u64) {
        let word_index = (bit_index / 64) as usize;
        let mask = 1u64 << (bit_index % 64);

        if (self.bit_array[word_index] & mask) == 0 {
            self.bit_array[word_index] |= mask;
            self.num_bits_set += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bloom::BloomFilterBuilder;

    fn small_filter(mode: HashMode) -> BloomFilter {
        BloomFilterBuilder::with_size(1024, 5)
            .unwrap()
            .hash_mode(mode)
            .build()
    }

    #[test]
    fn test_insert_and_contains() {
        for mode in [HashMode::DoubleHashing, HashMode::IndependentSeeded] {
            let mut filter = small_filter(mode);

            assert!(!filter.contains("apple"));
            filter.insert("apple");
            assert!(filter.contains("apple"));
            assert!(!filter.is_empty());
            assert_eq!(filter.inserted_count(), 1);
        }
    }

    #[test]
    fn test_repeated_insert_is_idempotent_on_bits() {
        for mode in [HashMode::DoubleHashing, HashMode::IndependentSeeded] {
            let mut filter = small_filter(mode);

            filter.insert("apple");
            let bits_after_first = filter.bits_used();
            for _ in 0..9 {
                filter.insert("apple");
            }

            assert_eq!(filter.bits_used(), bits_after_first);
            // The insert counter still counts every call.
            assert_eq!(filter.inserted_count(), 10);
        }
    }

    #[test]
    fn test_insert_touches_at_most_k_bits() {
        let mut filter = small_filter(HashMode::DoubleHashing);
        filter.insert("apple");
        assert!(filter.bits_used() >= 1);
        assert!(filter.bits_used() <= u64::from(filter.num_hashes()));
    }

    #[test]
    fn test_clear() {
        let mut filter = small_filter(HashMode::DoubleHashing);
        filter.insert("apple");
        filter.insert("banana");
        assert!(!filter.is_empty());

        filter.clear();
        assert!(filter.is_empty());
        assert!(!filter.contains("apple"));
        assert!(!filter.contains("banana"));
        assert_eq!(filter.inserted_count(), 0);
        assert_eq!(filter.bits_used(), 0);
        // Configuration is untouched.
        assert_eq!(filter.num_bits(), 1024);
        assert_eq!(filter.num_hashes(), 5);
    }

    #[test]
    fn test_clear_matches_fresh_filter() {
        let mut filter = small_filter(HashMode::DoubleHashing);
        filter.insert("apple");
        filter.clear();

        assert_eq!(filter, small_filter(HashMode::DoubleHashing));
    }

    #[test]
    fn test_same_seed_same_positions() {
        for mode in [HashMode::DoubleHashing, HashMode::IndependentSeeded] {
            let mut a = small_filter(mode);
            let mut b = small_filter(mode);
            a.insert("determinism");
            b.insert("determinism");
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = BloomFilterBuilder::with_size(1 << 20, 5)
            .unwrap()
            .seed(1)
            .build();
        let mut b = BloomFilterBuilder::with_size(1 << 20, 5)
            .unwrap()
            .seed(2)
            .build();
        a.insert("apple");
        b.insert("apple");
        assert_ne!(a, b);
    }

    #[test]
    fn test_single_bit_filter() {
        // m = 1, k = 1 is the smallest legal filter; every position is 0.
        let mut filter = BloomFilterBuilder::with_size(1, 1).unwrap().build();
        assert!(!filter.contains("anything"));
        filter.insert("anything");
        assert!(filter.contains("anything"));
        // Everything collides now, the degenerate false positive case.
        assert!(filter.contains("something else"));
        assert_eq!(filter.bits_used(), 1);
    }

    #[test]
    fn test_estimated_fpp_from_insert_count() {
        let mut filter = small_filter(HashMode::DoubleHashing);
        assert_eq!(filter.estimated_fpp(), 0.0);

        for i in 0..100u32 {
            filter.insert(i.to_le_bytes());
        }

        let k = 5.0f64;
        let expected = (1.0 - (-k * 100.0 / 1024.0).exp()).powf(k);
        assert!((filter.estimated_fpp() - expected).abs() < 1e-12);
        assert!((filter.stats().estimated_fpp - expected).abs() < 1e-12);
    }

    #[test]
    fn test_estimated_fpp_grows_with_insertions() {
        let mut filter = small_filter(HashMode::DoubleHashing);
        let mut last = filter.estimated_fpp();
        for i in 0..50u32 {
            filter.insert(i.to_le_bytes());
            let fpp = filter.estimated_fpp();
            assert!(fpp > last);
            last = fpp;
        }
        assert!(last < 1.0);
    }

    #[test]
    fn test_stats_snapshot() {
        let mut filter = small_filter(HashMode::IndependentSeeded);
        filter.insert("apple");
        filter.insert("banana");

        let stats = filter.stats();
        assert_eq!(stats.num_bits, 1024);
        assert_eq!(stats.num_hashes, 5);
        assert_eq!(stats.inserted_count, 2);
        assert!(stats.estimated_fpp > 0.0 && stats.estimated_fpp < 1.0);
    }

    #[test]
    fn test_load_factor() {
        let mut filter = small_filter(HashMode::DoubleHashing);
        assert_eq!(filter.load_factor(), 0.0);
        filter.insert("apple");
        assert!(filter.load_factor() > 0.0);
        assert!(filter.load_factor() <= 5.0 / 1024.0);
    }
}
