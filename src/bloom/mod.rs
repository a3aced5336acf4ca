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

//! Bloom filter implementation for probabilistic set membership testing.
//!
//! A Bloom filter is a space-efficient probabilistic data structure used to
//! test whether an element is a member of a set. False positive matches are
//! possible, but false negatives are not: a query returns either "possibly in
//! set" or "definitely not in set".
//!
//! # Properties
//!
//! - **No false negatives**: if an item was inserted, `contains()` always
//!   returns `true`
//! - **Possible false positives**: `contains()` may return `true` for items
//!   never inserted, with probability tracked by [`BloomFilter::estimated_fpp`]
//! - **Fixed size**: the bit array and hash count are derived once at
//!   construction and never change; there is no resizing and no deletion
//! - **Opaque items**: items are arbitrary byte sequences
//!
//! # Usage
//!
//! ```rust
//! use bloomsketch::bloom::BloomFilterBuilder;
//!
//! // Optimal parameters for 1000 items at a 1% false positive target.
//! let mut filter = BloomFilterBuilder::with_accuracy(1000, 0.01)
//!     .unwrap()
//!     .build();
//!
//! filter.insert("apple");
//! assert!(filter.contains("apple"));
//! assert!(!filter.contains("grape"));
//!
//! let stats = filter.stats();
//! assert_eq!(stats.inserted_count, 1);
//! ```

mod builder;
mod sketch;

pub use self::builder::BloomFilterBuilder;
pub use self::builder::MAX_NUM_BITS;
pub use self::builder::MAX_NUM_HASHES;
pub use self::builder::MIN_NUM_BITS;
pub use self::builder::MIN_NUM_HASHES;
pub use self::sketch::BloomFilter;
pub use self::sketch::FilterStats;
pub use self::sketch::HashMode;
