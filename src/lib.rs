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

//! # bloomsketch
//!
//! A Bloom filter: a space-efficient probabilistic data structure that answers
//! "is this item possibly a member of the set?" in constant time and bounded
//! memory, allowing false positives but never false negatives. It is a building
//! block for storage engines, caches, and dedup pipelines that want to cheaply
//! rule out "definitely absent" before paying for an expensive lookup.
//!
//! See the [`bloom`] module for usage.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod bloom;
pub mod common;
pub mod error;
pub mod hash;
