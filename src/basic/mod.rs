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

//! The basic Bloom filter.
//!
//! One bit per cell: an add sets the *k* cells of the item, a lookup reports
//! 1 iff all of them are set. False positives are possible, false negatives
//! are not (unless [`remove`](BasicFilter::remove) is used).
//!
//! # Usage
//!
//! ```rust
//! use multibloom::basic::BasicFilter;
//!
//! // Sized for 1000 items at a 1% false-positive rate.
//! let mut filter = BasicFilter::with_rate(0.01, 1000, 42, true, false).unwrap();
//!
//! filter.add("apple");
//! filter.add(4711u64);
//!
//! assert_eq!(filter.lookup("apple"), 1);
//! assert_eq!(filter.lookup(4711u64), 1);
//! assert_eq!(filter.lookup("grape"), 0);
//! ```
//!
//! # Creating filters
//!
//! Either pass an explicit [`Hasher`](crate::hash::Hasher) and cell count to
//! [`BasicFilter::new`], or let [`BasicFilter::with_rate`] derive the optimal
//! geometry from a target false-positive rate and capacity:
//! `cells = ⌈−capacity·ln fp/(ln 2)²⌉` and `k = ⌈cells/capacity·ln 2⌉`.

mod filter;

pub use self::filter::BasicFilter;
