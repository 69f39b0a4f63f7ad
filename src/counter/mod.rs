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

//! Bit-packed fixed-width counter arrays.
//!
//! A [`CounterVector`] packs `cells` counters of `width` bits each into one
//! contiguous bit vector, counter *c* occupying bit positions
//! `[c·width, (c+1)·width)` in little-endian order within the counter. All
//! arithmetic saturates: increments clamp at `2^width − 1` and decrements
//! clamp at zero, so a counter never wraps.
//!
//! With `width = 1` the array degenerates to a plain bit vector whose
//! saturating arithmetic still holds (`1 + 1 → 1`, `0 − 1 → 0`); the basic
//! Bloom filter is exactly this case.
//!
//! # Usage
//!
//! ```rust
//! use multibloom::counter::CounterVector;
//!
//! let mut counters = CounterVector::new(3, 2).unwrap();
//! counters.increment(0);
//! counters.increment(0);
//! assert_eq!(counters.count(0), 2);
//!
//! // Width 2 tops out at 3.
//! counters.increment(0);
//! assert!(!counters.increment(0));
//! assert_eq!(counters.count(0), 3);
//! ```

mod vector;

pub use self::vector::CounterVector;
