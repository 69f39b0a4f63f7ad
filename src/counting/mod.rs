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

//! The counting Bloom filter.
//!
//! Width-*w* cells instead of single bits: an add increments the item's
//! cells, a lookup returns the minimum count over them, and a remove
//! decrements them. Absent saturation and removals, the estimate is an upper
//! bound of the true count — the bias is strictly false-positive.
//!
//! # Usage
//!
//! ```rust
//! use multibloom::counting::CountingFilter;
//! use multibloom::hash::make_hasher;
//!
//! let hasher = make_hasher(3, 42, false).unwrap();
//! let mut filter = CountingFilter::new(hasher, 1024, 4, false).unwrap();
//!
//! filter.add("epsilon");
//! filter.add("epsilon");
//! assert_eq!(filter.lookup("epsilon"), 2);
//!
//! filter.remove("epsilon");
//! assert_eq!(filter.lookup("epsilon"), 1);
//! ```

mod filter;

pub use self::filter::CountingFilter;
