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

//! The stable Bloom filter.
//!
//! A counting filter that keeps its false-positive rate stable over
//! unbounded streams by decaying old entries: every add first decrements *d*
//! distinct cells chosen uniformly at random, then sets the item's cells to
//! the counter ceiling. Recently added items answer with the ceiling; items
//! not refreshed for a while age toward zero — eviction is implicit and
//! randomized.
//!
//! Each filter owns its pseudo-random generator, seeded at construction, so
//! a given seed reproduces the exact eviction sequence.

mod filter;

pub use self::filter::StableFilter;
