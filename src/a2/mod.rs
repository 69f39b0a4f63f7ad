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

//! The A² (active-active buffering) Bloom filter.
//!
//! Two basic filters of half the configured cells each: an *active* filter
//! that admits new items and a *retired* filter holding the previous
//! generation. Once the active filter has admitted more items than its
//! capacity, the retired filter is cleared and the two swap roles — a
//! *generation swap*. The result is a bounded steady-state false-positive
//! rate under continuous admission, at the price of eventually forgetting
//! old items.

mod filter;

pub use self::filter::A2Filter;
