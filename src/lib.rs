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

//! # multibloom
//!
//! A family of Bloom-filter variants answering "how many times has item *x*
//! been inserted?" with at-most-one-sided error, in a small fraction of the
//! memory an exact count would take.
//!
//! All variants share one substrate: a bit-packed fixed-width counter array
//! ([`counter`]), a hash fan-out from an opaque byte sequence to *k* digests
//! ([`hash`] and [`object`]), and a partitioning policy mapping digests to
//! cell indices. The variants differ only in the insert/query algorithm they
//! run on top:
//!
//! - [`basic`] — 1-bit cells; membership only.
//! - [`counting`] — width-*w* cells; frequency estimates with removal.
//! - [`spectral`] — minimum-increase and recurring-minimum refinements.
//! - [`a2`] — two generations with capacity-triggered swap.
//! - [`stable`] — randomized decay for unbounded streams.
//! - [`bitwise`] — one basic filter per bit-plane of the count.
//!
//! Filters are single-threaded values: no operation blocks, no global state
//! is consulted, and a filter may be shared across threads for lookups once
//! construction finished.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod a2;
pub mod basic;
pub mod bitwise;
pub mod counter;
pub mod counting;
pub mod error;
pub mod hash;
pub mod object;
pub mod spectral;
pub mod stable;

mod partition;
