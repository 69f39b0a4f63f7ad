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

//! The bitwise Bloom filter.
//!
//! A positional counter built from basic filters: level *l* stores bit *l*
//! of an item's count, so the lookup of an item is the integer whose bit *l*
//! is the membership answer of level *l*. Adding an item ripple-carries
//! through the levels — each level that already contains the item has it
//! removed and the carry moves up, growing the level list on overflow.
//! Levels shrink geometrically, mirroring how rarely high bits change.

mod filter;

pub use self::filter::BitwiseFilter;
