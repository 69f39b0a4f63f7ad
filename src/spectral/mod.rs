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

//! Spectral Bloom filters.
//!
//! Two refinements of the counting filter that reduce over-counting of
//! frequent items:
//!
//! - [`SpectralMiFilter`] — *minimum increase*: an add increments only the
//!   cells already holding the item's minimum count.
//! - [`SpectralRmFilter`] — *recurring minimum*: items whose minimum is held
//!   by a single cell overflow into a secondary counting filter with
//!   independent geometry.
//!
//! An item has a *recurring minimum* when its minimum count appears at two
//! or more of its cells; with all digests collapsed onto a single cell the
//! minimum trivially recurs.

mod mi;
mod rm;

pub use self::mi::SpectralMiFilter;
pub use self::rm::SpectralRmFilter;
