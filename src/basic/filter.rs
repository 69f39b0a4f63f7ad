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

use std::mem;

use bit_vec::BitVec;

use crate::error::Error;
use crate::hash::make_hasher;
use crate::hash::Hasher;
use crate::object::Object;
use crate::object::Wrap;
use crate::partition;

/// The basic Bloom filter: a membership filter with 1-bit cells.
///
/// Use [`BasicFilter::new`] for explicit geometry or
/// [`BasicFilter::with_rate`] for geometry derived from a target
/// false-positive rate. See the [module documentation](crate::basic).
#[derive(Debug, Clone)]
pub struct BasicFilter {
    hasher: Hasher,
    bits: BitVec,
    partition: bool,
}

impl BasicFilter {
    /// The number of cells guaranteeing the false-positive rate `fp` for
    /// `capacity` items: `⌈−capacity·ln fp/(ln 2)²⌉`.
    pub fn optimal_cells(fp: f64, capacity: usize) -> usize {
        let ln2 = std::f64::consts::LN_2;
        (-(capacity as f64) * fp.ln() / (ln2 * ln2)).ceil() as usize
    }

    /// The optimal number of hash functions for `cells` cells filled to
    /// `capacity`: `⌈cells/capacity·ln 2⌉`.
    pub fn optimal_k(cells: usize, capacity: usize) -> usize {
        (cells as f64 / capacity as f64 * std::f64::consts::LN_2).ceil() as usize
    }

    /// Creates a filter with an explicit hasher and cell count.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidGeometry` error if `cells` is zero, or if
    /// `partition` is set and `cells` does not divide evenly among the
    /// hasher's hash functions.
    pub fn new(hasher: Hasher, cells: usize, partition: bool) -> Result<Self, Error> {
        if cells == 0 {
            return Err(Error::invalid_geometry("filter needs at least one cell"));
        }
        if partition && cells % hasher.k() != 0 {
            return Err(Error::invalid_geometry(
                "partitioning requires the cell count to divide evenly among the hash functions",
            )
            .with_context("cells", cells)
            .with_context("hash_functions", hasher.k()));
        }
        Ok(Self::with_validated(hasher, cells, partition))
    }

    /// Creates a filter sized for a target false-positive rate.
    ///
    /// Computes the optimal cell count and number of hash functions for
    /// `capacity` items at rate `fp`. When `partition` is set the cell count
    /// is rounded up to the next multiple of *k* so every hash function owns
    /// an equal slice.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidGeometry` error if `fp` lies outside `(0, 1)` or
    /// `capacity` is zero.
    pub fn with_rate(
        fp: f64,
        capacity: usize,
        seed: u64,
        double_hashing: bool,
        partition: bool,
    ) -> Result<Self, Error> {
        if !(fp > 0.0 && fp < 1.0) {
            return Err(
                Error::invalid_geometry("false-positive rate must lie in (0, 1)")
                    .with_context("fp", fp),
            );
        }
        if capacity == 0 {
            return Err(Error::invalid_geometry("capacity must be positive"));
        }
        let mut cells = Self::optimal_cells(fp, capacity);
        let k = Self::optimal_k(cells, capacity);
        if partition {
            cells = cells.div_ceil(k) * k;
        }
        let hasher = make_hasher(k, seed, double_hashing)?;
        Self::new(hasher, cells, partition)
    }

    /// Crate-internal constructor for callers that have already validated
    /// the geometry.
    pub(crate) fn with_validated(hasher: Hasher, cells: usize, partition: bool) -> Self {
        debug_assert!(cells > 0);
        debug_assert!(!partition || cells % hasher.k() == 0);
        BasicFilter {
            hasher,
            bits: BitVec::from_elem(cells, false),
            partition,
        }
    }

    /// Adds an item.
    pub fn add<T: Wrap>(&mut self, item: T) {
        self.add_object(&item.wrap());
    }

    /// Adds a wrapped object.
    pub fn add_object(&mut self, object: &Object) {
        for index in self.indices(object) {
            self.bits.set(index, true);
        }
    }

    /// Looks an item up: 1 if all of its cells are set, 0 otherwise.
    pub fn lookup<T: Wrap>(&self, item: T) -> u64 {
        self.lookup_object(&item.wrap())
    }

    /// Looks a wrapped object up.
    pub fn lookup_object(&self, object: &Object) -> u64 {
        for index in self.indices(object) {
            if !self.bits[index] {
                return 0;
            }
        }
        1
    }

    /// Removes an item by resetting its cells.
    ///
    /// May introduce false negatives: the cells of the removed item may be
    /// shared with other inserted items.
    pub fn remove<T: Wrap>(&mut self, item: T) {
        self.remove_object(&item.wrap());
    }

    /// Removes a wrapped object.
    pub fn remove_object(&mut self, object: &Object) {
        for index in self.indices(object) {
            self.bits.set(index, false);
        }
    }

    /// Resets all cells.
    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Exchanges the entire state with `other` in constant time.
    pub fn swap(&mut self, other: &mut BasicFilter) {
        mem::swap(self, other);
    }

    /// The number of cells.
    pub fn size(&self) -> usize {
        self.bits.len()
    }

    fn indices(&self, object: &Object) -> Vec<usize> {
        partition::cell_indices(&self.hasher.digests(object), self.bits.len(), self.partition)
    }
}
