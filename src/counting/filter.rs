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

use crate::counter::CounterVector;
use crate::error::Error;
use crate::hash::Hasher;
use crate::object::Object;
use crate::object::Wrap;
use crate::partition;

/// The counting Bloom filter: a frequency filter with width-*w* cells.
///
/// See the [module documentation](crate::counting).
#[derive(Debug, Clone)]
pub struct CountingFilter {
    hasher: Hasher,
    cells: CounterVector,
    partition: bool,
}

impl CountingFilter {
    /// Creates a filter of `cells` counters with `width` bits each.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidGeometry` error if `cells` is zero, `width` is
    /// zero or larger than 64 bits, or `partition` is set and `cells` does
    /// not divide evenly among the hasher's hash functions.
    pub fn new(
        hasher: Hasher,
        cells: usize,
        width: usize,
        partition: bool,
    ) -> Result<Self, Error> {
        let store = CounterVector::new(cells, width)?;
        if partition && cells % hasher.k() != 0 {
            return Err(Error::invalid_geometry(
                "partitioning requires the cell count to divide evenly among the hash functions",
            )
            .with_context("cells", cells)
            .with_context("hash_functions", hasher.k()));
        }
        Ok(CountingFilter {
            hasher,
            cells: store,
            partition,
        })
    }

    /// Adds an item by incrementing each of its cells once.
    ///
    /// Saturation at the counter ceiling is silent.
    pub fn add<T: Wrap>(&mut self, item: T) {
        self.add_object(&item.wrap());
    }

    /// Adds a wrapped object.
    pub fn add_object(&mut self, object: &Object) {
        let indices = self.find_indices(object);
        self.increment(&indices, 1);
    }

    /// Estimates the frequency of an item as the minimum count over its
    /// cells.
    pub fn lookup<T: Wrap>(&self, item: T) -> u64 {
        self.lookup_object(&item.wrap())
    }

    /// Looks a wrapped object up.
    pub fn lookup_object(&self, object: &Object) -> u64 {
        self.find_minimum(&self.find_indices(object))
    }

    /// Removes an item by decrementing each of its cells once.
    ///
    /// Returns `false` if any cell was already zero — the item was most
    /// likely never added.
    pub fn remove<T: Wrap>(&mut self, item: T) -> bool {
        self.remove_object(&item.wrap())
    }

    /// Removes a wrapped object.
    pub fn remove_object(&mut self, object: &Object) -> bool {
        let indices = self.find_indices(object);
        self.decrement(&indices, 1)
    }

    /// Resets every counter to zero.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// The number of cells.
    pub fn size(&self) -> usize {
        self.cells.size()
    }

    /// The number of bits per cell.
    pub fn width(&self) -> usize {
        self.cells.width()
    }

    /// The counter ceiling, `2^width − 1`.
    pub fn max(&self) -> u64 {
        self.cells.max()
    }
}

// Helper surface consumed by the spectral variants, which compose a counting
// filter instead of inheriting from one.
impl CountingFilter {
    /// Maps an object to its ordered, distinct cell indices.
    pub(crate) fn find_indices(&self, object: &Object) -> Vec<usize> {
        partition::cell_indices(
            &self.hasher.digests(object),
            self.cells.size(),
            self.partition,
        )
    }

    /// The minimum count over `indices`.
    pub(crate) fn find_minimum(&self, indices: &[usize]) -> u64 {
        indices
            .iter()
            .map(|&index| self.cells.count(index))
            .min()
            .unwrap_or(0)
    }

    /// The indices among `indices` holding the minimum count.
    pub(crate) fn find_minima(&self, indices: &[usize]) -> Vec<usize> {
        let mut minimum = u64::MAX;
        let mut positions = Vec::new();
        for &index in indices {
            let count = self.cells.count(index);
            if count < minimum {
                minimum = count;
                positions.clear();
                positions.push(index);
            } else if count == minimum {
                positions.push(index);
            }
        }
        positions
    }

    /// Increments every index by `value`; `false` iff any counter was
    /// already saturated.
    pub(crate) fn increment(&mut self, indices: &[usize], value: u64) -> bool {
        let mut ok = true;
        for &index in indices {
            if !self.cells.increment_by(index, value) {
                ok = false;
            }
        }
        ok
    }

    /// Decrements every index by `value`; `false` iff any counter was
    /// already zero.
    pub(crate) fn decrement(&mut self, indices: &[usize], value: u64) -> bool {
        let mut ok = true;
        for &index in indices {
            if !self.cells.decrement_by(index, value) {
                ok = false;
            }
        }
        ok
    }

    /// Decrements a single cell, ignoring underflow. Used by the stable
    /// filter's eviction pass.
    pub(crate) fn evict(&mut self, cell: usize) {
        self.cells.decrement(cell);
    }

    /// Reads the counter at `cell`.
    pub(crate) fn count_at(&self, cell: usize) -> u64 {
        self.cells.count(cell)
    }
}
