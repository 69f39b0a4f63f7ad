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

use crate::basic::BasicFilter;
use crate::error::Error;
use crate::hash::make_hasher;
use crate::object::Object;
use crate::object::Wrap;

/// The A² Bloom filter: two basic filters with a capacity-triggered
/// generation swap.
///
/// See the [module documentation](crate::a2).
#[derive(Debug, Clone)]
pub struct A2Filter {
    active: BasicFilter,
    retired: BasicFilter,
    capacity: usize,
    items: usize,
}

impl A2Filter {
    /// The optimal number of hash functions for the false-positive rate
    /// `fp`: `⌊−log₂(1 − √(1 − fp))⌋`.
    ///
    /// # Panics
    ///
    /// Panics if `fp` is so large that no hash function is optimal.
    pub fn optimal_k(fp: f64) -> usize {
        let k = (-(1.0 - (1.0 - fp).sqrt()).log2()).floor();
        assert!(k >= 1.0, "false-positive rate too large for the A2 construction");
        k as usize
    }

    /// The optimal per-generation capacity for `fp` and `cells`:
    /// `⌊cells/(2k)·ln 2⌋`.
    pub fn optimal_capacity(fp: f64, cells: usize) -> usize {
        let k = Self::optimal_k(fp);
        (cells as f64 / (2 * k) as f64 * std::f64::consts::LN_2).floor() as usize
    }

    /// Creates an A² filter whose two generations receive `cells / 2` cells
    /// each and use `k` hash functions seeded from `seed1` and `seed2`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidGeometry` error if `cells` is zero or odd,
    /// `capacity` is zero, or `k` is zero.
    pub fn new(
        k: usize,
        cells: usize,
        capacity: usize,
        seed1: u64,
        seed2: u64,
    ) -> Result<Self, Error> {
        if cells == 0 || cells % 2 != 0 {
            return Err(
                Error::invalid_geometry("the generations need an even, positive number of cells")
                    .with_context("cells", cells),
            );
        }
        if capacity == 0 {
            return Err(Error::invalid_geometry("capacity must be positive"));
        }
        let active = BasicFilter::new(make_hasher(k, seed1, false)?, cells / 2, false)?;
        let retired = BasicFilter::new(make_hasher(k, seed2, false)?, cells / 2, false)?;
        Ok(A2Filter {
            active,
            retired,
            capacity,
            items: 0,
        })
    }

    /// Adds an item, deduplicating against the active generation.
    ///
    /// An item already present in the active filter is not admitted again.
    /// Crossing the capacity retires the active generation: the retired
    /// filter is cleared, the two swap roles, and the item seeds the new
    /// generation.
    pub fn add<T: Wrap>(&mut self, item: T) {
        self.add_object(&item.wrap());
    }

    /// Adds a wrapped object.
    pub fn add_object(&mut self, object: &Object) {
        if self.active.lookup_object(object) > 0 {
            return;
        }
        self.active.add_object(object);
        self.items += 1;
        if self.items <= self.capacity {
            return;
        }
        self.retired.clear();
        self.active.swap(&mut self.retired);
        self.active.add_object(object);
        self.items = 1;
    }

    /// Looks an item up: 1 if either generation contains it, 0 otherwise.
    pub fn lookup<T: Wrap>(&self, item: T) -> u64 {
        self.lookup_object(&item.wrap())
    }

    /// Looks a wrapped object up.
    pub fn lookup_object(&self, object: &Object) -> u64 {
        let active = self.active.lookup_object(object);
        if active > 0 {
            active
        } else {
            self.retired.lookup_object(object)
        }
    }

    /// Resets both generations.
    pub fn clear(&mut self) {
        self.active.clear();
        self.retired.clear();
        self.items = 0;
    }

    /// The number of items admitted into the active generation since the
    /// last swap.
    pub fn items(&self) -> usize {
        self.items
    }

    /// The per-generation capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
