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

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::counting::CountingFilter;
use crate::error::Error;
use crate::hash::Hasher;
use crate::object::Object;
use crate::object::Wrap;

/// The stable Bloom filter: a counting filter with randomized decay.
///
/// See the [module documentation](crate::stable).
#[derive(Debug, Clone)]
pub struct StableFilter {
    inner: CountingFilter,
    evictions: usize,
    rng: StdRng,
}

impl StableFilter {
    /// Creates a filter of `cells` counters with `width` bits each,
    /// decrementing `evictions` random cells per add. The eviction sequence
    /// is determined by `seed`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidGeometry` error if `evictions` exceeds `cells`, or
    /// propagates the geometry errors of
    /// [`CountingFilter::new`](crate::counting::CountingFilter::new).
    pub fn new(
        hasher: Hasher,
        cells: usize,
        width: usize,
        evictions: usize,
        seed: u64,
    ) -> Result<Self, Error> {
        let inner = CountingFilter::new(hasher, cells, width, false)?;
        if evictions > cells {
            return Err(
                Error::invalid_geometry("cannot evict more cells than the filter holds")
                    .with_context("cells", cells)
                    .with_context("evictions", evictions),
            );
        }
        Ok(StableFilter {
            inner,
            evictions,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Adds an item.
    ///
    /// Decrements `evictions` distinct cells chosen uniformly at random,
    /// then sets every cell of the item to the counter ceiling.
    pub fn add<T: Wrap>(&mut self, item: T) {
        self.add_object(&item.wrap());
    }

    /// Adds a wrapped object.
    pub fn add_object(&mut self, object: &Object) {
        let cells = self.inner.size();
        let mut chosen: Vec<usize> = Vec::with_capacity(self.evictions);
        while chosen.len() < self.evictions {
            let cell = self.rng.gen_range(0..cells);
            if !chosen.contains(&cell) {
                chosen.push(cell);
                self.inner.evict(cell);
            }
        }

        let maximum = self.inner.max();
        let indices = self.inner.find_indices(object);
        self.inner.increment(&indices, maximum);
    }

    /// Estimates the frequency of an item as the minimum count over its
    /// cells. Aged-out items report zero.
    pub fn lookup<T: Wrap>(&self, item: T) -> u64 {
        self.inner.lookup(item)
    }

    /// Looks a wrapped object up.
    pub fn lookup_object(&self, object: &Object) -> u64 {
        self.inner.lookup_object(object)
    }

    /// Resets every counter to zero. The eviction sequence continues where
    /// it left off.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// The number of cells.
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// The number of cells decremented per add.
    pub fn evictions(&self) -> usize {
        self.evictions
    }
}
