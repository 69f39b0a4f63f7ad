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

use crate::counting::CountingFilter;
use crate::error::Error;
use crate::hash::Hasher;
use crate::object::Object;
use crate::object::Wrap;

/// A spectral Bloom filter with the minimum-increase policy.
///
/// Adds increment only the cells holding the item's current minimum, so
/// cells shared with more frequent items are not inflated further. Removal
/// is not supported: mixed with decrements the estimate would stop being an
/// upper bound of the true count.
#[derive(Debug, Clone)]
pub struct SpectralMiFilter {
    inner: CountingFilter,
}

impl SpectralMiFilter {
    /// Creates a filter of `cells` counters with `width` bits each.
    ///
    /// # Errors
    ///
    /// Propagates the geometry errors of
    /// [`CountingFilter::new`](crate::counting::CountingFilter::new).
    pub fn new(
        hasher: Hasher,
        cells: usize,
        width: usize,
        partition: bool,
    ) -> Result<Self, Error> {
        Ok(SpectralMiFilter {
            inner: CountingFilter::new(hasher, cells, width, partition)?,
        })
    }

    /// Adds an item by incrementing only its minimum cells.
    pub fn add<T: Wrap>(&mut self, item: T) {
        self.add_object(&item.wrap());
    }

    /// Adds a wrapped object.
    pub fn add_object(&mut self, object: &Object) {
        let indices = self.inner.find_indices(object);
        let minima = self.inner.find_minima(&indices);
        self.inner.increment(&minima, 1);
    }

    /// Estimates the frequency of an item as the minimum count over its
    /// cells.
    pub fn lookup<T: Wrap>(&self, item: T) -> u64 {
        self.inner.lookup(item)
    }

    /// Looks a wrapped object up.
    pub fn lookup_object(&self, object: &Object) -> u64 {
        self.inner.lookup_object(object)
    }

    /// Resets every counter to zero.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// The number of cells.
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// The number of bits per cell.
    pub fn width(&self) -> usize {
        self.inner.width()
    }
}
