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

/// A spectral Bloom filter with the recurring-minimum policy.
///
/// Most items have a recurring minimum — their minimum count appears at two
/// or more of their cells — and live entirely in the primary filter. Items
/// whose minimum is held by a single cell are the ones most exposed to
/// collision bias, so they are tracked in a smaller secondary filter with
/// independent geometry.
///
/// When adding an item, increase its counters in the primary filter. If its
/// minimum recurs, nothing else happens. Otherwise look the item up in the
/// secondary filter: if present there, increase its counters; if not,
/// initialize them to the unique minimum from the primary filter.
#[derive(Debug, Clone)]
pub struct SpectralRmFilter {
    first: CountingFilter,
    second: CountingFilter,
}

impl SpectralRmFilter {
    /// Creates a recurring-minimum filter from two independently
    /// parameterised counting filters.
    ///
    /// # Errors
    ///
    /// Propagates the geometry errors of
    /// [`CountingFilter::new`](crate::counting::CountingFilter::new) for
    /// either filter.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        hasher1: Hasher,
        cells1: usize,
        width1: usize,
        hasher2: Hasher,
        cells2: usize,
        width2: usize,
        partition: bool,
    ) -> Result<Self, Error> {
        Ok(SpectralRmFilter {
            first: CountingFilter::new(hasher1, cells1, width1, partition)?,
            second: CountingFilter::new(hasher2, cells2, width2, partition)?,
        })
    }

    /// Adds an item.
    pub fn add<T: Wrap>(&mut self, item: T) {
        self.add_object(&item.wrap());
    }

    /// Adds a wrapped object.
    pub fn add_object(&mut self, object: &Object) {
        let indices1 = self.first.find_indices(object);
        self.first.increment(&indices1, 1);

        let minima = self.first.find_minima(&indices1);
        if recurring(&indices1, &minima) {
            return;
        }

        let single_minimum = self.first.count_at(minima[0]);
        let indices2 = self.second.find_indices(object);
        if self.second.find_minimum(&indices2) > 0 {
            self.second.increment(&indices2, 1);
        } else {
            self.second.increment(&indices2, single_minimum);
        }
    }

    /// Estimates the frequency of an item.
    ///
    /// Returns the primary minimum when it recurs; otherwise the secondary
    /// estimate when the item is present there, falling back to the primary
    /// minimum.
    pub fn lookup<T: Wrap>(&self, item: T) -> u64 {
        self.lookup_object(&item.wrap())
    }

    /// Looks a wrapped object up.
    pub fn lookup_object(&self, object: &Object) -> u64 {
        let indices1 = self.first.find_indices(object);
        let minima = self.first.find_minima(&indices1);
        let first_minimum = self.first.count_at(minima[0]);
        if recurring(&indices1, &minima) {
            return first_minimum;
        }
        let second_minimum = self.second.find_minimum(&self.second.find_indices(object));
        if second_minimum > 0 {
            second_minimum
        } else {
            first_minimum
        }
    }

    /// Removes an item.
    ///
    /// Decrements its counters in the primary filter; if the minimum then
    /// still fails to recur, also decrements its counters in the secondary
    /// filter, unless the item is absent there.
    pub fn remove<T: Wrap>(&mut self, item: T) {
        self.remove_object(&item.wrap());
    }

    /// Removes a wrapped object.
    pub fn remove_object(&mut self, object: &Object) {
        let indices1 = self.first.find_indices(object);
        self.first.decrement(&indices1, 1);

        let minima = self.first.find_minima(&indices1);
        if recurring(&indices1, &minima) {
            return;
        }

        let indices2 = self.second.find_indices(object);
        if self.second.find_minimum(&indices2) > 0 {
            self.second.decrement(&indices2, 1);
        }
    }

    /// Resets both filters.
    pub fn clear(&mut self) {
        self.first.clear();
        self.second.clear();
    }
}

/// Whether the minimum over an item's cells recurs. A single minimum among
/// two or more distinct cells is unique; all digests collapsing to one cell
/// trivially recurs.
fn recurring(indices: &[usize], minima: &[usize]) -> bool {
    minima.len() > 1 || indices.len() == 1
}
