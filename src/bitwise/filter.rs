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
use crate::hash::Hasher;
use crate::hash::Lcg;
use crate::object::Object;
use crate::object::Wrap;

/// Levels never shrink below this many cells.
const MIN_LEVEL_CELLS: usize = 128;

/// The bitwise Bloom filter: one basic filter per bit-plane of the count.
///
/// See the [module documentation](crate::bitwise).
#[derive(Debug, Clone)]
pub struct BitwiseFilter {
    k: usize,
    cells: usize,
    seed: u64,
    levels: Vec<BasicFilter>,
}

impl BitwiseFilter {
    /// Creates a bitwise filter whose first level has `cells` cells; level
    /// *l* has `max(cells/(2l), 128)` cells. Each level uses `k` hash
    /// functions with a seed drawn from a linear-congruential sequence over
    /// `seed`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidGeometry` error if `k` or `cells` is zero.
    pub fn new(k: usize, cells: usize, seed: u64) -> Result<Self, Error> {
        if k == 0 {
            return Err(Error::invalid_geometry(
                "bitwise filter needs at least one hash function",
            ));
        }
        if cells == 0 {
            return Err(Error::invalid_geometry(
                "bitwise filter needs at least one cell",
            ));
        }
        let mut filter = BitwiseFilter {
            k,
            cells,
            seed,
            levels: Vec::new(),
        };
        filter.grow();
        Ok(filter)
    }

    /// Adds an item, incrementing its positional count by 1.
    ///
    /// Ripple-carry: every level that already contains the item has it
    /// removed and the carry moves to the next level, growing the level list
    /// when the carry runs off the top.
    pub fn add<T: Wrap>(&mut self, item: T) {
        self.add_object(&item.wrap());
    }

    /// Adds a wrapped object.
    pub fn add_object(&mut self, object: &Object) {
        let mut level = 0;
        while level < self.levels.len() {
            if self.levels[level].lookup_object(object) > 0 {
                self.levels[level].remove_object(object);
                level += 1;
            } else {
                self.levels[level].add_object(object);
                return;
            }
        }
        self.grow();
        let top = self.levels.len() - 1;
        self.levels[top].add_object(object);
    }

    /// Returns the positional count of an item: bit *l* of the result is the
    /// membership answer of level *l*.
    pub fn lookup<T: Wrap>(&self, item: T) -> u64 {
        self.lookup_object(&item.wrap())
    }

    /// Looks a wrapped object up.
    pub fn lookup_object(&self, object: &Object) -> u64 {
        let mut value = 0;
        for (level, filter) in self.levels.iter().enumerate() {
            value |= filter.lookup_object(object) << level;
        }
        value
    }

    /// Removes an item, decrementing its positional count by 1.
    ///
    /// Ripple-borrow: the lowest level containing the item loses it, and
    /// every level below gains it. Removing an item whose count is zero
    /// leaves its count at zero.
    pub fn remove<T: Wrap>(&mut self, item: T) {
        self.remove_object(&item.wrap());
    }

    /// Removes a wrapped object.
    pub fn remove_object(&mut self, object: &Object) {
        let mut level = 0;
        while level < self.levels.len() {
            if self.levels[level].lookup_object(object) > 0 {
                self.levels[level].remove_object(object);
                return;
            }
            self.levels[level].add_object(object);
            level += 1;
        }
        // The count was zero: undo the borrow chain.
        for filter in &mut self.levels {
            filter.remove_object(object);
        }
    }

    /// Drops all levels but the first and clears it.
    pub fn clear(&mut self) {
        self.levels.truncate(1);
        self.levels[0].clear();
    }

    /// The current number of levels.
    pub fn levels(&self) -> usize {
        self.levels.len()
    }

    /// Appends a new level with its own seed and geometrically shrunk cell
    /// count.
    fn grow(&mut self) {
        let level = self.levels.len();
        let cells = if level == 0 {
            self.cells
        } else {
            (self.cells / (2 * level)).max(MIN_LEVEL_CELLS)
        };

        let mut prng = Lcg::new(self.seed);
        let mut seed = self.seed;
        for _ in 0..level {
            seed = prng.next();
        }

        let hasher = Hasher::k_independent(self.k, seed);
        self.levels.push(BasicFilter::with_validated(hasher, cells, false));
    }
}
