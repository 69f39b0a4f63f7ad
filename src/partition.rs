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

//! Digest-to-cell index computation.
//!
//! Partitioning gives each of the *k* hash functions its own disjoint slice
//! of the cell array, which keeps the computed indices distinct by
//! construction, simplifies spectral analysis, and improves locality.
//! Without partitioning every digest indexes the whole array, so colliding
//! digests must collapse to one index — otherwise counting filters would
//! count the same cell twice for a single insert.

use crate::hash::Digest;

/// Maps `digests` to an ordered sequence of distinct cell indices.
///
/// Unpartitioned: `dᵢ mod cells`, sorted and deduplicated. Partitioned:
/// digest *i* owns the slice `[i·p, (i+1)·p)` with `p = cells / k`, so the
/// indices are ascending and distinct as computed.
///
/// Every filter routes both its mutation and its lookup path through this
/// one function, so an object always maps to the same cells.
///
/// Partitioned mode requires `cells % digests.len() == 0`; filter
/// constructors validate this.
pub(crate) fn cell_indices(digests: &[Digest], cells: usize, partition: bool) -> Vec<usize> {
    if partition {
        debug_assert_eq!(cells % digests.len(), 0);
        let part = cells / digests.len();
        digests
            .iter()
            .enumerate()
            .map(|(i, digest)| i * part + (digest % part as u64) as usize)
            .collect()
    } else {
        let mut indices: Vec<usize> = digests
            .iter()
            .map(|digest| (digest % cells as u64) as usize)
            .collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpartitioned_sorts_and_deduplicates() {
        let indices = cell_indices(&[9, 5, 5, 13], 4, false);
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn test_partitioned_slices_are_disjoint() {
        // Identical digests still land in distinct slices.
        let indices = cell_indices(&[9, 9, 9], 6, true);
        assert_eq!(indices, vec![1, 3, 5]);

        let indices = cell_indices(&[0, 1, 2, 3], 16, true);
        for (i, index) in indices.iter().enumerate() {
            assert!((i * 4..(i + 1) * 4).contains(index));
        }
    }

    #[test]
    fn test_single_digest() {
        assert_eq!(cell_indices(&[7], 5, false), vec![2]);
        assert_eq!(cell_indices(&[7], 5, true), vec![2]);
    }
}
