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

use googletest::assert_that;
use googletest::prelude::le;

use multibloom::hash::make_hasher;
use multibloom::stable::StableFilter;

const FISH: [&str; 15] = [
    "onefish",
    "twofish",
    "redfish",
    "bluefish",
    "blackfish",
    "bluefish2",
    "oldfish",
    "newfish",
    "starfish",
    "carfish",
    "catfish",
    "swordfish",
    "jellyfish",
    "lungfish",
    "blowfish",
];

fn filter(cells: usize, width: usize, evictions: usize, seed: u64) -> StableFilter {
    StableFilter::new(
        make_hasher(3, 42, false).unwrap(),
        cells,
        width,
        evictions,
        seed,
    )
    .unwrap()
}

#[test]
fn test_fresh_items_answer_with_the_ceiling() {
    let mut filter = filter(64, 2, 2, 7);
    for fish in FISH {
        filter.add(fish);
    }
    // The eviction pass runs before the item's cells are set, so the newest
    // item always reads back at the ceiling.
    assert_eq!(filter.lookup("blowfish"), 3);
}

#[test]
fn test_estimates_never_exceed_the_ceiling() {
    let mut filter = filter(11, 2, 2, 7);
    for fish in FISH {
        filter.add(fish);
    }
    for fish in FISH {
        assert_that!(filter.lookup(fish), le(3));
    }
}

#[test]
fn test_full_eviction_ages_out_the_previous_item() {
    // With every cell decremented per add, a width-1 filter retains only the
    // most recent item.
    let mut filter = filter(128, 1, 128, 7);
    filter.add("onefish");
    filter.add("twofish");
    assert_eq!(filter.lookup("twofish"), 1);
    assert_eq!(filter.lookup("onefish"), 0);
}

#[test]
fn test_eviction_sequence_is_deterministic() {
    let mut left = filter(64, 2, 4, 99);
    let mut right = filter(64, 2, 4, 99);
    for fish in FISH {
        left.add(fish);
        right.add(fish);
    }
    for fish in FISH {
        assert_eq!(left.lookup(fish), right.lookup(fish));
    }
}

#[test]
fn test_clear() {
    let mut filter = filter(64, 2, 2, 7);
    filter.add("onefish");
    filter.clear();
    assert_eq!(filter.lookup("onefish"), 0);
}

#[test]
fn test_invalid_geometry() {
    let hasher = make_hasher(3, 42, false).unwrap();
    assert!(StableFilter::new(hasher.clone(), 8, 2, 9, 0).is_err());
    assert!(StableFilter::new(hasher, 0, 2, 0, 0).is_err());
}
