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
use googletest::prelude::ge;

use multibloom::hash::make_hasher;
use multibloom::spectral::SpectralMiFilter;
use multibloom::spectral::SpectralRmFilter;

fn mi_filter(cells: usize, width: usize) -> SpectralMiFilter {
    SpectralMiFilter::new(make_hasher(3, 42, false).unwrap(), cells, width, false).unwrap()
}

fn rm_filter() -> SpectralRmFilter {
    SpectralRmFilter::new(
        make_hasher(3, 42, false).unwrap(),
        256,
        4,
        make_hasher(3, 4711, false).unwrap(),
        64,
        4,
        false,
    )
    .unwrap()
}

#[test]
fn test_mi_repeated_item_counts_exactly() {
    let mut filter = mi_filter(256, 4);
    filter.add("oh");
    filter.add("oh");
    assert_eq!(filter.lookup("oh"), 2);
}

#[test]
fn test_mi_estimate_is_an_upper_bound() {
    let mut filter = mi_filter(256, 4);
    filter.add("oh");
    filter.add("oh");
    for item in ["my", "god", "becky", "look"] {
        filter.add(item);
    }
    assert_that!(filter.lookup("oh"), ge(2));
    for item in ["my", "god", "becky", "look"] {
        assert_that!(filter.lookup(item), ge(1));
    }
}

#[test]
fn test_mi_increments_stay_below_counting() {
    // Minimum increase can never produce a larger estimate than plain
    // counting over the same geometry and hasher.
    let mut mi = mi_filter(64, 4);
    let mut counting = multibloom::counting::CountingFilter::new(
        make_hasher(3, 42, false).unwrap(),
        64,
        4,
        false,
    )
    .unwrap();
    for i in 0..50u64 {
        mi.add(i % 10);
        counting.add(i % 10);
    }
    for i in 0..10u64 {
        assert!(mi.lookup(i) <= counting.lookup(i));
    }
}

#[test]
fn test_mi_clear() {
    let mut filter = mi_filter(64, 4);
    filter.add("foo");
    filter.clear();
    assert_eq!(filter.lookup("foo"), 0);
}

#[test]
fn test_rm_repeated_item_counts_exactly() {
    let mut filter = rm_filter();
    for _ in 0..3 {
        filter.add("foo");
    }
    assert_eq!(filter.lookup("foo"), 3);
}

#[test]
fn test_rm_every_added_item_is_visible() {
    let mut filter = rm_filter();
    for i in 0..50u64 {
        filter.add(i);
    }
    for i in 0..50u64 {
        assert_that!(filter.lookup(i), ge(1));
    }
}

#[test]
fn test_rm_remove_single_item() {
    let mut filter = rm_filter();
    for _ in 0..3 {
        filter.add("foo");
    }
    filter.remove("foo");
    assert_eq!(filter.lookup("foo"), 2);
    filter.remove("foo");
    filter.remove("foo");
    assert_eq!(filter.lookup("foo"), 0);
}

#[test]
fn test_rm_overflow_into_secondary() {
    // A deliberately tiny primary filter forces unique minima, driving items
    // through the secondary path; every added item must stay visible.
    let mut filter = SpectralRmFilter::new(
        make_hasher(3, 7, false).unwrap(),
        8,
        8,
        make_hasher(3, 4711, false).unwrap(),
        64,
        8,
        false,
    )
    .unwrap();
    for i in 0..30u64 {
        filter.add(i);
        filter.add(i);
    }
    for i in 0..30u64 {
        assert_that!(filter.lookup(i), ge(1));
    }
}

#[test]
fn test_rm_clear() {
    let mut filter = rm_filter();
    filter.add("foo");
    filter.add("bar");
    filter.clear();
    assert_eq!(filter.lookup("foo"), 0);
    assert_eq!(filter.lookup("bar"), 0);
}
