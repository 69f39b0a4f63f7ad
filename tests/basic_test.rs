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

use multibloom::basic::BasicFilter;
use multibloom::hash::make_hasher;

#[test]
fn test_add_and_lookup_mixed_types() {
    let mut filter = BasicFilter::with_rate(0.001, 100, 42, true, false).unwrap();

    filter.add("foo");
    filter.add("bar");
    filter.add("baz");
    filter.add('c');
    filter.add(4.2f64);
    filter.add(4711u64);

    assert_eq!(filter.lookup("foo"), 1);
    assert_eq!(filter.lookup("bar"), 1);
    assert_eq!(filter.lookup("baz"), 1);
    assert_eq!(filter.lookup('c'), 1);
    assert_eq!(filter.lookup(4.2f64), 1);
    assert_eq!(filter.lookup(4711u64), 1);

    assert_eq!(filter.lookup("qux"), 0);
    assert_eq!(filter.lookup("graunt"), 0);
    assert_eq!(filter.lookup(3.1415f64), 0);
}

#[test]
fn test_empty_filter_contains_nothing() {
    let hasher = make_hasher(3, 7, false).unwrap();
    let filter = BasicFilter::new(hasher, 64, false).unwrap();
    assert_eq!(filter.lookup("anything"), 0);
    assert_eq!(filter.lookup(0u64), 0);
}

#[test]
fn test_remove_sole_item() {
    let hasher = make_hasher(3, 7, false).unwrap();
    let mut filter = BasicFilter::new(hasher, 64, false).unwrap();
    filter.add("foo");
    assert_eq!(filter.lookup("foo"), 1);
    filter.remove("foo");
    assert_eq!(filter.lookup("foo"), 0);
}

#[test]
fn test_clear_is_idempotent() {
    let hasher = make_hasher(3, 7, false).unwrap();
    let mut filter = BasicFilter::new(hasher, 64, false).unwrap();
    filter.add("foo");
    filter.add("bar");
    filter.clear();
    assert_eq!(filter.lookup("foo"), 0);
    assert_eq!(filter.lookup("bar"), 0);
    filter.clear();
    assert_eq!(filter.lookup("foo"), 0);
}

#[test]
fn test_swap_exchanges_state() {
    let mut left = BasicFilter::with_rate(0.0001, 100, 1, false, false).unwrap();
    let mut right = BasicFilter::with_rate(0.0001, 100, 2, false, false).unwrap();
    left.add("foo");
    right.add("bar");

    left.swap(&mut right);
    assert_eq!(left.lookup("bar"), 1);
    assert_eq!(left.lookup("foo"), 0);
    assert_eq!(right.lookup("foo"), 1);
    assert_eq!(right.lookup("bar"), 0);
}

#[test]
fn test_partitioned_filter() {
    let hasher = make_hasher(3, 7, false).unwrap();
    let mut filter = BasicFilter::new(hasher, 300, true).unwrap();
    for item in ["alpha", "beta", "gamma", "delta"] {
        filter.add(item);
    }
    for item in ["alpha", "beta", "gamma", "delta"] {
        assert_eq!(filter.lookup(item), 1);
    }
}

#[test]
fn test_double_hashing_filter() {
    let hasher = make_hasher(5, 7, true).unwrap();
    let mut filter = BasicFilter::new(hasher, 1024, false).unwrap();
    filter.add("epsilon");
    assert_eq!(filter.lookup("epsilon"), 1);
}

#[test]
fn test_optimal_geometry() {
    // Loose bound: fp 0.8 at capacity 10 needs almost nothing.
    assert_eq!(BasicFilter::optimal_cells(0.8, 10), 5);
    assert_eq!(BasicFilter::optimal_k(5, 10), 1);

    // fp 0.01 at capacity 1000 needs roughly 9.6 bits per item.
    let cells = BasicFilter::optimal_cells(0.01, 1000);
    assert!(cells > 9000 && cells < 10000);
    assert_eq!(BasicFilter::optimal_k(cells, 1000), 7);
}

#[test]
fn test_invalid_geometry() {
    assert!(BasicFilter::new(make_hasher(3, 0, false).unwrap(), 0, false).is_err());
    // 10 cells do not divide evenly among 3 hash functions.
    assert!(BasicFilter::new(make_hasher(3, 0, false).unwrap(), 10, true).is_err());
    assert!(make_hasher(0, 0, false).is_err());
    assert!(BasicFilter::with_rate(0.0, 100, 0, true, false).is_err());
    assert!(BasicFilter::with_rate(1.0, 100, 0, true, false).is_err());
    assert!(BasicFilter::with_rate(0.1, 0, 0, true, false).is_err());
}

#[test]
fn test_parametric_partitioned_cells_divide() {
    // The parametric constructor must round the cell count up to a multiple
    // of k when partitioning.
    let filter = BasicFilter::with_rate(0.01, 1000, 0, true, true).unwrap();
    assert_eq!(filter.size() % 7, 0);
}
