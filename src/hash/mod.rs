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

//! Seeded hash functions and the k-fold digest fan-out.
//!
//! Every filter maps an object to *k* cell indices through a [`Hasher`]. A
//! hasher runs in one of two modes:
//!
//! - **k-independent**: *k* distinctly seeded hash functions, one digest
//!   each.
//! - **double hashing**: two hash functions combined as `dᵢ = d₁ + i·d₂`
//!   (Kirsch-Mitzenmacher), which saves `k − 2` hash evaluations at a
//!   provable bound on false-positive rate degradation.
//!
//! Per-function seeds derive from the construction seed through a fixed
//! linear-congruential sequence, so a hasher is fully determined by
//! `(k, seed, mode)`.

mod murmurhash;

use crate::error::Error;
use crate::object::Object;

/// A digest produced by a hash function.
pub type Digest = u64;

/// Minimal-standard Lehmer generator used to derive seeds, level seeds, and
/// nothing else. Not a general-purpose RNG.
#[derive(Debug, Clone)]
pub(crate) struct Lcg {
    state: u64,
}

impl Lcg {
    const MODULUS: u64 = 2_147_483_647; // 2^31 - 1
    const MULTIPLIER: u64 = 16_807;

    pub(crate) fn new(seed: u64) -> Self {
        let state = seed % Self::MODULUS;
        Lcg {
            state: if state == 0 { 1 } else { state },
        }
    }

    pub(crate) fn next(&mut self) -> u64 {
        self.state = self.state * Self::MULTIPLIER % Self::MODULUS;
        self.state
    }
}

/// A seeded universal hash function over byte sequences.
///
/// Deterministic for a given `(seed, bytes)` pair, uniform over the digest
/// range for unrelated inputs, and avalanching. There is no bound on the
/// input size.
#[derive(Debug, Clone)]
pub struct HashFunction {
    seed: u64,
}

impl HashFunction {
    /// Creates a hash function keyed by `seed`.
    pub fn new(seed: u64) -> Self {
        HashFunction { seed }
    }

    /// Hashes the object's bytes to a digest.
    pub fn digest(&self, object: &Object) -> Digest {
        murmurhash::murmur3_x64_128(object.data(), self.seed).0
    }
}

/// Maps an object to an ordered vector of *k* digests.
///
/// Construct through [`make_hasher`].
#[derive(Debug, Clone)]
pub struct Hasher {
    mode: Mode,
}

#[derive(Debug, Clone)]
enum Mode {
    KIndependent(Vec<HashFunction>),
    Double {
        k: usize,
        h1: HashFunction,
        h2: HashFunction,
    },
}

impl Hasher {
    /// The number of digests produced per object.
    pub fn k(&self) -> usize {
        match &self.mode {
            Mode::KIndependent(functions) => functions.len(),
            Mode::Double { k, .. } => *k,
        }
    }

    /// Computes the digest vector of `object`.
    pub fn digests(&self, object: &Object) -> Vec<Digest> {
        match &self.mode {
            Mode::KIndependent(functions) => {
                functions.iter().map(|f| f.digest(object)).collect()
            }
            Mode::Double { k, h1, h2 } => {
                let d1 = h1.digest(object);
                let d2 = h2.digest(object);
                (0..*k as u64)
                    .map(|i| d1.wrapping_add(i.wrapping_mul(d2)))
                    .collect()
            }
        }
    }

    /// Builds a k-independent hasher. Geometry (`k > 0`) must already be
    /// validated by the caller.
    pub(crate) fn k_independent(k: usize, seed: u64) -> Hasher {
        debug_assert!(k > 0);
        let mut prng = Lcg::new(seed);
        let functions = (0..k).map(|_| HashFunction::new(prng.next())).collect();
        Hasher {
            mode: Mode::KIndependent(functions),
        }
    }

    /// Builds a double-hashing hasher. Geometry (`k > 0`) must already be
    /// validated by the caller.
    pub(crate) fn double(k: usize, seed: u64) -> Hasher {
        debug_assert!(k > 0);
        let mut prng = Lcg::new(seed);
        let h1 = HashFunction::new(prng.next());
        let h2 = HashFunction::new(prng.next());
        Hasher {
            mode: Mode::Double { k, h1, h2 },
        }
    }
}

/// Constructs a hasher producing `k` digests, with per-function seeds drawn
/// from a linear-congruential sequence over `seed`.
///
/// # Errors
///
/// Returns an [`ErrorKind::InvalidGeometry`](crate::error::ErrorKind) error
/// if `k` is zero.
///
/// # Examples
///
/// ```
/// use multibloom::hash::make_hasher;
/// use multibloom::object::Wrap;
///
/// let hasher = make_hasher(3, 42, false).unwrap();
/// assert_eq!(hasher.k(), 3);
/// assert_eq!(hasher.digests(&"foo".wrap()).len(), 3);
/// ```
pub fn make_hasher(k: usize, seed: u64, double_hashing: bool) -> Result<Hasher, Error> {
    if k == 0 {
        return Err(Error::invalid_geometry(
            "hasher needs at least one hash function",
        ));
    }
    if double_hashing {
        Ok(Hasher::double(k, seed))
    } else {
        Ok(Hasher::k_independent(k, seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Wrap;

    #[test]
    fn test_zero_hash_functions() {
        assert!(make_hasher(0, 42, false).is_err());
        assert!(make_hasher(0, 42, true).is_err());
    }

    #[test]
    fn test_deterministic_fan_out() {
        let hasher = make_hasher(4, 7, false).unwrap();
        assert_eq!(hasher.digests(&"foo".wrap()), hasher.digests(&"foo".wrap()));
    }

    #[test]
    fn test_double_hashing_is_linear() {
        let hasher = make_hasher(5, 7, true).unwrap();
        let digests = hasher.digests(&"bar".wrap());
        assert_eq!(digests.len(), 5);
        let step = digests[1].wrapping_sub(digests[0]);
        for window in digests.windows(2) {
            assert_eq!(window[1].wrapping_sub(window[0]), step);
        }
    }

    #[test]
    fn test_seed_sequence_is_stable() {
        let mut a = Lcg::new(42);
        let mut b = Lcg::new(42);
        for _ in 0..8 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        // The Lehmer generator has no zero state; seed 0 must still produce a
        // non-degenerate sequence.
        let mut prng = Lcg::new(0);
        let first = prng.next();
        let second = prng.next();
        assert_ne!(first, 0);
        assert_ne!(first, second);
    }
}
