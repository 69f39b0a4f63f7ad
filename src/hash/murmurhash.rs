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

const C1: u64 = 0x87c37b91114253d5;
const C2: u64 = 0x4cf5ad432745937f;

/// Computes the 128-bit MurmurHash3 (x64 variant) of `bytes` keyed by `seed`.
///
/// The MurmurHash3 is a fast, non-cryptographic hash function with excellent
/// avalanche and 2-way bit independence properties. Filters consume complete
/// byte images, so this is a one-shot function rather than a streaming hasher.
pub(crate) fn murmur3_x64_128(bytes: &[u8], seed: u64) -> (u64, u64) {
    let mut h1 = seed;
    let mut h2 = seed;

    // Process the 128-bit blocks (the body) into the hash.
    let blocks = bytes.len() >> 4; // bytes / 16
    for i in 0..blocks {
        let lo = i << 4;
        let mi = lo + 8;
        let hi = mi + 8;
        let k1 = read_u64_le(&bytes[lo..mi]);
        let k2 = read_u64_le(&bytes[mi..hi]);

        h1 ^= mix_k1(k1);
        h1 = h1.rotate_left(27);
        h1 = h1.wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dce729);

        h2 ^= mix_k2(k2);
        h2 = h2.rotate_left(31);
        h2 = h2.wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x38495ab5);
    }

    // Tail of up to 15 remaining bytes.
    let tail = &bytes[blocks << 4..];
    let rem = tail.len();
    if rem > 0 {
        if rem > 8 {
            let mut buf = [0u8; 8];
            buf[..rem - 8].copy_from_slice(&tail[8..]);
            h2 ^= mix_k2(u64::from_le_bytes(buf));
        }

        let mut buf = [0u8; 8];
        let k1_len = rem.min(8);
        buf[..k1_len].copy_from_slice(&tail[..k1_len]);
        h1 ^= mix_k1(u64::from_le_bytes(buf));
    }

    h1 ^= bytes.len() as u64;
    h2 ^= bytes.len() as u64;
    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);
    h1 = fmix64(h1);
    h2 = fmix64(h2);
    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);
    (h1, h2)
}

#[inline]
fn mix_k1(mut k1: u64) -> u64 {
    k1 = k1.wrapping_mul(C1);
    k1 = k1.rotate_left(31);
    k1.wrapping_mul(C2)
}

#[inline]
fn mix_k2(mut k2: u64) -> u64 {
    k2 = k2.wrapping_mul(C2);
    k2 = k2.rotate_left(33);
    k2.wrapping_mul(C1)
}

/// Finalization mix: force all bits of a hash block to avalanche.
#[inline]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51afd7ed558ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ceb9fe1a85ec53);
    k ^ (k >> 33)
}

#[inline]
fn read_u64_le(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(buf)
}
