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

use bit_vec::BitVec;

use crate::error::Error;

/// A contiguous array of fixed-width saturating counters packed into a bit
/// vector.
///
/// See the [module documentation](crate::counter) for the layout and the
/// saturation rules.
#[derive(Debug, Clone)]
pub struct CounterVector {
    bits: BitVec,
    width: usize,
}

impl CounterVector {
    /// Creates `cells` zeroed counters of `width` bits each.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidGeometry` error if `cells` is zero or `width` is
    /// zero or larger than 64 bits.
    pub fn new(cells: usize, width: usize) -> Result<Self, Error> {
        if cells == 0 {
            return Err(Error::invalid_geometry(
                "counter vector needs at least one cell",
            ));
        }
        if width == 0 || width > 64 {
            return Err(
                Error::invalid_geometry("counter width must be between 1 and 64 bits")
                    .with_context("width", width),
            );
        }
        Ok(CounterVector {
            bits: BitVec::from_elem(cells * width, false),
            width,
        })
    }

    /// The number of cells.
    pub fn size(&self) -> usize {
        self.bits.len() / self.width
    }

    /// The number of bits per cell.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The largest representable counter value, `2^width − 1`.
    pub fn max(&self) -> u64 {
        u64::MAX >> (64 - self.width)
    }

    /// Adds 1 to a cell, clamping at [`max()`](Self::max).
    ///
    /// Returns `false` iff the counter was already saturated.
    pub fn increment(&mut self, cell: usize) -> bool {
        self.increment_by(cell, 1)
    }

    /// Adds `value` to a cell, clamping at [`max()`](Self::max).
    ///
    /// Returns `false` iff the counter was already saturated before the
    /// call; an addition that merely overflows past the ceiling clamps and
    /// still reports success.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds or `value` is zero.
    pub fn increment_by(&mut self, cell: usize, value: u64) -> bool {
        assert!(cell < self.size(), "cell index out of bounds");
        assert!(value > 0, "increment value must be positive");
        let lsb = cell * self.width;

        // A jump to or past the ceiling saturates without arithmetic.
        if value >= self.max() {
            let mut was_saturated = true;
            for i in 0..self.width {
                if !self.bits[lsb + i] {
                    was_saturated = false;
                    self.bits.set(lsb + i, true);
                }
            }
            return !was_saturated;
        }

        // Ripple-carry addition over the cell's bits, least significant
        // first. `value < max` always fits in `width` bits.
        let mut was_saturated = true;
        let mut carry = false;
        for i in 0..self.width {
            let b1 = self.bits[lsb + i];
            let b2 = (value >> i) & 1 == 1;
            if !b1 {
                was_saturated = false;
            }
            self.bits.set(lsb + i, b1 ^ b2 ^ carry);
            carry = if carry { b1 || b2 } else { b1 && b2 };
        }
        if carry {
            // Overflow past the ceiling clamps to all ones.
            for i in 0..self.width {
                self.bits.set(lsb + i, true);
            }
        }
        !was_saturated
    }

    /// Subtracts 1 from a cell, clamping at zero.
    ///
    /// Returns `false` iff the counter was already zero.
    pub fn decrement(&mut self, cell: usize) -> bool {
        self.decrement_by(cell, 1)
    }

    /// Subtracts `value` from a cell, clamping at zero.
    ///
    /// Returns `false` iff the counter was already zero before the call; a
    /// subtraction that merely underflows past zero clamps and still reports
    /// success.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds or `value` is zero.
    pub fn decrement_by(&mut self, cell: usize, value: u64) -> bool {
        assert!(cell < self.size(), "cell index out of bounds");
        assert!(value > 0, "decrement value must be positive");
        let lsb = cell * self.width;

        let mut was_zero = true;
        for i in 0..self.width {
            if self.bits[lsb + i] {
                was_zero = false;
                break;
            }
        }
        if was_zero {
            return false;
        }

        // A subtrahend at or past the ceiling cannot leave anything behind.
        if value >= self.max() {
            for i in 0..self.width {
                self.bits.set(lsb + i, false);
            }
            return true;
        }

        // Ripple-borrow subtraction, least significant bit first.
        let mut borrow = false;
        for i in 0..self.width {
            let b1 = self.bits[lsb + i];
            let b2 = (value >> i) & 1 == 1;
            self.bits.set(lsb + i, b1 ^ b2 ^ borrow);
            borrow = (!b1 && (b2 || borrow)) || (b1 && b2 && borrow);
        }
        if borrow {
            // Underflow past zero clamps to all zeros.
            for i in 0..self.width {
                self.bits.set(lsb + i, false);
            }
        }
        true
    }

    /// Reads the counter of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    pub fn count(&self, cell: usize) -> u64 {
        assert!(cell < self.size(), "cell index out of bounds");
        let lsb = cell * self.width;
        let mut value = 0u64;
        for i in 0..self.width {
            if self.bits[lsb + i] {
                value |= 1 << i;
            }
        }
        value
    }

    /// Overwrites the counter of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds or `value` exceeds
    /// [`max()`](Self::max).
    pub fn set(&mut self, cell: usize, value: u64) {
        assert!(cell < self.size(), "cell index out of bounds");
        assert!(value <= self.max(), "value exceeds the counter ceiling");
        let lsb = cell * self.width;
        for i in 0..self.width {
            self.bits.set(lsb + i, (value >> i) & 1 == 1);
        }
    }

    /// Resets every counter to zero.
    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Counter-wise saturating addition of `other` into `self`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidGeometry` error if the operands differ in cell
    /// count or width; `self` is unchanged in that case.
    pub fn merge(&mut self, other: &CounterVector) -> Result<(), Error> {
        if self.size() != other.size() || self.width != other.width {
            return Err(Error::invalid_geometry(
                "cannot merge counter vectors of different geometry",
            )
            .with_context("cells", self.size())
            .with_context("other_cells", other.size())
            .with_context("width", self.width)
            .with_context("other_width", other.width));
        }
        for cell in 0..self.size() {
            let value = other.count(cell);
            if value > 0 {
                self.increment_by(cell, value);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_geometry() {
        assert!(CounterVector::new(0, 4).is_err());
        assert!(CounterVector::new(4, 0).is_err());
        assert!(CounterVector::new(4, 65).is_err());
        assert!(CounterVector::new(1, 64).is_ok());
    }

    #[test]
    fn test_width_two_saturation() {
        let mut counters = CounterVector::new(3, 2).unwrap();

        assert!(counters.increment(0));
        assert_eq!(counters.count(0), 1);
        assert!(counters.increment(0));
        assert_eq!(counters.count(0), 2);
        assert!(counters.increment(0));
        assert_eq!(counters.count(0), 3);

        // Saturated: the failed increment leaves the counter untouched.
        assert!(!counters.increment(0));
        assert_eq!(counters.count(0), 3);

        assert!(counters.increment(1));
        assert_eq!(counters.count(1), 1);
        assert!(counters.increment(2));
        assert_eq!(counters.count(2), 1);
        assert_eq!(counters.count(0), 3);
    }

    #[test]
    fn test_set_then_decrement() {
        let mut counters = CounterVector::new(4, 3).unwrap();
        counters.set(1, 7);
        assert!(counters.decrement_by(1, 3));
        assert_eq!(counters.count(1), 4);
    }

    #[test]
    fn test_multi_bit_increment_carry() {
        let mut counters = CounterVector::new(2, 3).unwrap();

        assert!(counters.increment_by(0, 3));
        assert_eq!(counters.count(0), 3);
        assert!(counters.increment_by(0, 1));
        assert_eq!(counters.count(0), 4);
        assert!(counters.increment_by(0, 1));
        assert_eq!(counters.count(0), 5);

        // Overflow from a non-saturated counter clamps but succeeds.
        assert!(counters.increment_by(0, 3));
        assert_eq!(counters.count(0), 7);
        assert!(!counters.increment_by(0, 1));
        assert!(!counters.increment_by(0, 42));

        assert!(counters.increment_by(1, 4));
        assert_eq!(counters.count(1), 4);
        assert!(counters.increment_by(1, 3));
        assert_eq!(counters.count(1), 7);
    }

    #[test]
    fn test_jump_to_ceiling() {
        let mut counters = CounterVector::new(2, 3).unwrap();
        assert!(counters.increment_by(0, 9));
        assert_eq!(counters.count(0), 7);
        assert!(!counters.increment_by(0, 9));
    }

    #[test]
    fn test_decrement_clamps_at_zero() {
        let mut counters = CounterVector::new(2, 3).unwrap();
        assert!(!counters.decrement(0));

        counters.set(0, 2);
        assert!(counters.decrement_by(0, 5));
        assert_eq!(counters.count(0), 0);
        assert!(!counters.decrement(0));
    }

    #[test]
    fn test_width_one_degenerates_to_bit_vector() {
        let mut bits = CounterVector::new(4, 1).unwrap();
        assert_eq!(bits.max(), 1);

        assert!(bits.increment(2));
        assert_eq!(bits.count(2), 1);
        assert!(!bits.increment(2)); // 1 + 1 stays 1
        assert_eq!(bits.count(2), 1);

        assert!(bits.decrement(2));
        assert_eq!(bits.count(2), 0);
        assert!(!bits.decrement(2)); // 0 - 1 stays 0
    }

    #[test]
    fn test_round_trip() {
        let mut counters = CounterVector::new(8, 5).unwrap();
        for value in 0..=counters.max() {
            counters.set(3, value);
            assert_eq!(counters.count(3), value);
        }
        // Neighbors were never touched.
        assert_eq!(counters.count(2), 0);
        assert_eq!(counters.count(4), 0);
    }

    #[test]
    fn test_clear() {
        let mut counters = CounterVector::new(3, 4).unwrap();
        counters.set(0, 9);
        counters.set(2, 15);
        counters.clear();
        for cell in 0..counters.size() {
            assert_eq!(counters.count(cell), 0);
        }
        // Clearing twice is the same as clearing once.
        counters.clear();
        assert_eq!(counters.count(0), 0);
    }

    #[test]
    fn test_merge_saturating_addition() {
        let mut a = CounterVector::new(5, 2).unwrap();
        let mut b = CounterVector::new(5, 2).unwrap();

        a.increment(0);
        a.increment(1);
        a.increment_by(2, 2);
        b.increment(1);
        b.increment(2);
        b.increment_by(3, 3);

        a.merge(&b).unwrap();
        assert_eq!(a.count(0), 1);
        assert_eq!(a.count(1), 2);
        assert_eq!(a.count(2), 3);
        assert_eq!(a.count(3), 3);
        assert_eq!(a.count(4), 0);
    }

    #[test]
    fn test_merge_geometry_mismatch() {
        let mut a = CounterVector::new(5, 2).unwrap();
        let b = CounterVector::new(4, 2).unwrap();
        let c = CounterVector::new(5, 3).unwrap();
        assert!(a.merge(&b).is_err());
        assert!(a.merge(&c).is_err());
        // A failed merge leaves the target untouched.
        assert_eq!(a.count(0), 0);
    }

    #[test]
    fn test_width_sixty_four() {
        let mut counters = CounterVector::new(1, 64).unwrap();
        assert_eq!(counters.max(), u64::MAX);
        counters.set(0, u64::MAX - 1);
        assert!(counters.increment(0));
        assert_eq!(counters.count(0), u64::MAX);
        assert!(!counters.increment(0));
    }

    #[test]
    #[should_panic(expected = "cell index out of bounds")]
    fn test_out_of_bounds() {
        let mut counters = CounterVector::new(3, 2).unwrap();
        counters.increment(3);
    }

    #[test]
    #[should_panic(expected = "value exceeds the counter ceiling")]
    fn test_set_over_max() {
        let mut counters = CounterVector::new(3, 2).unwrap();
        counters.set(0, 4);
    }
}
