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

//! Byte views over hashable input.
//!
//! Every filter operation starts by serializing the caller's value into its
//! raw byte image and wrapping it as an [`Object`]. The [`Wrap`] trait defines
//! that serialization for the built-in scalar, string, and byte-sequence
//! types: fixed-width integers and floats use their native-endian memory
//! image, characters use their `u32` image, and strings and byte sequences
//! contribute their element bytes directly.
//!
//! Objects are non-owning views where possible; they live only for the
//! duration of the filter call that created them.

use std::borrow::Cow;

/// An immutable view over a contiguous byte range.
///
/// # Examples
///
/// ```
/// use multibloom::object::Wrap;
///
/// let object = "foo".wrap();
/// assert_eq!(object.data(), b"foo");
/// assert_eq!(object.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Object<'a> {
    bytes: Cow<'a, [u8]>,
}

impl<'a> Object<'a> {
    /// Creates an object borrowing `bytes`.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Object {
            bytes: Cow::Borrowed(bytes),
        }
    }

    /// Creates an object owning `bytes`, for serializations with no backing
    /// storage to borrow from.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Object {
            bytes: Cow::Owned(bytes),
        }
    }

    /// The viewed bytes.
    pub fn data(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    /// The number of viewed bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Serialization of a value into its raw byte image for hashing.
pub trait Wrap {
    /// Wraps the value as a hashable object.
    fn wrap(&self) -> Object<'_>;
}

macro_rules! impl_wrap_for_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Wrap for $t {
                fn wrap(&self) -> Object<'_> {
                    Object::from_vec(self.to_ne_bytes().to_vec())
                }
            }
        )*
    };
}

impl_wrap_for_scalar!(u8, u16, u32, u64, u128, usize);
impl_wrap_for_scalar!(i8, i16, i32, i64, i128, isize);
impl_wrap_for_scalar!(f32, f64);

impl Wrap for char {
    fn wrap(&self) -> Object<'_> {
        Object::from_vec((*self as u32).to_ne_bytes().to_vec())
    }
}

impl Wrap for bool {
    fn wrap(&self) -> Object<'_> {
        Object::from_vec(vec![*self as u8])
    }
}

impl Wrap for str {
    fn wrap(&self) -> Object<'_> {
        Object::from_slice(self.as_bytes())
    }
}

impl Wrap for String {
    fn wrap(&self) -> Object<'_> {
        Object::from_slice(self.as_bytes())
    }
}

impl Wrap for [u8] {
    fn wrap(&self) -> Object<'_> {
        Object::from_slice(self)
    }
}

impl Wrap for Vec<u8> {
    fn wrap(&self) -> Object<'_> {
        Object::from_slice(self.as_slice())
    }
}

impl<const N: usize> Wrap for [u8; N] {
    fn wrap(&self) -> Object<'_> {
        Object::from_slice(self.as_slice())
    }
}

impl<T: Wrap + ?Sized> Wrap for &T {
    fn wrap(&self) -> Object<'_> {
        (**self).wrap()
    }
}
