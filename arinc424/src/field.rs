// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use crate::Error;

/// A field of a fixed number of bytes.
///
/// Fields borrow the bytes of their record. Fields that are parsed into a
/// value on creation, like enums, don't.
pub trait FixedField<'a>: Sized {
    /// The number of bytes the field spans.
    const LENGTH: usize;

    /// Creates the field from the first [`LENGTH`](FixedField::LENGTH) bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer bytes or the bytes are not valid
    /// for this field.
    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error>;
}

/// Borrows the first `N` bytes as array.
fn leading<const N: usize>(bytes: &[u8]) -> Result<&[u8; N], Error> {
    bytes
        .get(..N)
        .and_then(|leading| leading.try_into().ok())
        .ok_or(Error::InvalidFieldLength {
            expected: N,
            actual: bytes.len(),
        })
}

/// An alphanumeric field, left-justified and padded with blanks.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Alphanumeric<'a, const N: usize>(pub(super) &'a [u8; N]);

impl<'a, const N: usize> Alphanumeric<'a, N> {
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Returns the field without the trailing blanks.
    ///
    /// Returns an empty string if the field is not valid UTF-8.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        std::str::from_utf8(self.0).unwrap_or_default().trim_end()
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&b| b == b' ')
    }

    #[inline]
    pub fn first(&self) -> u8 {
        self.0[0]
    }
}

impl<'a, const N: usize> FixedField<'a> for Alphanumeric<'a, N> {
    const LENGTH: usize = N;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        leading(bytes).map(Self)
    }
}

impl<const N: usize> fmt::Debug for Alphanumeric<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl<const N: usize> fmt::Display for Alphanumeric<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> From<Alphanumeric<'_, N>> for String {
    fn from(a: Alphanumeric<'_, N>) -> Self {
        a.as_str().to_owned()
    }
}

/// A numeric field, right-justified and padded with zeros.
///
/// The digits are parsed on access with the method matching the field
/// length, e.g. a field of two digits can't be read as `u32`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Numeric<'a, const N: usize>(&'a [u8; N]);

macro_rules! numeric_impl {
    ($($n:tt => $($method:ident : $t:ty),+;)+) => {
        $(
            impl<'a> Numeric<'a, $n> {
                $(
                    #[inline]
                    pub fn $method(&self) -> Result<$t, Error> {
                        parse_numeric!($n, $t, self.0)
                    }
                )+
            }
        )+
    };
}

numeric_impl! {
    1 => as_u8: u8;
    2 => as_u8: u8, as_u16: u16;
    3 => as_u8: u8, as_u16: u16, as_u32: u32;
    4 => as_u16: u16, as_u32: u32;
    5 => as_u32: u32;
    6 => as_u32: u32;
}

impl<'a, const N: usize> Numeric<'a, N> {
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&b| b == b' ')
    }
}

impl<'a, const N: usize> FixedField<'a> for Numeric<'a, N> {
    const LENGTH: usize = N;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        leading(bytes).map(Self)
    }
}

impl<const N: usize> fmt::Debug for Numeric<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.0))
    }
}

/// A field that is blank if the value is unknown or not applicable.
impl<'a, T> FixedField<'a> for Option<T>
where
    T: FixedField<'a>,
{
    const LENGTH: usize = T::LENGTH;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        match bytes.get(..T::LENGTH) {
            Some(field) if field.iter().all(|&b| b == b' ') => Ok(None),
            _ => T::from_bytes(bytes).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrows_leading_bytes() {
        let ident = Alphanumeric::<4>::from_bytes(b"ABQ VORTAC").expect("ident should be read");
        assert_eq!(ident.as_str(), "ABQ");
        assert_eq!(ident.to_string(), "ABQ");
        assert!(!ident.is_blank());

        assert_eq!(
            Alphanumeric::<4>::from_bytes(b"AB"),
            Err(Error::InvalidFieldLength {
                expected: 4,
                actual: 2
            })
        );
    }

    #[test]
    fn parses_numbers_on_access() {
        let number = Numeric::<3>::from_bytes(b"0794").expect("number should be read");
        assert_eq!(number.as_u16(), Ok(79));

        let blank = Numeric::<3>::from_bytes(b"   ").expect("blank should be read");
        assert!(blank.is_blank());
        assert!(matches!(blank.as_u16(), Err(Error::NotANumber { .. })));
    }

    #[test]
    fn blank_optional_field_is_none() {
        let blank: Option<Numeric<3>> = FixedField::from_bytes(b"   1").expect("should read");
        assert_eq!(blank, None);

        let value: Option<Numeric<3>> = FixedField::from_bytes(b"045").expect("should read");
        assert_eq!(value.map(|v| v.as_u16()), Some(Ok(45)));
    }
}
