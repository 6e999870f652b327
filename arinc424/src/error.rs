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

use std::error;
use std::fmt;

/// Errors raised while parsing a record or reading one of its fields.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    /// The record is not 132 bytes long.
    InvalidRecordLength { actual: usize },
    /// The record ended before the field.
    InvalidFieldLength { expected: usize, actual: usize },
    InvalidCharacter {
        field: &'static str,
        byte: u8,
        expected: &'static str,
    },
    InvalidVariant {
        field: &'static str,
        bytes: Vec<u8>,
        expected: &'static str,
    },
    NotANumber { bytes: Vec<u8> },
    /// A column of constant content differs.
    InvalidLiteral {
        column: usize,
        expected: &'static str,
        actual: Vec<u8>,
    },
}

impl Error {
    /// Returns the name of the field that failed, if known.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidCharacter { field, .. } | Self::InvalidVariant { field, .. } => {
                Some(*field)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRecordLength { actual } => {
                write!(f, "record is {actual} bytes long instead of 132")
            }
            Self::InvalidFieldLength { expected, actual } => {
                write!(f, "field needs {expected} bytes but only {actual} are left")
            }
            Self::InvalidCharacter {
                field,
                byte,
                expected,
            } => write!(f, "{field} can't be '{}', expected {expected}", *byte as char),
            Self::InvalidVariant {
                field,
                bytes,
                expected,
            } => write!(
                f,
                "{field} can't be \"{}\", expected {expected}",
                String::from_utf8_lossy(bytes)
            ),
            Self::NotANumber { bytes } => {
                write!(f, "\"{}\" is not a number", String::from_utf8_lossy(bytes))
            }
            Self::InvalidLiteral {
                column,
                expected,
                actual,
            } => write!(
                f,
                "column {column} is \"{}\" instead of \"{expected}\"",
                String::from_utf8_lossy(actual)
            ),
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_field() {
        let error = Error::InvalidCharacter {
            field: "Latitude",
            byte: b'X',
            expected: "N or S",
        };
        assert_eq!(error.field(), Some("Latitude"));
        assert_eq!(error.to_string(), "Latitude can't be 'X', expected N or S");

        let error = Error::NotANumber {
            bytes: b"1A".to_vec(),
        };
        assert_eq!(error.field(), None);
        assert_eq!(error.to_string(), "\"1A\" is not a number");
    }
}
