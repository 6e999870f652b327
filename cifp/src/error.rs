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

//! Error taxonomy of the navigation database.
//!
//! A load either succeeds with a fully populated [`Cifp`] or fails with the
//! first error encountered. There is no partial success.
//!
//! [`Cifp`]: crate::Cifp

use thiserror::Error;

/// Errors raised while loading or querying the navigation database.
#[derive(Clone, PartialEq, Debug, Error)]
pub enum Error {
    /// A record failed a literal column check or a field failed to parse.
    #[error("invalid record \"{record}\": {error}")]
    Format {
        record: String,
        error: arinc424::Error,
    },

    /// A named fix or navaid could not be found or disambiguated.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// A geometric operation was requested on a value that can't support it.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<arinc424::Error> for Error {
    fn from(error: arinc424::Error) -> Self {
        Self::Format {
            record: String::new(),
            error,
        }
    }
}

impl Error {
    /// Attaches the raw record to a format error.
    pub(crate) fn in_record(self, bytes: &[u8]) -> Self {
        match self {
            Self::Format { error, .. } => Self::Format {
                record: String::from_utf8_lossy(bytes).trim_end().to_string(),
                error,
            },
            e => e,
        }
    }
}

/// Errors of the fix and navaid resolution.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum ResolutionError {
    #[error("no fix or navaid named {0}")]
    UnknownIdent(String),

    #[error("{ident} is ambiguous between {candidates} candidates")]
    Ambiguous { ident: String, candidates: usize },

    #[error("procedure {procedure} has no transition {transition}")]
    UnknownTransition {
        procedure: String,
        transition: String,
    },

    #[error("airway {airway} can't be flown from {from} to {to}")]
    WrongDirection {
        airway: String,
        from: String,
        to: String,
    },
}

/// Errors of geometric operations.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Error)]
pub enum DomainError {
    #[error("magnetic course without variation can't be converted to true")]
    MissingVariation,

    #[error("course doesn't intersect the radial")]
    NoIntersection,

    #[error("leg is missing the geometry to be flown")]
    MissingGeometry,
}

pub type Result<T> = std::result::Result<T, Error>;
