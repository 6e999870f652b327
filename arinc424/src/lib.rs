// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

//! Zero-copy parser of ARINC 424 navigation database records.
//!
//! A [record] is a line of 132 bytes. Parsing it borrows those bytes and
//! splits them into [fields] at their fixed columns. Most fields stay
//! borrowed until they are read, e.g. numbers are parsed when one of the
//! `as_*` methods is called. Fields with a small set of values are parsed
//! into enums right away.
//!
//! # Examples
//!
//! Reading a leg of the ABQ1 departure from Albuquerque:
//!
//! ```
//! use arinc424::fields::PathTerm;
//! use arinc424::records::Procedure;
//!
//! # fn main() -> Result<(), arinc424::Error> {
//! let data = b"SUSAP KABQK2DABQ1  5RW08  010ALISSK2PC1E  FR   CF ABQ K2      0800012007940050D   + 07000          210               -     123492313";
//! let leg = Procedure::try_from(data.as_slice())?;
//!
//! assert_eq!(leg.procedure_ident.as_str(), "ABQ1");
//! assert_eq!(leg.path_term, PathTerm::CF);
//! assert_eq!(leg.fix_ident.map(|fix| fix.as_str()), Some("ALISS"));
//! #     Ok(())
//! # }
//! ```
//!
//! A whole database, like the FAA's Coded Instrument Flight Procedures
//! (CIFP), is read with the [`Records`] iterator. It yields the kind of each
//! primary record, so that only the records of interest are parsed:
//!
//! ```no_run
//! # use arinc424::records::{RecordKind, Records, VhfNavaid};
//! # fn main() -> Result<(), arinc424::Error> {
//! let data = std::fs::read("FAACIFP18").expect("file should be readable");
//!
//! for (kind, bytes) in Records::new(&data) {
//!     if kind == RecordKind::VhfNavaid {
//!         let navaid = VhfNavaid::try_from(bytes)?;
//!         println!("{} {}", navaid.vor_ident, navaid.vor_name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Continuation records are skipped. Columns with a constant content are
//! checked while parsing and a mismatch fails with [`Error::InvalidLiteral`].
//!
//! [record]: crate::records
//! [fields]: crate::fields
//! [`Records`]: crate::records::Records

#[macro_use]
mod macros;

mod error;
mod field;
mod record;

pub mod fields;
pub mod records;

pub use error::Error;
pub use field::{Alphanumeric, Numeric};

pub(crate) use arinc424_derive::Record;
pub(crate) use field::FixedField;
