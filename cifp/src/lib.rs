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

//! Decoder of Coded Instrument Flight Procedures (CIFP) and a guidance
//! engine to fly them.
//!
//! The navigation database is loaded from ARINC 424 records in two phases:
//! The records of each kind are decoded independently before airways and
//! procedures are assembled against the index of all fixes.
//!
//! ```no_run
//! # fn main() -> Result<(), cifp::Error> {
//! let data = std::fs::read("FAACIFP18").unwrap_or_default();
//! let cifp = cifp::load(&data)?;
//!
//! if let Some(sid) = cifp.procedure("KABQ", "ABQ1") {
//!     for leg in sid.select_route(Some("RW08"), Some("CNX"))? {
//!         println!("{leg}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod constants;
pub mod error;
pub mod geom;
pub mod guidance;
pub mod nd;
pub mod procedure;
mod vertical_distance;

pub use error::{Error, Result};
pub use nd::{Cifp, LoadOptions};
pub use vertical_distance::VerticalDistance;

/// Loads the navigation database from ARINC 424 records with the default
/// options.
///
/// # Errors
///
/// Fails if any record can't be decoded or any leg can't be resolved.
pub fn load(data: &[u8]) -> Result<Cifp> {
    Cifp::load(data)
}
