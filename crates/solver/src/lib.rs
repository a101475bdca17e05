// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Solver
//!
//! Reads an input record of indexed roots, parses each root from its base,
//! keeps the first `m = k - 1` of them in index order and builds the monic
//! polynomial of degree `m` that has exactly those roots.

mod errors;
pub mod input;
pub mod report;
pub mod solver;

pub use errors::SolverError;
pub use input::{InputRecord, Keys, RootEntry};
pub use report::Report;
pub use solver::{collect_roots, solve, verify, Solution};
