// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for solving an input record.

use num_bigint::BigInt;
use polyroot_radix::RadixError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run. Nothing is reported once one of these occurs.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Fewer parsed roots than the requested degree
    #[error("Need at least {required} roots (m = k - 1), but got {available}")]
    InsufficientRoots { required: usize, available: usize },

    /// `k` leaves no valid degree
    #[error("k must be at least 1, got {k}")]
    InvalidThreshold { k: u64 },

    /// A root value could not be parsed in its base
    #[error("Root {index} could not be parsed")]
    Root {
        index: u64,
        #[source]
        source: RadixError,
    },

    /// An indexed entry lacks `base`/`value` or has the wrong shape
    #[error("Entry {index} is malformed")]
    MalformedEntry {
        index: u64,
        #[source]
        source: serde_json::Error,
    },

    /// The built polynomial does not vanish at one of its roots
    #[error("Polynomial does not vanish at root {root}")]
    VerificationFailed { root: BigInt },

    /// I/O error
    #[error("Could not read input file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not a valid record
    #[error("Invalid input record")]
    Json(#[from] serde_json::Error),
}
