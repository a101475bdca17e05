// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::SolverError;
use crate::input::{InputRecord, Keys};
use num_bigint::BigInt;
use polyroot_polynomial::Polynomial;
use tracing::{debug, info, warn};

/// The chosen roots and the polynomial built from them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub n: u64,
    pub k: u64,
    /// `m = k - 1`
    pub degree: usize,
    /// The first `degree` roots in index order
    pub roots: Vec<BigInt>,
    pub polynomial: Polynomial,
}

/// Parses every entry with an index in `1..=n`, lowest index first.
///
/// Absent indices are skipped. The first entry that is malformed or fails to
/// parse aborts the whole collection.
pub fn collect_roots(record: &InputRecord) -> Result<Vec<BigInt>, SolverError> {
    let mut roots = Vec::new();
    for (index, entry) in record.indexed_entries() {
        let entry = entry?;
        let root = entry
            .parse()
            .map_err(|source| SolverError::Root { index, source })?;
        debug!(index, base = entry.base, value = %entry.value, root = %root, "Parsed root");
        roots.push(root);
    }

    let missing = record.keys.n.saturating_sub(roots.len() as u64);
    if missing > 0 {
        warn!(n = record.keys.n, missing, "Input record has absent entries");
    }

    Ok(roots)
}

/// Builds the monic polynomial of degree `k - 1` from the first `k - 1` roots.
///
/// # Errors
///
/// `InvalidThreshold` when `k` is 0, any error from [`collect_roots`], and
/// `InsufficientRoots` when fewer than `k - 1` roots were parsed. All checks
/// happen before any coefficient is computed.
pub fn solve(record: &InputRecord) -> Result<Solution, SolverError> {
    let Keys { n, k } = record.keys;
    let degree = k
        .checked_sub(1)
        .and_then(|m| usize::try_from(m).ok())
        .ok_or(SolverError::InvalidThreshold { k })?;

    let mut roots = collect_roots(record)?;
    if roots.len() < degree {
        return Err(SolverError::InsufficientRoots {
            required: degree,
            available: roots.len(),
        });
    }
    roots.truncate(degree);

    info!(n, k, degree, "Building polynomial from the first {degree} roots");
    let polynomial = Polynomial::from_roots(&roots);

    Ok(Solution {
        n,
        k,
        degree,
        roots,
        polynomial,
    })
}

/// Checks that the polynomial evaluates to exactly zero at every chosen root.
pub fn verify(solution: &Solution) -> Result<(), SolverError> {
    if let Some(root) = solution
        .roots
        .iter()
        .find(|root| !solution.polynomial.vanishes_at(root))
    {
        return Err(SolverError::VerificationFailed { root: root.clone() });
    }
    info!(roots = solution.roots.len(), "Every chosen root verified");
    Ok(())
}
