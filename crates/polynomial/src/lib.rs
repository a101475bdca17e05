// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! Univariate polynomials with big integer coefficients, built up from their
//! roots.
//!
//! ## Features
//!
//! - Uses `num-bigint` for coefficient representation, so no step ever loses precision.
//! - Monic construction: `(x - r_1)(x - r_2)...(x - r_m)` by repeated multiplication with linear factors.
//! - Exact evaluation with Horner's method, used to check that every root vanishes.
//! - Serialization: Optional serde support with bincode integration.
//!
//! ## Coefficient Order
//!
//! Coefficients are stored in ascending order: index `i` holds the coefficient
//! of `x^i`. Use [`Polynomial::to_descending_coefficients`] for the
//! conventional leading-term-first listing.

pub mod polynomial;

pub use polynomial::Polynomial;
