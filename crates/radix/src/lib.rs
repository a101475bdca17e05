// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Radix
//!
//! Lossless parsing of digit strings written in any base from 2 to 36 into
//! arbitrary precision integers.
//!
//! Digits are the ASCII alphanumerics: `0`-`9` map to 0-9 and `a`-`z` map to
//! 10-35. Letters are case-insensitive. Every step accumulates with
//! `num-bigint`, so values of any length are parsed exactly.

mod errors;
pub mod radix;

pub use errors::RadixError;
pub use radix::{digit_value, parse, Radix, MAX_BASE, MIN_BASE};
