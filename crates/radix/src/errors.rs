// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for base-N parsing.

use thiserror::Error;

/// Errors that can occur while parsing a base-N digit string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RadixError {
    /// The character is not an ASCII alphanumeric digit
    #[error("Invalid digit '{ch}'")]
    InvalidDigit { ch: char },

    /// The base lies outside 2..=36
    #[error("Base {base} not supported (must be 2..36)")]
    BaseUnsupported { base: i64 },

    /// The digit is a valid alphanumeric but too large for the base
    #[error("Digit '{ch}' invalid for base {base}")]
    DigitExceedsBase { ch: char, digit: u32, base: u32 },
}
