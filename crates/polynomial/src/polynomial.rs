// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomials over the integers, kept exact with `BigInt`.

use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial `c_0 + c_1 x + ... + c_d x^d` over the integers.
///
/// Index `i` of the coefficient vector holds the coefficient of `x^i`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    pub(crate) coefficients: Vec<BigInt>,
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = self
            .coefficients
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, coeff)| !coeff.is_zero())
            .peekable();

        if terms.peek().is_none() {
            return write!(f, "0");
        }

        let mut leading = true;
        for (power, coeff) in terms {
            let negative = coeff.sign() == Sign::Minus;
            match (leading, negative) {
                (true, true) => write!(f, "-")?,
                (true, false) => {}
                (false, true) => write!(f, " - ")?,
                (false, false) => write!(f, " + ")?,
            }
            leading = false;

            let magnitude = coeff.magnitude();
            if power == 0 || !magnitude.is_one() {
                write!(f, "{magnitude}")?;
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{power}")?,
            }
        }
        Ok(())
    }
}

impl Polynomial {
    /// Wraps coefficients given constant term first.
    pub fn new(coefficients: Vec<BigInt>) -> Self {
        Self { coefficients }
    }

    /// Wraps coefficients given leading term first, as they are printed.
    pub fn from_descending_coefficients(mut coefficients: Vec<BigInt>) -> Self {
        coefficients.reverse();
        Self { coefficients }
    }

    /// Coefficients leading term first.
    pub fn to_descending_coefficients(&self) -> Vec<BigInt> {
        self.coefficients.iter().rev().cloned().collect()
    }

    /// `P(x) = 1`, the empty product.
    pub fn one() -> Self {
        Self {
            coefficients: vec![BigInt::one()],
        }
    }

    /// Builds the monic polynomial `(x - r_1)(x - r_2)...(x - r_m)`.
    ///
    /// The roots are multiplied in one at a time with
    /// [`Polynomial::mul_linear`], starting from [`Polynomial::one`]. Repeated
    /// roots are kept with their multiplicity, so the result always has
    /// exactly one more coefficient than there are roots and a leading
    /// coefficient of 1. No roots gives the constant 1.
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// use polyroot_polynomial::Polynomial;
    ///
    /// let roots = [BigInt::from(4), BigInt::from(7)];
    /// let poly = Polynomial::from_roots(&roots);
    /// assert_eq!(poly.to_string(), "x^2 - 11x + 28");
    /// ```
    pub fn from_roots<'a, I>(roots: I) -> Self
    where
        I: IntoIterator<Item = &'a BigInt>,
    {
        roots
            .into_iter()
            .fold(Self::one(), |poly, root| poly.mul_linear(root))
    }

    /// Returns `self * (x - root)`.
    ///
    /// Each coefficient `c_i` contributes `-root * c_i` to `x^i` and `c_i` to
    /// `x^(i + 1)`, so the degree grows by one and the leading coefficient is
    /// carried over unchanged.
    pub fn mul_linear(&self, root: &BigInt) -> Self {
        let mut product = vec![BigInt::zero(); self.coefficients.len() + 1];
        for (i, coeff) in self.coefficients.iter().enumerate() {
            product[i] -= root * coeff;
            product[i + 1] += coeff;
        }
        Self::new(product)
    }

    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// Number of stored coefficients minus one. Trailing zeros are not trimmed.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(Zero::is_zero)
    }

    pub fn leading_coefficient(&self) -> Option<&BigInt> {
        self.coefficients.last()
    }

    pub fn is_monic(&self) -> bool {
        self.leading_coefficient().is_some_and(|coeff| coeff.is_one())
    }

    /// Schoolbook product. An empty operand yields the empty polynomial.
    pub fn mul(&self, other: &Self) -> Self {
        if self.coefficients.is_empty() || other.coefficients.is_empty() {
            return Self::new(Vec::new());
        }

        let mut product =
            vec![BigInt::zero(); self.coefficients.len() + other.coefficients.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                product[i + j] += a * b;
            }
        }
        Self::new(product)
    }

    /// `P(x)` by Horner's rule.
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, coeff| acc * x + coeff)
    }

    /// True when `P(x)` is exactly zero.
    pub fn vanishes_at(&self, x: &BigInt) -> bool {
        self.evaluate(x).is_zero()
    }
}
