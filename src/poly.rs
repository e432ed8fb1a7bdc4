//! Dense polynomials over a Galois field
//!
//! Coefficients are stored lowest exponent first: `coefficients[i]` is the
//! coefficient of x^i. Constructors taking external data expect the usual
//! written order instead, highest exponent first.
//!
//! Equality ignores high-order zero padding, so `[1, 2, 3]` and
//! `[1, 2, 3, 0]` (low to high) are the same polynomial. A polynomial always
//! stores at least one coefficient.

use crate::error::{GfError, Result};
use crate::galois::FieldElement;
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Shl, Sub};

#[derive(Debug, Clone)]
pub struct Polynomial<F: FieldElement> {
    coefficients: Vec<F>,
}

impl<F: FieldElement> Polynomial<F> {
    /// Polynomial with `num_coefficients` zero coefficients (at least one)
    pub fn zeros(num_coefficients: usize) -> Self {
        Self {
            coefficients: vec![F::zero(); num_coefficients.max(1)],
        }
    }

    /// Polynomial from coefficients listed lowest exponent first
    pub fn from_coefficients(coefficients: Vec<F>) -> Self {
        if coefficients.is_empty() {
            return Self::zeros(1);
        }
        Self { coefficients }
    }

    /// Polynomial from coefficients listed highest exponent first
    pub fn from_high_first(coefficients: &[F]) -> Self {
        Self::from_coefficients(coefficients.iter().rev().copied().collect())
    }

    /// Polynomial from raw integers listed highest exponent first, each
    /// reduced into the field
    pub fn from_values_high_first(values: &[u32]) -> Self {
        Self::from_coefficients(values.iter().rev().map(|&v| F::new(v)).collect())
    }

    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    /// Coefficients highest exponent first, including any stored leading zeros
    pub fn to_high_first(&self) -> Vec<F> {
        self.coefficients.iter().rev().copied().collect()
    }

    pub fn num_coefficients(&self) -> usize {
        self.coefficients.len()
    }

    /// Coefficient of x^exponent; zero beyond the stored coefficients
    pub fn coefficient(&self, exponent: usize) -> F {
        self.coefficients
            .get(exponent)
            .copied()
            .unwrap_or_else(F::zero)
    }

    /// Exponent of the highest nonzero coefficient, `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|c| !c.is_zero())
    }

    pub fn is_zero(&self) -> bool {
        self.degree().is_none()
    }

    /// Evaluate at `x`, summing `coefficient[i] * x^i` term by term
    pub fn eval(&self, x: F) -> F {
        let mut output = self.coefficients[0];
        for (i, &coef) in self.coefficients.iter().enumerate().skip(1) {
            output += coef * x.pow(i as u32);
        }
        output
    }

    pub fn multiply(&self, other: &Self) -> Self {
        let mut output = Self::zeros(self.num_coefficients() + other.num_coefficients() - 1);

        for (i, &this_coef) in self.coefficients.iter().enumerate() {
            for (j, &other_coef) in other.coefficients.iter().enumerate() {
                output.coefficients[i + j] += this_coef * other_coef;
            }
        }

        output
    }

    /// Multiply every coefficient by `value`
    pub fn scale(&self, value: F) -> Self {
        Self {
            coefficients: self.coefficients.iter().map(|&c| c * value).collect(),
        }
    }

    /// Multiply by x^n
    pub fn shift_left(&self, n: usize) -> Self {
        let mut coefficients = vec![F::zero(); n];
        coefficients.extend_from_slice(&self.coefficients);
        Self { coefficients }
    }

    pub fn subtract(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with(&self, other: &Self, op: impl Fn(F, F) -> F) -> Self {
        let len = self.num_coefficients().max(other.num_coefficients());
        Self {
            coefficients: (0..len)
                .map(|i| op(self.coefficient(i), other.coefficient(i)))
                .collect(),
        }
    }

    /// Remainder of polynomial long division by `divisor`
    ///
    /// The result keeps at least `len(divisor) - 1` coefficients (after the
    /// divisor's own leading zeros are dropped), even when they are all zero.
    pub fn remainder(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// Quotient and remainder of polynomial long division by `divisor`
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let mut divisor = divisor.clone();
        divisor.trim_leading_zeros(1);

        let divisor_coefs = divisor.num_coefficients();
        let leading_divisor_coef = divisor.coefficients[divisor_coefs - 1];
        if leading_divisor_coef.is_zero() {
            return Err(GfError::ZeroDivisorPolynomial);
        }

        let mut dividend = self.clone();
        let dividend_coefs = dividend.num_coefficients();
        let mut quotient = Self::zeros(dividend_coefs.saturating_sub(divisor_coefs) + 1);

        if divisor_coefs <= dividend_coefs {
            let max_shift = dividend_coefs - divisor_coefs;

            // Highest-degree term first
            for shift in 0..=max_shift {
                let top = dividend.coefficients[dividend_coefs - 1 - shift];
                if top.is_zero() {
                    continue;
                }

                let factor = top / leading_divisor_coef;
                let offset = max_shift - shift;
                quotient.coefficients[offset] = factor;

                for (i, &divisor_coef) in divisor.coefficients.iter().enumerate() {
                    dividend.coefficients[i + offset] -= divisor_coef * factor;
                }
            }
        }

        dividend.trim_leading_zeros(divisor_coefs - 1);
        quotient.trim_leading_zeros(1);

        Ok((quotient, dividend))
    }

    /// Drop zero coefficients above the highest nonzero one, keeping at least
    /// `max(min_coefficients, 1)` coefficients
    pub fn trim_leading_zeros(&mut self, min_coefficients: usize) {
        let keep = self
            .degree()
            .map_or(1, |d| d + 1)
            .max(min_coefficients)
            .max(1);
        self.coefficients.resize(keep, F::zero());
    }
}

impl<F: FieldElement> PartialEq for Polynomial<F> {
    fn eq(&self, other: &Self) -> bool {
        let (shorter, longer) = if self.num_coefficients() <= other.num_coefficients() {
            (self, other)
        } else {
            (other, self)
        };

        let split = shorter.num_coefficients();
        shorter.coefficients[..] == longer.coefficients[..split]
            && longer.coefficients[split..].iter().all(|c| c.is_zero())
    }
}

impl<F: FieldElement> Eq for Polynomial<F> {}

impl<F: FieldElement> Index<usize> for Polynomial<F> {
    type Output = F;

    fn index(&self, exponent: usize) -> &F {
        &self.coefficients[exponent]
    }
}

impl<F: FieldElement> IndexMut<usize> for Polynomial<F> {
    fn index_mut(&mut self, exponent: usize) -> &mut F {
        &mut self.coefficients[exponent]
    }
}

impl<F: FieldElement> Add for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, rhs: Self) -> Polynomial<F> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<F: FieldElement> Sub for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, rhs: Self) -> Polynomial<F> {
        self.subtract(rhs)
    }
}

impl<F: FieldElement> Mul for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, rhs: Self) -> Polynomial<F> {
        self.multiply(rhs)
    }
}

impl<F: FieldElement> Mul<F> for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, rhs: F) -> Polynomial<F> {
        self.scale(rhs)
    }
}

impl<F: FieldElement> Shl<usize> for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn shl(self, n: usize) -> Polynomial<F> {
        self.shift_left(n)
    }
}

impl<F: FieldElement> fmt::Display for Polynomial<F> {
    /// Written highest exponent first, e.g. `8x^2+6x+7`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coef) in self.coefficients.iter().enumerate().rev() {
            if i + 1 < self.coefficients.len() {
                write!(f, "+")?;
            }
            write!(f, "{coef}")?;
            match i {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{i}")?,
            }
        }
        Ok(())
    }
}
