//! Field parameter validation

use crate::error::{GfError, Result};
use std::fmt;

/// Largest binary field degree tables are built for: GF(2^16)
pub const MAX_BINARY_DEGREE: u32 = 16;

/// Irreducible polynomial over GF(2) defining a binary extension field
///
/// `bits` packs the coefficients with x^degree as the most significant set bit,
/// e.g. x⁸ + x⁴ + x³ + x² + 1 is `0x11D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefiningPolynomial {
    degree: u32,
    bits: u32,
}

impl DefiningPolynomial {
    /// Validate a packed polynomial of the given degree
    pub fn from_bits(degree: u32, bits: u32) -> Result<Self> {
        if degree < 2 {
            return Err(GfError::InvalidDefiningPolynomial {
                bits: format!("{bits:b}"),
                reason: "polynomial must have degree of at least 2",
            });
        }
        if degree > MAX_BINARY_DEGREE {
            return Err(GfError::FieldTooLarge {
                degree,
                max: MAX_BINARY_DEGREE,
            });
        }
        if bits >> degree != 1 {
            return Err(GfError::InvalidDefiningPolynomial {
                bits: format!("{bits:b}"),
                reason: "highest set bit must be the x^degree term",
            });
        }

        Ok(Self { degree, bits })
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Number of elements in the field this polynomial defines
    pub fn order(&self) -> u32 {
        1 << self.degree
    }

    /// All coefficients, including the leading x^degree term
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Lower-order coefficients XORed in when a shift overflows the field
    pub fn reduction(&self) -> u32 {
        self.bits & (self.order() - 1)
    }
}

impl fmt::Display for DefiningPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for exponent in (0..=self.degree).rev() {
            if self.bits & (1 << exponent) == 0 {
                continue;
            }
            if !first {
                write!(f, "+")?;
            }
            first = false;
            match exponent {
                0 => write!(f, "1")?,
                1 => write!(f, "x")?,
                _ => write!(f, "x^{exponent}")?,
            }
        }
        Ok(())
    }
}

/// Parse a defining polynomial written as a bit string, most significant bit first
///
/// `"1011"` is x³ + x + 1 and defines GF(8).
pub fn analyze_defining_polynomial(bits: &str) -> Result<DefiningPolynomial> {
    let invalid = |reason| GfError::InvalidDefiningPolynomial {
        bits: bits.to_string(),
        reason,
    };

    if bits.len() < 3 {
        return Err(invalid(
            "polynomial bit field must have at least three elements",
        ));
    }
    if !bits.starts_with('1') {
        return Err(invalid("polynomial bit field must begin with a '1'"));
    }
    if bits.chars().any(|c| c != '0' && c != '1') {
        return Err(invalid("only '1' and '0' allowed in polynomial bit field"));
    }

    let degree = (bits.len() - 1) as u32;
    if degree > MAX_BINARY_DEGREE {
        return Err(GfError::FieldTooLarge {
            degree,
            max: MAX_BINARY_DEGREE,
        });
    }

    let packed = bits
        .bytes()
        .fold(0u32, |acc, b| (acc << 1) | u32::from(b == b'1'));

    DefiningPolynomial::from_bits(degree, packed)
}

/// Primality by trial division over every candidate below `n`
pub fn is_prime(n: u32) -> bool {
    n >= 2 && (2..n).all(|divisor| n % divisor != 0)
}

/// Validate the order of a prime field
pub fn analyze_prime_order(n: u32) -> Result<u32> {
    if n < 2 {
        return Err(GfError::InputTooSmall(n));
    }
    if !is_prime(n) {
        return Err(GfError::NotPrime(n));
    }
    Ok(n)
}
