//! Binary extension fields GF(2^m)
//!
//! ## Defining polynomials
//!
//! | Alias | Field | Polynomial |
//! |---|---|---|
//! | [`Gf8`] | GF(2^3) | 0b1011 (x³ + x + 1) |
//! | [`Gf256`] | GF(2^8) | 0x11D (x⁸ + x⁴ + x³ + x² + 1), as used by QR codes |
//! | [`Gf65536`] | GF(2^16) | 0x1100B (x¹⁶ + x¹² + x³ + x + 1), as used by PAR2 |
//!
//! Every polynomial must be primitive: the tables are built with generator 2
//! and construction fails if 2 does not reach every nonzero element.

use super::FieldElement;
use crate::error::Result;
use crate::tables::{self, DefiningPolynomial, FieldKey, LogExpTables};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Element of GF(2^BITS) reduced by the defining polynomial `POLY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GfBinary<const BITS: u32, const POLY: u32> {
    value: u32,
}

impl<const BITS: u32, const POLY: u32> GfBinary<BITS, POLY> {
    const COUNT: u32 = 1 << BITS;

    pub const fn new(value: u32) -> Self {
        Self {
            value: value % Self::COUNT,
        }
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    pub fn defining_polynomial() -> Result<DefiningPolynomial> {
        DefiningPolynomial::from_bits(BITS, POLY)
    }
}

impl<const BITS: u32, const POLY: u32> FieldElement for GfBinary<BITS, POLY> {
    const ORDER: u32 = 1 << BITS;

    fn new(value: u32) -> Self {
        GfBinary::new(value)
    }

    fn value(&self) -> u32 {
        self.value
    }

    fn try_tables() -> Result<&'static LogExpTables> {
        let polynomial = Self::defining_polynomial()?;
        tables::tables_for(FieldKey::Binary(polynomial))
    }
}

// Addition (XOR in Galois fields)
impl<const BITS: u32, const POLY: u32> Add for GfBinary<BITS, POLY> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value ^ rhs.value,
        }
    }
}

impl<const BITS: u32, const POLY: u32> AddAssign for GfBinary<BITS, POLY> {
    fn add_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

// Subtraction (same as addition in GF(2^n))
impl<const BITS: u32, const POLY: u32> Sub for GfBinary<BITS, POLY> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value ^ rhs.value,
        }
    }
}

impl<const BITS: u32, const POLY: u32> SubAssign for GfBinary<BITS, POLY> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

// Multiplication using log tables
impl<const BITS: u32, const POLY: u32> Mul for GfBinary<BITS, POLY> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.value == 0 || rhs.value == 0 {
            return Self::new(0);
        }

        let table = Self::tables();
        let log_sum = u64::from(table.log(self.value)) + u64::from(table.log(rhs.value));
        Self::new(table.exp(log_sum))
    }
}

impl<const BITS: u32, const POLY: u32> MulAssign for GfBinary<BITS, POLY> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// Division using log tables
impl<const BITS: u32, const POLY: u32> Div for GfBinary<BITS, POLY> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<const BITS: u32, const POLY: u32> DivAssign for GfBinary<BITS, POLY> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// Every element is its own additive inverse
impl<const BITS: u32, const POLY: u32> Neg for GfBinary<BITS, POLY> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self
    }
}

impl<const BITS: u32, const POLY: u32> From<u32> for GfBinary<BITS, POLY> {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl<const BITS: u32, const POLY: u32> From<GfBinary<BITS, POLY>> for u32 {
    fn from(val: GfBinary<BITS, POLY>) -> Self {
        val.value
    }
}

impl<const BITS: u32, const POLY: u32> std::fmt::Display for GfBinary<BITS, POLY> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:X}", self.value)
    }
}

pub type Gf8 = GfBinary<3, 0b1011>;
pub type Gf256 = GfBinary<8, 0x11D>;
pub type Gf65536 = GfBinary<16, 0x1100B>;
