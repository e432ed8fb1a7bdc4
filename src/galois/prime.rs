//! Prime-order Galois fields GF(p)

use super::FieldElement;
use crate::error::Result;
use crate::tables::{self, FieldKey, LogExpTables};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Element of GF(P) using modular arithmetic
///
/// Multiplication is computed directly modulo `P`; only `log`, `exp`, `pow`
/// and division consult the field's tables. `P` must be prime for those to
/// be available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GfPrime<const P: u32> {
    value: u32,
}

impl<const P: u32> GfPrime<P> {
    pub const fn new(value: u32) -> Self {
        Self { value: value % P }
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    fn reduce(value: u64) -> Self {
        Self {
            value: (value % u64::from(P)) as u32,
        }
    }
}

impl GfPrime<11> {
    /// Single-character form: `0`-`9`, then `A` for ten
    pub fn symbol(&self) -> char {
        char::from(b"0123456789A"[self.value as usize])
    }
}

impl<const P: u32> FieldElement for GfPrime<P> {
    const ORDER: u32 = P;

    fn new(value: u32) -> Self {
        GfPrime::new(value)
    }

    fn value(&self) -> u32 {
        self.value
    }

    fn try_tables() -> Result<&'static LogExpTables> {
        tables::tables_for(FieldKey::Prime(P))
    }
}

impl<const P: u32> Add for GfPrime<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::reduce(u64::from(self.value) + u64::from(rhs.value))
    }
}

impl<const P: u32> AddAssign for GfPrime<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const P: u32> Sub for GfPrime<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::reduce(u64::from(P) + u64::from(self.value) - u64::from(rhs.value))
    }
}

impl<const P: u32> SubAssign for GfPrime<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const P: u32> Mul for GfPrime<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::reduce(u64::from(self.value) * u64::from(rhs.value))
    }
}

impl<const P: u32> MulAssign for GfPrime<P> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const P: u32> Div for GfPrime<P> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<const P: u32> DivAssign for GfPrime<P> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<const P: u32> Neg for GfPrime<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::reduce(u64::from(P) - u64::from(self.value))
    }
}

impl<const P: u32> From<u32> for GfPrime<P> {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl<const P: u32> From<GfPrime<P>> for u32 {
    fn from(val: GfPrime<P>) -> Self {
        val.value
    }
}

impl<const P: u32> std::fmt::Display for GfPrime<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// GF(11), primitive element 2
pub type Gf11 = GfPrime<11>;
/// GF(929), the PDF417 field, primitive element 3
pub type Gf929 = GfPrime<929>;
