//! Galois field elements
//!
//! Two representations share one contract, [`FieldElement`]:
//!
//! - [`GfPrime<P>`]: GF(p) with ordinary modular arithmetic
//! - [`GfBinary<BITS, POLY>`]: GF(2^BITS) with XOR addition and log/exp
//!   accelerated multiplication, reduced by the defining polynomial `POLY`
//!
//! Both look up their log/exp tables through [`crate::tables::registry`], so
//! a field type's tables are built once per process and shared read-only.
//!
//! ## Division by zero
//!
//! `a / 0` panics. [`FieldElement::checked_div`] and
//! [`FieldElement::inverse`] report [`GfError::DivisionByZero`] instead.
//! `log()` of zero returns 0, the table's placeholder.

mod binary;
mod prime;

pub use binary::{Gf256, Gf65536, Gf8, GfBinary};
pub use prime::{Gf11, Gf929, GfPrime};

use crate::error::{GfError, Result};
use crate::tables::LogExpTables;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Operations shared by every field element type
pub trait FieldElement:
    Copy
    + Debug
    + Display
    + Default
    + Eq
    + Hash
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Number of elements in the field
    const ORDER: u32;

    /// Element for `value`, reduced modulo `ORDER`
    fn new(value: u32) -> Self;

    /// Underlying integer representative in `[0, ORDER)`
    fn value(&self) -> u32;

    /// Log/exp tables for this field, building them on first use
    fn try_tables() -> Result<&'static LogExpTables>;

    fn zero() -> Self {
        Self::new(0)
    }

    fn one() -> Self {
        Self::new(1)
    }

    fn is_zero(&self) -> bool {
        self.value() == 0
    }

    /// Tables for this field
    ///
    /// # Panics
    /// If the field parameters cannot produce tables (e.g. a non-primitive
    /// defining polynomial). Use [`FieldElement::try_tables`] to check first.
    fn tables() -> &'static LogExpTables {
        Self::try_tables().unwrap_or_else(|err| {
            panic!(
                "Unsupported Galois field configuration (order {}): {}",
                Self::ORDER,
                err
            )
        })
    }

    /// Base of this field's logarithms
    fn primitive_element() -> Self {
        Self::new(Self::tables().primitive_element())
    }

    /// Primitive element raised to `power`, wrapping modulo `ORDER - 1`
    fn exp(power: u64) -> Self {
        Self::new(Self::tables().exp(power))
    }

    /// Discrete logarithm base the primitive element
    fn log(&self) -> u32 {
        Self::tables().log(self.value())
    }

    /// Raise to a power; zero stays zero for every exponent, including 0
    fn pow(&self, exponent: u32) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        Self::exp(u64::from(self.log()) * u64::from(exponent))
    }

    fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(GfError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let limit = u64::from(Self::ORDER - 1);
        Ok(Self::exp(limit + u64::from(self.log()) - u64::from(rhs.log())))
    }

    /// Multiplicative inverse
    fn inverse(&self) -> Result<Self> {
        Self::one().checked_div(*self)
    }

    /// Whether successive powers of this element enumerate every nonzero element
    fn is_primitive(&self) -> bool {
        if self.is_zero() {
            return false;
        }

        let mut seen = vec![false; Self::ORDER as usize];
        seen[1] = true;

        let mut value = Self::one();
        for _ in 2..Self::ORDER {
            value *= *self;
            if seen[value.value() as usize] {
                return false;
            }
            seen[value.value() as usize] = true;
        }

        true
    }
}
