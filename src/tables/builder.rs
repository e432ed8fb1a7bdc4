//! EXP/LOG table construction and primitive element search

use super::analysis::{analyze_prime_order, DefiningPolynomial};
use crate::error::{GfError, Result};
use log::debug;

/// Discrete exponential and logarithm tables for one field
///
/// `exp[k]` is the primitive element raised to the k-th power, for
/// `k in 0..order-1`. `log` inverts it; `log[0]` is 0 by convention since
/// zero has no logarithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogExpTables {
    order: u32,
    primitive_element: u32,
    exp: Vec<u32>,
    log: Vec<u32>,
}

impl LogExpTables {
    /// Build tables for GF(p), discovering the primitive element when none is given
    pub fn for_prime(order: u32, primitive_element: Option<u32>) -> Result<Self> {
        let order = analyze_prime_order(order)?;

        let primitive = match primitive_element {
            Some(candidate) if is_primitive_element(order, candidate) => candidate % order,
            Some(candidate) => {
                return Err(GfError::NotPrimitiveElement {
                    element: candidate,
                    order,
                })
            }
            None => find_primitive_element(order)?,
        };

        let mut exp = Vec::with_capacity(order as usize - 1);
        let mut value = 1u32;
        for _ in 0..order - 1 {
            exp.push(value);
            value = mul_mod(value, primitive, order);
        }

        debug!("Built GF({}) tables with primitive element {}", order, primitive);
        Ok(Self::from_exp(order, primitive, exp))
    }

    /// Build tables for GF(2^m) with generator 2 and the given reduction polynomial
    ///
    /// Fails unless 2 generates every nonzero element, i.e. the polynomial is
    /// primitive.
    pub fn for_binary(polynomial: &DefiningPolynomial) -> Result<Self> {
        let order = polynomial.order();
        let mut seen = vec![false; order as usize];
        let mut exp = Vec::with_capacity(order as usize - 1);

        let mut value = 1u32;
        for _ in 0..order - 1 {
            if value == 0 || seen[value as usize] {
                return Err(GfError::NotPrimitiveElement { element: 2, order });
            }
            seen[value as usize] = true;
            exp.push(value);

            value <<= 1;
            if value >= order {
                value = (value & (order - 1)) ^ polynomial.reduction();
            }
        }

        debug!(
            "Built GF({}) tables with defining polynomial {}",
            order, polynomial
        );
        Ok(Self::from_exp(order, 2, exp))
    }

    fn from_exp(order: u32, primitive_element: u32, exp: Vec<u32>) -> Self {
        let mut log = vec![0u32; order as usize];
        for (power, &value) in exp.iter().enumerate() {
            log[value as usize] = power as u32;
        }

        Self {
            order,
            primitive_element,
            exp,
            log,
        }
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    /// Base of the logarithms in these tables
    pub fn primitive_element(&self) -> u32 {
        self.primitive_element
    }

    pub fn exp_table(&self) -> &[u32] {
        &self.exp
    }

    pub fn log_table(&self) -> &[u32] {
        &self.log
    }

    /// Primitive element to the given power; the exponent wraps modulo `order - 1`
    #[inline]
    pub fn exp(&self, power: u64) -> u32 {
        self.exp[(power % self.exp.len() as u64) as usize]
    }

    /// Discrete logarithm of `value`, or 0 for zero
    #[inline]
    pub fn log(&self, value: u32) -> u32 {
        self.log[value as usize]
    }
}

#[inline]
pub(crate) fn mul_mod(a: u32, b: u32, modulus: u32) -> u32 {
    ((u64::from(a) * u64::from(b)) % u64::from(modulus)) as u32
}

/// Check whether successive powers of `candidate` modulo `order` visit every
/// nonzero residue exactly once
pub fn is_primitive_element(order: u32, candidate: u32) -> bool {
    if order < 2 {
        return false;
    }
    let candidate = candidate % order;
    if candidate == 0 {
        return false;
    }

    let mut seen = vec![false; order as usize];
    seen[1] = true;

    let mut value = 1u32;
    for _ in 2..order {
        value = mul_mod(value, candidate, order);
        if seen[value as usize] {
            return false;
        }
        seen[value as usize] = true;
    }

    true
}

/// Smallest primitive element of GF(order), scanning upward from 2
pub fn find_primitive_element(order: u32) -> Result<u32> {
    (2..order)
        .find(|&candidate| is_primitive_element(order, candidate))
        .ok_or(GfError::PrimitiveElementNotFound(order))
}
