//! Systematic Reed-Solomon encoder
//!
//! A message polynomial M is encoded with k parity symbols as
//!
//! ```text
//! C = M·x^k - ((M·x^k) mod G),   G = ∏ (x - α^i)
//! ```
//!
//! so C is divisible by the generator G, vanishes at every root α^i, and
//! still carries M verbatim in its top coefficients.

use super::config::EncoderConfig;
use crate::error::{GfError, Result};
use crate::galois::FieldElement;
use crate::poly::Polynomial;
use log::debug;

/// Generator polynomial ∏ (x - primitive^e) over `config`'s root exponents
pub fn generator_polynomial<F: FieldElement>(config: &EncoderConfig, primitive: F) -> Polynomial<F> {
    let mut generator = Polynomial::from_coefficients(vec![F::one()]);

    for exponent in config.root_exponents(F::ORDER - 1) {
        let root = primitive.pow(exponent);
        let factor = Polynomial::from_coefficients(vec![-root, F::one()]);
        generator = generator.multiply(&factor);
    }

    generator
}

/// Encode `message` with `parity_symbols` parity symbols, roots starting at `primitive^0`
pub fn encode_systematic<F: FieldElement>(
    message: &Polynomial<F>,
    parity_symbols: usize,
    primitive: F,
) -> Result<Polynomial<F>> {
    ReedSolomonEncoder::with_primitive(EncoderConfig::new(parity_symbols), primitive)?
        .encode(message)
}

/// Reusable encoder holding a precomputed generator polynomial
#[derive(Debug, Clone)]
pub struct ReedSolomonEncoder<F: FieldElement> {
    config: EncoderConfig,
    primitive: F,
    generator: Polynomial<F>,
}

impl<F: FieldElement> ReedSolomonEncoder<F> {
    /// Encoder using the field's own primitive element
    pub fn new(config: EncoderConfig) -> Result<Self> {
        let primitive = F::new(F::try_tables()?.primitive_element());
        Self::with_primitive(config, primitive)
    }

    /// Encoder whose generator roots are powers of `primitive`
    pub fn with_primitive(config: EncoderConfig, primitive: F) -> Result<Self> {
        // Make sure the field can multiply before validating anything with it
        F::try_tables()?;

        let max = (F::ORDER - 1) as usize;
        if config.parity_symbols > max {
            return Err(GfError::TooManyParitySymbols {
                requested: config.parity_symbols,
                max,
            });
        }
        if !primitive.is_primitive() {
            return Err(GfError::NotPrimitiveElement {
                element: primitive.value(),
                order: F::ORDER,
            });
        }

        let generator = generator_polynomial(&config, primitive);
        debug!(
            "Reed-Solomon encoder over GF({}): {} parity symbols, generator {}",
            F::ORDER,
            config.parity_symbols,
            generator
        );

        Ok(Self {
            config,
            primitive,
            generator,
        })
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn parity_symbols(&self) -> usize {
        self.config.parity_symbols
    }

    pub fn primitive(&self) -> F {
        self.primitive
    }

    pub fn generator(&self) -> &Polynomial<F> {
        &self.generator
    }

    /// Roots of the generator polynomial, in order
    pub fn roots(&self) -> Vec<F> {
        self.config
            .root_exponents(F::ORDER - 1)
            .map(|exponent| self.primitive.pow(exponent))
            .collect()
    }

    /// Codeword polynomial for `message`
    ///
    /// The result has `len(message) + parity_symbols` coefficients; the top
    /// `len(message)` equal the message.
    pub fn encode(&self, message: &Polynomial<F>) -> Result<Polynomial<F>> {
        let shifted = message.shift_left(self.config.parity_symbols);
        let remainder = shifted.remainder(&self.generator)?;
        Ok(shifted.subtract(&remainder))
    }

    /// Parity symbols for `data`, highest exponent first
    pub fn parity(&self, data: &[F]) -> Result<Vec<F>> {
        let shifted = Polynomial::from_high_first(data).shift_left(self.config.parity_symbols);
        let remainder = shifted.remainder(&self.generator)?;

        Ok((0..self.config.parity_symbols)
            .rev()
            .map(|exponent| -remainder.coefficient(exponent))
            .collect())
    }

    /// Systematic codeword symbols: `data` followed by its parity
    pub fn encode_symbols(&self, data: &[F]) -> Result<Vec<F>> {
        let mut codeword = Vec::with_capacity(data.len() + self.config.parity_symbols);
        codeword.extend_from_slice(data);
        codeword.extend(self.parity(data)?);
        Ok(codeword)
    }
}
