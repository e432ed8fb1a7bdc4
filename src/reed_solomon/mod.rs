//! Reed-Solomon Systematic Encoding Module
//!
//! This module builds generator polynomials from consecutive powers of a
//! primitive element and appends parity symbols to messages so that every
//! codeword is divisible by the generator. It works over any
//! [`FieldElement`](crate::galois::FieldElement) type, prime or binary.

mod config;
mod encoder;

pub use config::EncoderConfig;
pub use encoder::{encode_systematic, generator_polynomial, ReedSolomonEncoder};
