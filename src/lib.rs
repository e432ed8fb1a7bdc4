//! Galois field arithmetic, polynomial rings and systematic Reed-Solomon encoding
//!
//! - [`galois`]: prime fields GF(p) and binary extension fields GF(2^m)
//! - [`tables`]: log/exp table construction and primitive element search
//! - [`poly`]: dense polynomials over any field element type
//! - [`reed_solomon`]: generator polynomials and systematic encoding

pub mod args;
pub mod error;
pub mod galois;
pub mod poly;
pub mod reed_solomon;
pub mod tables;

pub use args::{build_cli, parse_args, TableRequest};
pub use error::{GfError, Result};
pub use galois::{FieldElement, Gf11, Gf256, Gf65536, Gf8, Gf929, GfBinary, GfPrime};
pub use poly::Polynomial;
pub use reed_solomon::{encode_systematic, generator_polynomial, EncoderConfig, ReedSolomonEncoder};
