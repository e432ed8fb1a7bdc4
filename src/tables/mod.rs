//! Log/exp table construction for Galois fields
//!
//! Multiplication and division in the fields of this crate are turned into
//! addition and subtraction of discrete logarithms. This module provides:
//!
//! - Validation of field parameters (defining polynomials for GF(2^m),
//!   primality for GF(p))
//! - Primitive element testing and discovery
//! - Construction of the `EXP`/`LOG` table pair ([`LogExpTables`])
//! - A process-wide registry that builds each field's tables exactly once
//! - The textual table dump used by the `gftables` tool

mod analysis;
mod builder;
mod format;
pub mod registry;

pub use analysis::{
    analyze_defining_polynomial, analyze_prime_order, is_prime, DefiningPolynomial,
    MAX_BINARY_DEGREE,
};
pub use builder::{find_primitive_element, is_primitive_element, LogExpTables};
pub use format::format_table;
pub use registry::{tables_for, FieldKey};
