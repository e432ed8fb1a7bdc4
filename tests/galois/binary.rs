//! Binary Extension Field (GF(2^m)) Arithmetic Tests
//!
//! Tests for GF(8), GF(256) and GF(65536): XOR addition, table-driven
//! multiplication and division, and rejection of unusable polynomials.

use gfcodec::{FieldElement, Gf256, Gf65536, Gf8, GfBinary, GfError};

// ============================================================================
// Addition and Subtraction
// ============================================================================

#[test]
fn test_addition_is_xor() {
    assert_eq!((Gf256::new(0x53) + Gf256::new(0xCA)).value(), 0x99);
    assert_eq!((Gf8::new(5) + Gf8::new(3)).value(), 6);
}

#[test]
fn test_subtraction_equals_addition() {
    for i in 0..8 {
        for j in 0..8 {
            assert_eq!(Gf8::new(i) - Gf8::new(j), Gf8::new(i) + Gf8::new(j));
        }
    }
}

#[test]
fn test_every_element_is_its_own_negation() {
    for v in 0..256 {
        let a = Gf256::new(v);
        assert_eq!(-a, a);
        assert_eq!(a + a, Gf256::zero());
    }
}

// ============================================================================
// Multiplication
// ============================================================================

#[test]
fn test_gf8_multiplication_table() {
    // x^3 = x + 1
    let expected: [[u32; 8]; 8] = [
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 1, 2, 3, 4, 5, 6, 7],
        [0, 2, 4, 6, 3, 1, 7, 5],
        [0, 3, 6, 5, 7, 4, 1, 2],
        [0, 4, 3, 7, 6, 2, 5, 1],
        [0, 5, 1, 4, 2, 7, 3, 6],
        [0, 6, 7, 1, 5, 3, 2, 4],
        [0, 7, 5, 2, 1, 6, 4, 3],
    ];

    for (i, row) in expected.iter().enumerate() {
        for (j, &product) in row.iter().enumerate() {
            let result = Gf8::new(i as u32) * Gf8::new(j as u32);
            assert_eq!(result.value(), product, "{i} * {j}");
        }
    }
}

#[test]
fn test_gf256_known_products() {
    // 0x80 * 2 wraps through the reduction polynomial 0x11D
    assert_eq!((Gf256::new(0x80) * Gf256::new(2)).value(), 0x1D);
    assert_eq!((Gf256::new(0xFF) * Gf256::one()).value(), 0xFF);
    assert_eq!((Gf256::new(0xFF) * Gf256::zero()).value(), 0);
}

#[test]
fn test_gf256_multiplication_is_commutative() {
    for i in (0..256).step_by(7) {
        for j in (0..256).step_by(11) {
            let a = Gf256::new(i);
            let b = Gf256::new(j);
            assert_eq!(a * b, b * a);
        }
    }
}

// ============================================================================
// Division and Inverses
// ============================================================================

#[test]
fn test_every_nonzero_element_has_inverse() {
    for v in 1..256 {
        let a = Gf256::new(v);
        assert_eq!(a * a.inverse().unwrap(), Gf256::one(), "inverse of {v}");
    }
}

#[test]
fn test_division_undoes_multiplication() {
    for i in 0..8 {
        for j in 1..8 {
            let a = Gf8::new(i);
            let b = Gf8::new(j);
            assert_eq!((a * b) / b, a);
        }
    }
}

#[test]
#[should_panic(expected = "Division by zero in Galois field")]
fn test_division_by_zero_panics() {
    let _ = Gf256::new(7) / Gf256::zero();
}

#[test]
fn test_checked_division_by_zero() {
    assert_eq!(
        Gf256::new(7).checked_div(Gf256::zero()),
        Err(GfError::DivisionByZero)
    );
}

// ============================================================================
// Logarithms
// ============================================================================

#[test]
fn test_generator_is_two() {
    assert_eq!(Gf256::primitive_element().value(), 2);
    assert_eq!(Gf8::primitive_element().value(), 2);
    assert_eq!(Gf8::new(2).log(), 1);
}

#[test]
fn test_log_exp_round_trip_over_gf65536() {
    for v in (1..65536).step_by(97) {
        let a = Gf65536::new(v);
        assert_eq!(Gf65536::exp(u64::from(a.log())), a);
    }
}

// ============================================================================
// Unusable Polynomials
// ============================================================================

#[test]
fn test_non_primitive_polynomial_is_rejected() {
    // x^4 + x^3 + x^2 + x + 1 is irreducible but 2 has order 5
    type Gf16Bad = GfBinary<4, 0b11111>;
    assert!(matches!(
        Gf16Bad::try_tables(),
        Err(GfError::NotPrimitiveElement { element: 2, order: 16 })
    ));
}

#[test]
fn test_polynomial_degree_mismatch_is_rejected() {
    type Gf256Bad = GfBinary<8, 0x1D>;
    assert!(matches!(
        Gf256Bad::try_tables(),
        Err(GfError::InvalidDefiningPolynomial { .. })
    ));
}
