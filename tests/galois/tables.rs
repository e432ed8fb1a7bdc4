//! Log/Exp Table Tests
//!
//! Table construction through the public `tables` API: parameter analysis,
//! primitive element discovery, the shared registry and the table invariants.

use gfcodec::tables::{
    analyze_defining_polynomial, find_primitive_element, is_primitive_element, tables_for,
    FieldKey, LogExpTables,
};
use gfcodec::{FieldElement, Gf11, Gf256, Gf929, GfError};

fn assert_tables_consistent(tables: &LogExpTables) {
    let order = tables.order();
    let exp = tables.exp_table();
    let log = tables.log_table();

    assert_eq!(exp.len(), order as usize - 1);
    assert_eq!(log.len(), order as usize);
    assert_eq!(exp[0], 1);
    assert_eq!(log[0], 0);

    // EXP is a permutation of 1..order
    let mut sorted = exp.to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted, (1..order).collect::<Vec<_>>());

    for v in 1..order {
        assert_eq!(exp[log[v as usize] as usize], v, "EXP[LOG[{v}]]");
    }
}

// ============================================================================
// Table Invariants
// ============================================================================

#[test]
fn test_prime_tables_are_consistent() {
    for order in [3, 5, 7, 11, 13, 17, 929] {
        let tables = LogExpTables::for_prime(order, None).unwrap();
        assert_tables_consistent(&tables);
    }
}

#[test]
fn test_binary_tables_are_consistent() {
    for bits in ["111", "1011", "10011", "100011101", "10001000000001011"] {
        let poly = analyze_defining_polynomial(bits).unwrap();
        let tables = LogExpTables::for_binary(&poly).unwrap();
        assert_eq!(tables.primitive_element(), 2);
        assert_tables_consistent(&tables);
    }
}

#[test]
fn test_gf8_reference_tables() {
    let poly = analyze_defining_polynomial("1011").unwrap();
    let tables = LogExpTables::for_binary(&poly).unwrap();
    assert_eq!(tables.exp_table(), &[1, 2, 4, 3, 6, 7, 5]);
    assert_eq!(tables.log_table(), &[0, 0, 1, 3, 2, 6, 4, 5]);
}

#[test]
fn test_reducible_polynomial_is_rejected() {
    // x^8 + 1 = (x + 1)^8
    let poly = analyze_defining_polynomial("100000001").unwrap();
    assert!(matches!(
        LogExpTables::for_binary(&poly),
        Err(GfError::NotPrimitiveElement { element: 2, order: 256 })
    ));
}

// ============================================================================
// Primitive Elements
// ============================================================================

#[test]
fn test_smallest_primitive_elements() {
    let expected = [(3, 2), (5, 2), (7, 3), (11, 2), (13, 2), (17, 3), (929, 3)];
    for (order, primitive) in expected {
        assert_eq!(find_primitive_element(order), Ok(primitive), "GF({order})");
    }
}

#[test]
fn test_primitive_elements_of_gf11() {
    let primitives: Vec<u32> = (0..11).filter(|&c| is_primitive_element(11, c)).collect();
    assert_eq!(primitives, vec![2, 6, 7, 8]);
}

#[test]
fn test_supplied_element_is_reduced() {
    let tables = LogExpTables::for_prime(11, Some(13)).unwrap();
    assert_eq!(tables.primitive_element(), 2);
}

#[test]
fn test_prime_order_validation() {
    assert_eq!(
        LogExpTables::for_prime(1, None),
        Err(GfError::InputTooSmall(1))
    );
    assert_eq!(LogExpTables::for_prime(9, None), Err(GfError::NotPrime(9)));
    assert_eq!(
        LogExpTables::for_prime(2, None),
        Err(GfError::PrimitiveElementNotFound(2))
    );
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_field_types_share_registry_tables() {
    let via_type = Gf929::try_tables().unwrap();
    let via_key = tables_for(FieldKey::Prime(929)).unwrap();
    assert!(std::ptr::eq(via_type, via_key));

    let poly = analyze_defining_polynomial("100011101").unwrap();
    let via_key = tables_for(FieldKey::Binary(poly)).unwrap();
    assert!(std::ptr::eq(Gf256::tables(), via_key));
}

#[test]
fn test_registry_tables_match_fresh_build() {
    let fresh = LogExpTables::for_prime(11, None).unwrap();
    assert_eq!(Gf11::tables(), &fresh);
}

#[test]
fn test_failed_lookup_can_be_repeated() {
    for _ in 0..3 {
        assert_eq!(
            tables_for(FieldKey::Prime(21)),
            Err(GfError::NotPrime(21))
        );
    }
}

#[test]
fn test_concurrent_first_use_publishes_once() {
    // GF(65537) is used by no other test, so these threads race on first use
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| tables_for(FieldKey::Prime(65537)).unwrap()))
        .collect();
    let tables: Vec<&'static LogExpTables> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(tables[0].primitive_element(), 3);
    assert!(tables.windows(2).all(|w| std::ptr::eq(w[0], w[1])));
}
