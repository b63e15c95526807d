//! Integration tests for micro-sign normalization and small parse edge cases.

#[test]
fn micro_sign_u00b5_normalizes_to_u_prefix() {
    let info = ucum::info("\u{b5}g").unwrap();
    assert_eq!(info.name, "g");
}

#[test]
fn greek_mu_also_normalizes_to_u_prefix() {
    assert!(ucum::validate("\u{3bc}mol/L").valid);
}

#[test]
fn micro_prefixed_compound_converts_like_its_ascii_spelling() {
    let via_micro = ucum::convert(1.0, "\u{b5}g", "mg").unwrap();
    let via_ascii = ucum::convert(1.0, "ug", "mg").unwrap();
    assert!((via_micro - via_ascii).abs() < 1e-12);
}

#[test]
fn ten_star_six_is_a_distinct_atom_from_a_bare_factor() {
    assert!(ucum::validate("10*6/uL").valid);
    let form = ucum::canonicalize("10*6/uL").unwrap();
    assert!(!form.dimension.is_dimensionless() || form.magnitude != 1.0);
}
