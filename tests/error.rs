//! Integration tests for diagnostic behavior across the public API.

#[test]
fn double_separator_is_an_unexpected_token() {
    let result = ucum::parse("kg..m");
    assert!(!result.is_ok());
    assert_eq!(result.errors[0].kind_tag(), "unexpected_token");
}

#[test]
fn unknown_unit_is_reported_at_canonicalize_time_not_parse_time() {
    let parsed = ucum::parse("frobnicate");
    assert!(parsed.is_ok(), "unrecognized atoms are a canonicalize-time error");

    let err = ucum::canonicalize("frobnicate").unwrap_err();
    assert_eq!(err.kind_tag(), "unknown_unit");
}

#[test]
fn unterminated_bracket_is_a_syntax_error() {
    let result = ucum::parse("[in_i");
    assert!(!result.is_ok());
    assert_eq!(result.errors[0].kind_tag(), "syntax");
}

#[test]
fn special_unit_cannot_appear_inside_a_compound_expression() {
    let err = ucum::canonicalize("Cel.m").unwrap_err();
    assert_eq!(err.kind_tag(), "special_in_composition");
}

#[test]
fn special_unit_rejects_any_exponent_but_one() {
    let err = ucum::canonicalize("Cel2").unwrap_err();
    assert_eq!(err.kind_tag(), "special_exponent");
}

#[test]
fn nonmetric_atom_rejects_any_prefix() {
    let err = ucum::canonicalize("kmin").unwrap_err();
    assert_eq!(err.kind_tag(), "prefix_not_allowed");
}

#[test]
fn convert_rejects_incompatible_dimensions() {
    let err = ucum::convert(1.0, "m", "s").unwrap_err();
    assert_eq!(err.kind_tag(), "incompatible_dimensions");
}

#[test]
fn convert_rejects_mismatched_arbitrary_units() {
    let err = ucum::convert(1.0, "[iU]", "[arb'U]").unwrap_err();
    assert_eq!(err.kind_tag(), "arbitrary_unit_mismatch");
}

#[test]
fn errors_carry_a_span_where_applicable() {
    let result = ucum::parse("kg..m");
    let span = result.errors[0].span().expect("unexpected_token carries a span");
    assert_eq!(span.start, 3);
}
