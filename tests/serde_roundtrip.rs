//! Serialization round trips for the public data types, behind the `serde`
//! feature.

#![cfg(feature = "serde")]

#[test]
fn canonical_form_round_trips_through_json() {
    let form = ucum::canonicalize("kg.m/s2").unwrap();
    let json = serde_json::to_string(&form).unwrap();
    let back: ucum::CanonicalForm = serde_json::from_str(&json).unwrap();
    assert_eq!(form, back);
}

#[test]
fn quantity_round_trips_through_json() {
    let q = ucum::quantity(37.0, "Cel").unwrap();
    let json = serde_json::to_string(&q).unwrap();
    let back: ucum::Quantity = serde_json::from_str(&json).unwrap();
    assert_eq!(q, back);
}

#[test]
fn validation_result_round_trips_through_json() {
    let result = ucum::validate("kg..m");
    let json = serde_json::to_string(&result).unwrap();
    let back: ucum::ValidationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
}
