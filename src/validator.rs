//! Diagnostics and descriptive lookup over a unit expression.

use crate::ast::Expr;
use crate::canonical;
use crate::catalogue;
use crate::dimension::Dimension;
use crate::error::{UcumError, Warning};
use crate::parser;

/// The outcome of [`validate`]: `valid` is `errors.is_empty()`, kept as its
/// own field so callers don't have to recompute it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<UcumError>,
    pub warnings: Vec<Warning>,
}

/// Validate a unit expression: it must parse, every atom must resolve,
/// every prefix must be permitted on its atom, and every special unit must
/// stand alone with no exponent other than 1. This reuses the canonicalizer
/// directly, since canonicalization already enforces every one of those
/// rules as a side effect of computing a magnitude.
pub fn validate(text: &str) -> ValidationResult {
    let result = parser::parse(text);
    let mut errors = result.errors;
    let warnings = result.warnings;
    if errors.is_empty() {
        if let Err(e) = canonical::canonicalize(text) {
            errors.push(e);
        }
    }
    ValidationResult {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// The broad classification [`info`] reports for a unit expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitKind {
    Base,
    Derived,
    Special,
    Arbitrary,
    Dimensionless,
}

/// Descriptive information about a unit expression.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitInfo {
    pub kind: UnitKind,
    pub name: String,
    pub property: String,
    pub dimension: Dimension,
    pub is_special: bool,
    pub is_arbitrary: bool,
    pub is_metric: bool,
}

/// Describe a unit expression: its catalogue metadata when it resolves to a
/// single known atom (possibly prefixed), or its dimensional shape alone
/// when it is a compound expression.
pub fn info(text: &str) -> Result<UnitInfo, UcumError> {
    let result = parser::parse(text);
    if let Some(err) = result.errors.into_iter().next() {
        return Err(err);
    }
    let expr = result.expr.expect("parser always returns a tree");

    if let Expr::Unit { atom, exponent, .. } = &expr {
        if exponent.is_none() {
            if let Some(a) = catalogue::atom(atom) {
                let form = canonical::canonicalize(text)?;
                let kind = if a.is_arbitrary() {
                    UnitKind::Arbitrary
                } else if a.is_special() {
                    UnitKind::Special
                } else if a.is_base() {
                    UnitKind::Base
                } else {
                    UnitKind::Derived
                };
                return Ok(UnitInfo {
                    kind,
                    name: a.code.to_string(),
                    property: a.property.to_string(),
                    dimension: form.dimension,
                    is_special: a.is_special(),
                    is_arbitrary: a.is_arbitrary(),
                    is_metric: a.is_metric,
                });
            }
        }
    }

    let form = canonical::canonicalize(text)?;
    let kind = if form.dimension.is_dimensionless() && !form.is_special() {
        UnitKind::Dimensionless
    } else if form.is_special() {
        UnitKind::Special
    } else {
        UnitKind::Derived
    };
    Ok(UnitInfo {
        kind,
        name: text.to_string(),
        property: String::new(),
        dimension: form.dimension,
        is_special: form.is_special(),
        is_arbitrary: false,
        is_metric: false,
    })
}

pub fn is_special_unit(text: &str) -> Result<bool, UcumError> {
    Ok(info(text)?.is_special)
}

pub fn is_arbitrary_unit(text: &str) -> Result<bool, UcumError> {
    Ok(info(text)?.is_arbitrary)
}
