//! Convertibility testing and value conversion.
//!
//! Conversion always routes through each side's canonical form: `from` is
//! folded to its linear reference magnitude (special units go through their
//! forward function first), then unfolded into `to`'s scale via its inverse
//! function. Arbitrary units short-circuit this entirely -- they only ever
//! convert to themselves, identified by exact atom code.

use crate::ast::Expr;
use crate::canonical;
use crate::catalogue;
use crate::error::UcumError;
use crate::parser;

/// Whether `from` and `to` share a dimension and could be converted between
/// (ignoring the stricter arbitrary-unit identity rule that `convert` also
/// enforces -- two different arbitrary units are dimensionally dimensionless
/// and so would otherwise look "convertible" here).
pub fn is_convertible(from: &str, to: &str) -> Result<bool, UcumError> {
    let a = canonical::canonicalize(from)?;
    let b = canonical::canonicalize(to)?;
    Ok(a.dimension == b.dimension)
}

/// Convert `value` expressed in `from` into the equivalent value in `to`.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, UcumError> {
    let a = canonical::canonicalize(from)?;
    let b = canonical::canonicalize(to)?;
    if a.dimension != b.dimension {
        return Err(UcumError::IncompatibleDimensions {
            from: a.dimension,
            to: b.dimension,
        });
    }
    check_arbitrary(from, to)?;

    let reference = match &a.special {
        Some(s) => s.to_reference(value),
        None => value * a.magnitude,
    };
    let result = match &b.special {
        Some(s) => s.from_reference(reference),
        None => reference / b.magnitude,
    };
    if !result.is_finite() {
        return Err(UcumError::NumericOverflow {
            operation: format!("convert {from} -> {to}"),
        });
    }
    Ok(result)
}

/// If `text` parses to a bare arbitrary-atom unit (no prefix, no exponent,
/// no composition), return its atom code.
fn arbitrary_atom(text: &str) -> Option<String> {
    let result = parser::parse(text);
    if !result.is_ok() {
        return None;
    }
    if let Expr::Unit { atom, .. } = result.expr? {
        if catalogue::atom(&atom).is_some_and(|a| a.is_arbitrary()) {
            return Some(atom);
        }
    }
    None
}

fn check_arbitrary(from: &str, to: &str) -> Result<(), UcumError> {
    let a = arbitrary_atom(from);
    let b = arbitrary_atom(to);
    match (a, b) {
        (None, None) => Ok(()),
        (Some(x), Some(y)) if x == y => Ok(()),
        (Some(x), Some(y)) => Err(UcumError::ArbitraryUnitMismatch { from: x, to: y }),
        (Some(x), None) => Err(UcumError::ArbitraryUnitMismatch {
            from: x,
            to: to.to_string(),
        }),
        (None, Some(y)) => Err(UcumError::ArbitraryUnitMismatch {
            from: from.to_string(),
            to: y,
        }),
    }
}
