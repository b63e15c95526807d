//! Arithmetic over `(value, unit)` pairs.
//!
//! Addition and subtraction convert the right-hand operand into the
//! left-hand operand's unit and combine the numeric values; multiplication
//! and division instead combine the unit *expressions* syntactically
//! (`"N".multiply("m")` yields the string `"(N).(m)"`, never evaluating to a
//! new atom) since UCUM has no general mechanism for naming a compound unit's
//! atom. Neither side of a multiply/divide/pow (other than `k == 1`) may be
//! special, since special units have no linear algebra to combine.

use crate::canonical;
use crate::converter;
use crate::error::{Span, UcumError};

/// A numeric value paired with the UCUM unit expression it is measured in.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

impl Quantity {
    /// Construct a quantity, validating that `unit` resolves to a canonical
    /// form (unknown atoms, disallowed prefixes, and malformed special-unit
    /// usage are all rejected here rather than deferred to first use).
    pub fn new(value: f64, unit: impl Into<String>) -> Result<Self, UcumError> {
        let unit = unit.into();
        canonical::canonicalize(&unit)?;
        Ok(Self { value, unit })
    }

    pub fn add(&self, other: &Quantity) -> Result<Quantity, UcumError> {
        let converted = converter::convert(other.value, &other.unit, &self.unit)?;
        Ok(Quantity {
            value: self.value + converted,
            unit: self.unit.clone(),
        })
    }

    pub fn subtract(&self, other: &Quantity) -> Result<Quantity, UcumError> {
        let converted = converter::convert(other.value, &other.unit, &self.unit)?;
        Ok(Quantity {
            value: self.value - converted,
            unit: self.unit.clone(),
        })
    }

    pub fn multiply(&self, other: &Quantity) -> Result<Quantity, UcumError> {
        reject_special(&self.unit)?;
        reject_special(&other.unit)?;
        Ok(Quantity {
            value: self.value * other.value,
            unit: format!("({}).({})", self.unit, other.unit),
        })
    }

    pub fn divide(&self, other: &Quantity) -> Result<Quantity, UcumError> {
        reject_special(&self.unit)?;
        reject_special(&other.unit)?;
        Ok(Quantity {
            value: self.value / other.value,
            unit: format!("({})/({})", self.unit, other.unit),
        })
    }

    /// Multiply by a unitless scalar; the unit is unaffected.
    pub fn scale(&self, scalar: f64) -> Quantity {
        Quantity {
            value: self.value * scalar,
            unit: self.unit.clone(),
        }
    }

    /// Divide by a unitless scalar; the unit is unaffected.
    pub fn scale_down(&self, scalar: f64) -> Quantity {
        Quantity {
            value: self.value / scalar,
            unit: self.unit.clone(),
        }
    }

    /// Raise the quantity to an integer power, combining both value and unit.
    /// A special unit can only be raised to `1` (a no-op), matching the rule
    /// that forbids it from appearing under any other exponent.
    pub fn pow(&self, k: i32) -> Result<Quantity, UcumError> {
        let form = canonical::canonicalize(&self.unit)?;
        if form.is_special() && k != 1 {
            return Err(UcumError::SpecialExponent {
                atom: self.unit.clone(),
                span: Span::point(0),
            });
        }
        if k == 1 {
            return Ok(self.clone());
        }
        Ok(Quantity {
            value: self.value.powi(k),
            unit: format!("({})^{k}", self.unit),
        })
    }
}

fn reject_special(unit: &str) -> Result<(), UcumError> {
    let form = canonical::canonicalize(unit)?;
    if form.is_special() {
        return Err(UcumError::SpecialInComposition {
            atom: unit.to_string(),
            span: Span::point(0),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} !~= {b}");
    }

    #[test]
    fn add_converts_right_operand_into_left_units() {
        let a = Quantity::new(1.0, "m").unwrap();
        let b = Quantity::new(50.0, "cm").unwrap();
        let sum = a.add(&b).unwrap();
        approx(sum.value, 1.5);
        assert_eq!(sum.unit, "m");
    }

    #[test]
    fn subtract_keeps_left_units() {
        let a = Quantity::new(2.0, "kg").unwrap();
        let b = Quantity::new(500.0, "g").unwrap();
        let diff = a.subtract(&b).unwrap();
        approx(diff.value, 1.5);
        assert_eq!(diff.unit, "kg");
    }

    #[test]
    fn add_rejects_incompatible_dimensions() {
        let a = Quantity::new(1.0, "m").unwrap();
        let b = Quantity::new(1.0, "s").unwrap();
        let err = a.add(&b).unwrap_err();
        assert_eq!(err.kind_tag(), "incompatible_dimensions");
    }

    #[test]
    fn multiply_builds_syntactic_compound_unit() {
        let force = Quantity::new(5.0, "N").unwrap();
        let distance = Quantity::new(2.0, "m").unwrap();
        let work = force.multiply(&distance).unwrap();
        approx(work.value, 10.0);
        assert_eq!(work.unit, "(N).(m)");
    }

    #[test]
    fn divide_builds_syntactic_compound_unit() {
        let distance = Quantity::new(10.0, "m").unwrap();
        let time = Quantity::new(2.0, "s").unwrap();
        let speed = distance.divide(&time).unwrap();
        approx(speed.value, 5.0);
        assert_eq!(speed.unit, "(m)/(s)");
    }

    #[test]
    fn multiply_rejects_special_unit_operand() {
        let temp = Quantity::new(20.0, "Cel").unwrap();
        let factor = Quantity::new(2.0, "1").unwrap();
        let err = temp.multiply(&factor).unwrap_err();
        assert_eq!(err.kind_tag(), "special_in_composition");
    }

    #[test]
    fn pow_combines_value_and_unit() {
        let side = Quantity::new(3.0, "m").unwrap();
        let area = side.pow(2).unwrap();
        approx(area.value, 9.0);
        assert_eq!(area.unit, "(m)^2");
    }

    #[test]
    fn pow_one_on_special_unit_is_identity() {
        let temp = Quantity::new(20.0, "Cel").unwrap();
        let same = temp.pow(1).unwrap();
        assert_eq!(same, temp);
    }

    #[test]
    fn pow_other_than_one_on_special_unit_errors() {
        let temp = Quantity::new(20.0, "Cel").unwrap();
        let err = temp.pow(2).unwrap_err();
        assert_eq!(err.kind_tag(), "special_exponent");
    }

    #[test]
    fn scale_preserves_unit() {
        let mass = Quantity::new(2.0, "kg").unwrap();
        let doubled = mass.scale(2.0);
        approx(doubled.value, 4.0);
        assert_eq!(doubled.unit, "kg");
    }
}
