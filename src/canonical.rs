//! Expression tree -> canonical form.
//!
//! A canonical form is `(magnitude, dimension, special?, annotations[])`. The
//! walk is a straightforward recursive descent over [`Expr`]; the one
//! subtlety is that ratio-derived atoms reference other UCUM expressions by
//! string (`ref_unit`), so canonicalization is reentrant -- guarded by a
//! fixed recursion bound rather than detecting cycles structurally.

use crate::ast::{BinaryOp, Expr};
use crate::catalogue::{self, AtomDef};
use crate::dimension::Dimension;
use crate::error::{Span, UcumError};
use crate::parser;
use crate::special::SpecialDescriptor;
use smallvec::SmallVec;

/// Most expressions carry zero or one annotation; inline storage for two
/// avoids a heap allocation for the common case.
pub type Annotations = SmallVec<[String; 2]>;

/// A UCUM unit expression reduced to a scalar magnitude, a dimension
/// vector, an optional special-function descriptor, and any annotations
/// collected along the way.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanonicalForm {
    pub magnitude: f64,
    pub dimension: Dimension,
    pub special: Option<SpecialDescriptor>,
    pub annotations: Annotations,
}

impl CanonicalForm {
    fn ratio(magnitude: f64, dimension: Dimension) -> Self {
        Self {
            magnitude,
            dimension,
            special: None,
            annotations: Annotations::new(),
        }
    }

    pub fn is_special(&self) -> bool {
        self.special.is_some()
    }
}

/// Re-parses a ratio-derived atom's definition up to this many times before
/// treating the chain as a catalogue bug.
const MAX_RECURSION_DEPTH: usize = 32;

/// Parse and canonicalize a UCUM expression in one step.
pub fn canonicalize(text: &str) -> Result<CanonicalForm, UcumError> {
    let result = parser::parse(text);
    if let Some(err) = result.errors.into_iter().next() {
        return Err(err);
    }
    let expr = result
        .expr
        .ok_or_else(|| UcumError::Syntax {
            message: "empty parse result".to_string(),
            span: Span::point(0),
        })?;
    let mut ctx = Canonicalizer { depth: 0 };
    ctx.eval(&expr)
}

struct Canonicalizer {
    depth: usize,
}

impl Canonicalizer {
    fn eval(&mut self, expr: &Expr) -> Result<CanonicalForm, UcumError> {
        match expr {
            Expr::Factor { value, annotation } => {
                let mut form = CanonicalForm::ratio(*value as f64, Dimension::ZERO);
                if let Some(a) = annotation {
                    form.annotations.push(a.clone());
                }
                Ok(form)
            }
            Expr::Unit {
                prefix,
                atom,
                exponent,
                annotation,
            } => {
                let mut form = self.eval_unit(prefix.as_deref(), atom)?;
                if let Some(exp) = exponent {
                    if exp.value != 1 {
                        if form.is_special() {
                            return Err(UcumError::SpecialExponent {
                                atom: atom.clone(),
                                span: Span::point(0),
                            });
                        }
                        form.magnitude = form.magnitude.powi(exp.value);
                        form.dimension = form.dimension.scale(exp.value);
                    }
                }
                if let Some(a) = annotation {
                    form.annotations.push(a.clone());
                }
                Ok(form)
            }
            Expr::Binary { op, left, right } => {
                let l = self.eval(left)?;
                let r = self.eval(right)?;
                if l.is_special() || r.is_special() {
                    return Err(UcumError::SpecialInComposition {
                        atom: "<compound>".to_string(),
                        span: Span::point(0),
                    });
                }
                let mut annotations = l.annotations;
                annotations.extend(r.annotations);
                let (magnitude, dimension) = match op {
                    BinaryOp::Mul => (l.magnitude * r.magnitude, l.dimension.add(r.dimension)),
                    BinaryOp::Div => (l.magnitude / r.magnitude, l.dimension.sub(r.dimension)),
                };
                Ok(CanonicalForm {
                    magnitude,
                    dimension,
                    special: None,
                    annotations,
                })
            }
            Expr::Unary { operand } => {
                let inner = self.eval(operand)?;
                if inner.is_special() {
                    return Err(UcumError::SpecialInComposition {
                        atom: "<unary>".to_string(),
                        span: Span::point(0),
                    });
                }
                Ok(CanonicalForm {
                    magnitude: 1.0 / inner.magnitude,
                    dimension: inner.dimension.negate(),
                    special: None,
                    annotations: inner.annotations,
                })
            }
            Expr::Group { inner } => self.eval(inner),
        }
    }

    fn eval_unit(&mut self, prefix: Option<&str>, atom_code: &str) -> Result<CanonicalForm, UcumError> {
        let atom = catalogue::atom(atom_code).ok_or_else(|| UcumError::UnknownUnit {
            atom: atom_code.to_string(),
            span: Span::point(0),
        })?;

        let prefix_factor = match prefix {
            Some(p) => {
                if !atom.is_metric {
                    return Err(UcumError::PrefixNotAllowed {
                        prefix: p.to_string(),
                        atom: atom_code.to_string(),
                        span: Span::point(0),
                    });
                }
                catalogue::prefix(p)
                    .ok_or_else(|| UcumError::UnknownPrefix {
                        prefix: p.to_string(),
                        span: Span::point(0),
                    })?
                    .factor
            }
            None => 1.0,
        };

        match &atom.definition {
            AtomDef::Base(axis) => Ok(CanonicalForm::ratio(
                prefix_factor,
                catalogue::base_dimension(*axis),
            )),
            AtomDef::Ratio { factor, ref_unit } => {
                let inner = self.canonicalize_ref(atom_code, ref_unit)?;
                Ok(CanonicalForm::ratio(
                    prefix_factor * factor * inner.magnitude,
                    inner.dimension,
                ))
            }
            AtomDef::Special {
                function,
                factor,
                ref_unit,
            } => {
                if prefix.is_some() {
                    return Err(UcumError::PrefixNotAllowed {
                        prefix: prefix.unwrap().to_string(),
                        atom: atom_code.to_string(),
                        span: Span::point(0),
                    });
                }
                let inner = self.canonicalize_ref(atom_code, ref_unit)?;
                Ok(CanonicalForm {
                    magnitude: 1.0,
                    dimension: inner.dimension,
                    special: Some(SpecialDescriptor::new(*function, factor * inner.magnitude)),
                    annotations: Annotations::new(),
                })
            }
            AtomDef::Arbitrary => Ok(CanonicalForm::ratio(1.0, Dimension::ZERO)),
        }
    }

    /// Re-parse and recursively canonicalize a ratio/special atom's
    /// `ref_unit` definition string, guarded by [`MAX_RECURSION_DEPTH`].
    fn canonicalize_ref(&mut self, owning_atom: &str, ref_unit: &str) -> Result<CanonicalForm, UcumError> {
        self.depth += 1;
        if self.depth > MAX_RECURSION_DEPTH {
            self.depth -= 1;
            return Err(UcumError::RecursionLimit {
                atom: owning_atom.to_string(),
            });
        }
        let result = parser::parse(ref_unit);
        let out = if let Some(err) = result.errors.into_iter().next() {
            Err(err)
        } else {
            let expr = result.expr.expect("parser always returns a tree");
            self.eval(&expr)
        };
        self.depth -= 1;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Axis;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} !~= {b}");
    }

    #[test]
    fn kg_canonicalizes_to_1000_grams_worth_of_mass() {
        let form = canonicalize("kg").unwrap();
        approx(form.magnitude, 1000.0);
        assert_eq!(form.dimension, Dimension::base(Axis::Mass));
    }

    #[test]
    fn newton_reduces_to_mass_length_time_minus_two() {
        let form = canonicalize("N").unwrap();
        approx(form.magnitude, 1000.0); // kg.m/s2 expressed in g.m/s2
        assert_eq!(
            form.dimension,
            Dimension::base(Axis::Mass)
                .add(Dimension::base(Axis::Length))
                .sub(Dimension::base(Axis::Time).scale(2))
        );
    }

    #[test]
    fn compound_expression_matches_kg_m_per_s2() {
        let direct = canonicalize("kg.m/s2").unwrap();
        let via_newton = canonicalize("N").unwrap();
        approx(direct.magnitude, via_newton.magnitude);
        assert_eq!(direct.dimension, via_newton.dimension);
    }

    #[test]
    fn annotation_is_inert() {
        let bare = canonicalize("kg/dL").unwrap();
        let annotated = canonicalize("kg{tot}/dL").unwrap();
        approx(bare.magnitude, annotated.magnitude);
        assert_eq!(bare.dimension, annotated.dimension);
        assert_eq!(annotated.annotations.as_slice(), ["tot".to_string()]);
    }

    #[test]
    fn celsius_is_special_and_isolated() {
        let form = canonicalize("Cel").unwrap();
        assert!(form.is_special());
        assert_eq!(form.dimension, Dimension::base(Axis::Temperature));
    }

    #[test]
    fn special_unit_rejected_inside_composition() {
        let err = canonicalize("Cel.m").unwrap_err();
        assert_eq!(err.kind_tag(), "special_in_composition");
    }

    #[test]
    fn special_unit_rejected_with_nontrivial_exponent() {
        let err = canonicalize("Cel2").unwrap_err();
        assert_eq!(err.kind_tag(), "special_exponent");
    }

    #[test]
    fn nonmetric_atom_rejects_prefix() {
        let err = canonicalize("kmin").unwrap_err();
        assert_eq!(err.kind_tag(), "prefix_not_allowed");
    }

    #[test]
    fn unknown_unit_is_reported() {
        let err = canonicalize("frobnicate").unwrap_err();
        assert_eq!(err.kind_tag(), "unknown_unit");
    }

    #[test]
    fn left_associative_division_matches_dimension_subtraction() {
        let form = canonicalize("m/s/s").unwrap();
        assert_eq!(
            form.dimension,
            Dimension::base(Axis::Length).sub(Dimension::base(Axis::Time).scale(2))
        );
    }

    #[test]
    fn inch_to_cm_factor_is_2_54() {
        let inch = canonicalize("[in_i]").unwrap();
        let cm = canonicalize("cm").unwrap();
        approx(inch.magnitude / cm.magnitude, 2.54);
    }
}
