//! A UCUM (Unified Code for Units of Measure) parsing, canonicalization and
//! conversion engine.
//!
//! The pipeline is: [`lexer`] tokenizes, [`parser`] builds an [`ast::Expr`]
//! tree, [`canonical`] reduces a tree to a scalar magnitude plus dimension
//! vector (folding in any [`special`] non-ratio scale function), and
//! [`converter`] uses two canonical forms to convert a value between them.
//! [`quantity`] layers value-carrying arithmetic on top, and [`validator`]
//! and [`display`] provide diagnostics and lossless re-printing.

mod ast;
mod canonical;
mod catalogue;
mod converter;
mod dimension;
mod display;
mod error;
mod lexer;
mod parser;
mod quantity;
mod special;
mod validator;

pub use crate::ast::{BinaryOp, Exponent, ExponentFormat, Expr};
pub use crate::canonical::{Annotations, CanonicalForm};
pub use crate::catalogue::{Atom, AtomDef, Prefix};
pub use crate::dimension::{Axis, Dimension, AXES};
pub use crate::display::DisplayOptions;
pub use crate::error::{Span, UcumError, UcumResult, Warning, WarningKind};
pub use crate::parser::ParseResult;
pub use crate::quantity::Quantity;
pub use crate::special::{SpecialDescriptor, SpecialFunction};
pub use crate::validator::{UnitInfo, UnitKind, ValidationResult};

/// Parse a UCUM unit expression into an [`ast::Expr`] tree, collecting every
/// diagnostic encountered rather than bailing on the first one.
pub fn parse(text: &str) -> ParseResult {
    parser::parse(text)
}

/// Validate a unit expression: it must parse, every atom and prefix must
/// resolve, and every special unit must stand alone.
pub fn validate(text: &str) -> ValidationResult {
    validator::validate(text)
}

/// Reduce a unit expression to its canonical form: a scalar magnitude, a
/// dimension vector, and (for special units) a scale-function descriptor.
pub fn canonicalize(text: &str) -> Result<CanonicalForm, UcumError> {
    canonical::canonicalize(text)
}

/// Whether `from` and `to` share a dimension vector and so could be
/// converted between.
pub fn is_convertible(from: &str, to: &str) -> Result<bool, UcumError> {
    converter::is_convertible(from, to)
}

/// Convert `value`, expressed in `from`, into the equivalent value in `to`.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, UcumError> {
    converter::convert(value, from, to)
}

/// Construct a [`Quantity`]: a value paired with a validated unit expression.
pub fn quantity(value: f64, unit: impl Into<String>) -> Result<Quantity, UcumError> {
    Quantity::new(value, unit.into())
}

/// Describe a unit expression: its catalogue metadata (for a single atom) or
/// dimensional shape (for a compound expression).
pub fn info(text: &str) -> Result<UnitInfo, UcumError> {
    validator::info(text)
}

/// Re-print a parsed unit expression, honoring `options`'s exponent-format
/// override and otherwise round-tripping the source verbatim.
pub fn display(text: &str, options: DisplayOptions) -> Result<String, UcumError> {
    display::display(text, options)
}

/// Whether `text` resolves to a single special (non-ratio) unit atom.
pub fn is_special_unit(text: &str) -> Result<bool, UcumError> {
    validator::is_special_unit(text)
}

/// Whether `text` resolves to a single arbitrary (non-interconvertible)
/// unit atom.
pub fn is_arbitrary_unit(text: &str) -> Result<bool, UcumError> {
    validator::is_arbitrary_unit(text)
}
