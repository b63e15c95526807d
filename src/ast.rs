//! The UCUM expression tree: a tagged variant mirroring the unit grammar,
//! kept deliberately small so exhaustive `match` replaces dynamic field
//! checks.

/// How an exponent was spelled in the source text. Carried purely for
/// loss-less round-trip printing; it has no effect on dimension or
/// magnitude arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExponentFormat {
    /// `m2`
    Bare,
    /// `m^2` / `m^-2`
    Caret,
    /// `m+2` / `m-2`
    Signed,
}

/// An integer exponent together with the textual form it was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exponent {
    pub value: i32,
    pub format: ExponentFormat,
}

impl Exponent {
    pub const fn bare(value: i32) -> Self {
        Self {
            value,
            format: ExponentFormat::Bare,
        }
    }
}

/// Binary operators over unit expressions; UCUM gives `.` and `/` equal
/// precedence and left associativity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    Mul,
    Div,
}

/// A parsed UCUM unit expression.
///
/// Annotations (`{...}` text) are carried verbatim on the node they were
/// attached to; they are semantically inert -- the canonicalizer collects
/// them into a flat list and never inspects their content.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// A simple unit: optional prefix, an atom code, an optional exponent,
    /// and an optional annotation. The lexer cannot tell `prefix` apart from
    /// `atom` -- that split happens in the parser via catalogue lookup.
    Unit {
        prefix: Option<String>,
        atom: String,
        exponent: Option<Exponent>,
        annotation: Option<String>,
    },
    /// An integer literal factor, e.g. the `10` in `10*6` or a standalone
    /// digit run like `2` in `2.m`.
    Factor {
        value: i64,
        annotation: Option<String>,
    },
    /// `left op right`, e.g. `kg.m` or `kg/s2`.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// A leading unary `/term`, meaning `1/term`.
    Unary { operand: Box<Expr> },
    /// A parenthesized sub-expression, kept distinct from its contents so
    /// display can re-insert the parentheses it needs and no more.
    Group { inner: Box<Expr> },
}

impl Expr {
    pub fn unit(atom: impl Into<String>) -> Self {
        Expr::Unit {
            prefix: None,
            atom: atom.into(),
            exponent: None,
            annotation: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        if let Expr::Unit { prefix: p, .. } = &mut self {
            *p = Some(prefix.into());
        }
        self
    }

    pub fn with_exponent(mut self, exponent: Exponent) -> Self {
        if let Expr::Unit { exponent: e, .. } = &mut self {
            *e = Some(exponent);
        }
        self
    }

    pub fn mul(left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op: BinaryOp::Mul,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn div(left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op: BinaryOp::Div,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
