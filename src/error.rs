//! Structured diagnostics: the closed error- and warning-kind sets, and the
//! `thiserror`-derived [`UcumError`] that every fallible public function
//! returns through `Result<T, UcumError>`.

use crate::dimension::Dimension;
use core::fmt;

/// A byte range into the original input string, used to anchor diagnostics.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn point(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Render a caret pointing at this span underneath `source`.
    pub fn display_in(&self, source: &str) -> String {
        let end = self.end.min(source.len());
        let start = self.start.min(end);
        let caret_len = (end - start).max(1);
        format!("{}\n{}{}", source, " ".repeat(start), "^".repeat(caret_len))
    }
}

/// A non-fatal diagnostic: surfaced to the caller, never silently dropped or
/// silently promoted to an error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
    pub span: Span,
    pub suggestion: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WarningKind {
    DeprecatedSyntax,
    Ambiguous,
}

/// The closed set of error kinds, realized as a `thiserror` enum so each
/// variant is both machine-matchable and carries its own `Display` message.
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UcumError {
    #[error("syntax error at {span:?}: {message}")]
    Syntax { message: String, span: Span },

    #[error("unexpected token '{found}' at {span:?}, expected {expected}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String, span: Span },

    #[error("invalid number literal '{text}' at {span:?}")]
    InvalidNumber { text: String, span: Span },

    #[error("unknown unit atom '{atom}'")]
    UnknownUnit { atom: String, span: Span },

    #[error("unknown prefix '{prefix}'")]
    UnknownPrefix { prefix: String, span: Span },

    #[error("prefix '{prefix}' is not allowed on non-metric atom '{atom}'")]
    PrefixNotAllowed {
        prefix: String,
        atom: String,
        span: Span,
    },

    #[error("special unit '{atom}' cannot appear inside a compound expression")]
    SpecialInComposition { atom: String, span: Span },

    #[error("special unit '{atom}' cannot be raised to an exponent other than 1")]
    SpecialExponent { atom: String, span: Span },

    #[error("incompatible dimensions: {from} is not convertible to {to}")]
    IncompatibleDimensions { from: Dimension, to: Dimension },

    #[error("arbitrary unit '{from}' is not interconvertible with '{to}'")]
    ArbitraryUnitMismatch { from: String, to: String },

    #[error("numeric overflow during {operation}")]
    NumericOverflow { operation: String },

    /// Recursion bound (see design notes on ratio-atom re-parsing) exceeded
    /// while resolving an atom's reference definition; reported as
    /// `unknown_unit` per the recursion-depth guard, carrying the atom that
    /// triggered the cutoff.
    #[error("recursion limit exceeded resolving unit '{atom}'")]
    RecursionLimit { atom: String },
}

impl UcumError {
    /// The closed-set string tag for this error kind (`"syntax"`,
    /// `"unknown_unit"`, ...), useful for callers that want to match on a
    /// stable string rather than the Rust variant shape.
    pub fn kind_tag(&self) -> &'static str {
        match self {
            UcumError::Syntax { .. } => "syntax",
            UcumError::UnexpectedToken { .. } => "unexpected_token",
            UcumError::UnexpectedEof { .. } => "unexpected_eof",
            UcumError::InvalidNumber { .. } => "invalid_number",
            UcumError::UnknownUnit { .. } | UcumError::RecursionLimit { .. } => "unknown_unit",
            UcumError::UnknownPrefix { .. } => "unknown_prefix",
            UcumError::PrefixNotAllowed { .. } => "prefix_not_allowed",
            UcumError::SpecialInComposition { .. } => "special_in_composition",
            UcumError::SpecialExponent { .. } => "special_exponent",
            UcumError::IncompatibleDimensions { .. } => "incompatible_dimensions",
            UcumError::ArbitraryUnitMismatch { .. } => "arbitrary_unit_mismatch",
            UcumError::NumericOverflow { .. } => "numeric_overflow",
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            UcumError::Syntax { span, .. }
            | UcumError::UnexpectedToken { span, .. }
            | UcumError::UnexpectedEof { span, .. }
            | UcumError::InvalidNumber { span, .. }
            | UcumError::UnknownUnit { span, .. }
            | UcumError::UnknownPrefix { span, .. }
            | UcumError::PrefixNotAllowed { span, .. }
            | UcumError::SpecialInComposition { span, .. }
            | UcumError::SpecialExponent { span, .. } => Some(*span),
            _ => None,
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

pub type UcumResult<T> = Result<T, UcumError>;
