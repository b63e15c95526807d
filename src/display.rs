//! Re-printing a parsed expression tree.
//!
//! `display` never re-canonicalizes or reorders factors -- it walks the tree
//! the parser produced and re-emits it verbatim, changing only exponent
//! spelling, and only when [`DisplayOptions`] asks for that. Each [`Exponent`]
//! already carries the format it was written in, so the default
//! (`exponent_format: None`) is a lossless round trip.

use crate::ast::{BinaryOp, Exponent, ExponentFormat, Expr};
use crate::error::UcumError;
use crate::parser;

/// Controls how exponents are re-printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// `None` (the default) keeps each exponent's own recorded format.
    /// `Some(format)` forces every exponent in the output to that format,
    /// regardless of how the source text originally spelled it.
    pub exponent_format: Option<ExponentFormat>,
}

/// Parse `text` and re-print it, honoring `options`.
pub fn display(text: &str, options: DisplayOptions) -> Result<String, UcumError> {
    let result = parser::parse(text);
    if let Some(err) = result.errors.into_iter().next() {
        return Err(err);
    }
    let expr = result.expr.expect("parser always returns a tree");
    Ok(print_expr(&expr, &options))
}

fn print_expr(expr: &Expr, options: &DisplayOptions) -> String {
    match expr {
        Expr::Factor { value, annotation } => with_annotation(value.to_string(), annotation),
        Expr::Unit {
            prefix,
            atom,
            exponent,
            annotation,
        } => {
            let mut s = String::new();
            if let Some(p) = prefix {
                s.push_str(p);
            }
            s.push_str(atom);
            if let Some(exp) = exponent {
                s.push_str(&print_exponent(exp, options));
            }
            with_annotation(s, annotation)
        }
        Expr::Binary { op, left, right } => {
            let sep = match op {
                BinaryOp::Mul => '.',
                BinaryOp::Div => '/',
            };
            format!("{}{sep}{}", print_expr(left, options), print_expr(right, options))
        }
        Expr::Unary { operand } => format!("/{}", print_expr(operand, options)),
        Expr::Group { inner } => format!("({})", print_expr(inner, options)),
    }
}

fn print_exponent(exp: &Exponent, options: &DisplayOptions) -> String {
    let format = options.exponent_format.unwrap_or(exp.format);
    match format {
        ExponentFormat::Bare => format!("{}", exp.value),
        ExponentFormat::Caret => format!("^{}", exp.value),
        ExponentFormat::Signed if exp.value >= 0 => format!("+{}", exp.value),
        ExponentFormat::Signed => format!("{}", exp.value),
    }
}

fn with_annotation(base: String, annotation: &Option<String>) -> String {
    match annotation {
        Some(a) => format!("{base}{{{a}}}"),
        None => base,
    }
}
