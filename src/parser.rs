//! Tokens -> expression tree.
//!
//! The grammar is flat and left-associative: `term` is a chain of
//! `component`s joined by `.`/`/` with equal precedence, so `a/b/c` means
//! `(a/b)/c`. Diagnostics are structured and the parser keeps going after an
//! error (local recovery to the next `.`, `/`, or `)`) so one call can surface
//! more than one problem rather than bailing on the first mistake.

use crate::ast::{BinaryOp, Exponent, ExponentFormat, Expr};
use crate::catalogue;
use crate::error::{Span, UcumError, Warning, WarningKind};
use crate::lexer::{Lexer, Token, TokenKind};

/// The result of a single `parse` call: an optional tree plus every
/// diagnostic collected along the way, ordered by starting byte position.
#[derive(Clone, Debug)]
pub struct ParseResult {
    pub expr: Option<Expr>,
    pub errors: Vec<UcumError>,
    pub warnings: Vec<Warning>,
    pub input: String,
}

impl ParseResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Parse a UCUM unit expression, collecting all diagnostics along the way.
///
/// The micro sign (U+00B5) and Greek mu (U+03BC) are normalized to ASCII `u`
/// before lexing, so `µg`/`μg` tokenize exactly like `ug` and the usual
/// prefix/atom split in [`resolve_atom`] applies uniformly; the lexer itself
/// never sees non-ASCII input (see its module doc comment).
pub fn parse(input: &str) -> ParseResult {
    let normalized;
    let source: &str = if input.contains(['\u{b5}', '\u{3bc}']) {
        normalized = input.replace(['\u{b5}', '\u{3bc}'], "u");
        &normalized
    } else {
        input
    };

    let mut parser = Parser::new(source);
    let expr = parser.parse_main_term();
    if !matches!(parser.current.kind, TokenKind::Eof) {
        let found = parser.describe_current();
        let span = parser.current.span;
        parser.error(UcumError::UnexpectedToken {
            expected: "end of input".to_string(),
            found,
            span,
        });
    }
    ParseResult {
        expr: Some(expr),
        errors: parser.errors,
        warnings: parser.warnings,
        input: input.to_string(),
    }
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
    input: &'a str,
    errors: Vec<UcumError>,
    warnings: Vec<Warning>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        let lexer = Lexer::new(input);
        let mut p = Parser {
            lexer,
            current: Token {
                kind: TokenKind::Eof,
                span: Span::point(0),
            },
            input,
            errors: Vec::new(),
            warnings: Vec::new(),
        };
        p.bump();
        p
    }

    /// Advance to the next valid token, recording (and skipping past) any
    /// lex errors encountered on the way.
    fn bump(&mut self) {
        loop {
            match self.lexer.next_token() {
                Ok(tok) => {
                    self.current = tok;
                    return;
                }
                Err(e) => self.errors.push(e),
            }
        }
    }

    fn error(&mut self, err: UcumError) {
        self.errors.push(err);
    }

    fn recover_to_separator(&mut self) {
        loop {
            match self.current.kind {
                TokenKind::Dot | TokenKind::Slash | TokenKind::RParen | TokenKind::Eof => return,
                _ => self.bump(),
            }
        }
    }

    fn parse_main_term(&mut self) -> Expr {
        if matches!(self.current.kind, TokenKind::Slash) {
            self.bump();
            let operand = self.parse_term();
            return Expr::Unary {
                operand: Box::new(operand),
            };
        }
        self.parse_term()
    }

    fn parse_term(&mut self) -> Expr {
        let mut left = self.parse_component();
        loop {
            let op = match self.current.kind {
                TokenKind::Dot => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => break,
            };
            self.bump();
            let right = self.parse_component();
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        left
    }

    /// `component := '(' term ')' | '{' annotation '}' | special_unit
    ///             | DIGIT+ ['{' annotation '}'] | annotatable`
    fn parse_component(&mut self) -> Expr {
        match self.current.kind {
            TokenKind::LParen => {
                self.bump();
                let inner = self.parse_term();
                self.expect_rparen();
                Expr::Group {
                    inner: Box::new(inner),
                }
            }
            TokenKind::Annotation(text) => {
                self.check_annotation_length(text);
                let annotation = text.to_string();
                self.bump();
                Expr::Factor {
                    value: 1,
                    annotation: Some(annotation),
                }
            }
            TokenKind::Digits(d) if d == "10" && self.peeks_ten_power() => self.parse_ten_power(),
            TokenKind::Digits(d) => {
                let span = self.current.span;
                let value: i64 = d.parse().unwrap_or_else(|_| {
                    self.errors.push(UcumError::InvalidNumber {
                        text: d.to_string(),
                        span,
                    });
                    1
                });
                self.bump();
                let annotation = self.parse_optional_annotation();
                Expr::Factor { value, annotation }
            }
            TokenKind::Atom(text) => self.parse_annotatable(text),
            TokenKind::Eof => {
                self.error(UcumError::UnexpectedEof {
                    expected: "a unit, number, or '('".to_string(),
                    span: self.current.span,
                });
                Expr::Factor {
                    value: 1,
                    annotation: None,
                }
            }
            _ => {
                let found = self.describe_current();
                let span = self.current.span;
                self.error(UcumError::UnexpectedToken {
                    expected: "a unit, number, or '('".to_string(),
                    found,
                    span,
                });
                self.recover_to_separator();
                Expr::Factor {
                    value: 1,
                    annotation: None,
                }
            }
        }
    }

    /// Looks ahead (without consuming) to see whether the digit run `10` is
    /// immediately followed by `*` or `^`, which makes it the special atom
    /// `10*`/`10^` rather than a plain integer factor.
    fn peeks_ten_power(&self) -> bool {
        let end = self.current.span.end;
        matches!(self.input.as_bytes().get(end), Some(b'*') | Some(b'^'))
    }

    fn parse_ten_power(&mut self) -> Expr {
        self.bump(); // consume "10"
        let marker = match self.current.kind {
            TokenKind::Star => '*',
            TokenKind::Caret => '^',
            _ => unreachable!("peeks_ten_power guarantees Star or Caret"),
        };
        self.bump(); // consume '*' or '^'
        let atom = format!("10{marker}");
        let exponent = self.parse_optional_exponent();
        let annotation = self.parse_optional_annotation();
        Expr::Unit {
            prefix: None,
            atom,
            exponent,
            annotation,
        }
    }

    /// `annotatable := simple_unit ['{' annotation '}']`
    /// `simple_unit := ATOM [exponent]`
    fn parse_annotatable(&mut self, text: &str) -> Expr {
        let (prefix, atom) = resolve_atom(text);
        self.bump();
        let exponent = self.parse_optional_exponent();
        let annotation = self.parse_optional_annotation();
        Expr::Unit {
            prefix,
            atom,
            exponent,
            annotation,
        }
    }

    fn parse_optional_annotation(&mut self) -> Option<String> {
        if let TokenKind::Annotation(text) = self.current.kind {
            self.check_annotation_length(text);
            let out = text.to_string();
            self.bump();
            Some(out)
        } else {
            None
        }
    }

    fn check_annotation_length(&mut self, text: &str) {
        if text.len() > 50 {
            self.warnings.push(Warning {
                kind: WarningKind::Ambiguous,
                message: format!("annotation '{text}' is unusually long"),
                span: self.current.span,
                suggestion: Some("shorten the annotation".to_string()),
            });
        }
    }

    /// `exponent := DIGIT+ | ('+'|'-') DIGIT+ | '^' ['+'|'-'] DIGIT+`
    fn parse_optional_exponent(&mut self) -> Option<Exponent> {
        match self.current.kind {
            TokenKind::Digits(d) => {
                let value = self.parse_digits_as_i32(d);
                self.bump();
                Some(Exponent {
                    value,
                    format: ExponentFormat::Bare,
                })
            }
            TokenKind::Plus | TokenKind::Minus => {
                let negative = matches!(self.current.kind, TokenKind::Minus);
                self.bump();
                let value = self.require_digits_for_exponent();
                Some(Exponent {
                    value: if negative { -value } else { value },
                    format: ExponentFormat::Signed,
                })
            }
            TokenKind::Caret => {
                self.bump();
                let negative = match self.current.kind {
                    TokenKind::Minus => {
                        self.bump();
                        true
                    }
                    TokenKind::Plus => {
                        self.bump();
                        false
                    }
                    _ => false,
                };
                let value = self.require_digits_for_exponent();
                Some(Exponent {
                    value: if negative { -value } else { value },
                    format: ExponentFormat::Caret,
                })
            }
            _ => None,
        }
    }

    fn require_digits_for_exponent(&mut self) -> i32 {
        match self.current.kind {
            TokenKind::Digits(d) => {
                let value = self.parse_digits_as_i32(d);
                self.bump();
                value
            }
            _ => {
                let found = self.describe_current();
                let span = self.current.span;
                self.error(UcumError::UnexpectedToken {
                    expected: "digits".to_string(),
                    found,
                    span,
                });
                1
            }
        }
    }

    fn parse_digits_as_i32(&mut self, d: &str) -> i32 {
        d.parse().unwrap_or_else(|_| {
            self.errors.push(UcumError::InvalidNumber {
                text: d.to_string(),
                span: self.current.span,
            });
            1
        })
    }

    fn expect_rparen(&mut self) {
        if matches!(self.current.kind, TokenKind::RParen) {
            self.bump();
        } else {
            let found = self.describe_current();
            let span = self.current.span;
            self.error(UcumError::UnexpectedToken {
                expected: "')'".to_string(),
                found,
                span,
            });
            self.recover_to_separator();
        }
    }

    fn describe_current(&self) -> String {
        match self.current.kind {
            TokenKind::Dot => ".".to_string(),
            TokenKind::Slash => "/".to_string(),
            TokenKind::LParen => "(".to_string(),
            TokenKind::RParen => ")".to_string(),
            TokenKind::Caret => "^".to_string(),
            TokenKind::Plus => "+".to_string(),
            TokenKind::Minus => "-".to_string(),
            TokenKind::Star => "*".to_string(),
            TokenKind::Digits(d) => d.to_string(),
            TokenKind::Atom(a) => a.to_string(),
            TokenKind::Annotation(a) => format!("{{{a}}}"),
            TokenKind::Eof => "<eof>".to_string(),
        }
    }
}

/// Split an `ATOM` token's text into an optional prefix code and an atom
/// code.
///
/// Order of attempts: the whole text as an atom first (avoids `Pa` being
/// split into prefix `P` + atom `a`, or `cd` into `c` + `d`); then the
/// two-letter prefix `da`; then a one-letter prefix. If none of these leave
/// a recognized atom, the whole text is taken as the atom code verbatim --
/// unknown atoms are a canonicalization-time failure (`unknown_unit`), not a
/// parse-time one.
fn resolve_atom(text: &str) -> (Option<String>, String) {
    if text.starts_with('[') || text == "%" || text == "'" {
        return (None, text.to_string());
    }
    if catalogue::atom(text).is_some() {
        return (None, text.to_string());
    }
    if text.len() > 2 && text.starts_with("da") {
        let rest = &text[2..];
        if catalogue::prefix("da").is_some() && catalogue::atom(rest).is_some() {
            return (Some("da".to_string()), rest.to_string());
        }
    }
    if text.len() > 1 {
        let (p, rest) = text.split_at(1);
        if catalogue::prefix(p).is_some() && catalogue::atom(rest).is_some() {
            return (Some(p.to_string()), rest.to_string());
        }
    }
    (None, text.to_string())
}
