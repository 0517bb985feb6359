//! Shared error types for the Monkey interpreter.
//!
//! [`ParseError`] covers the parser's error channel (§4.2.5 / §7.1); each
//! variant's `Display` impl renders exactly the message shape the parser
//! accumulates into its `errors()` list. [`EvalError`] covers the
//! evaluator's error channel (§4.3 / §4.4 / §7.2); the evaluator converts
//! a variant into an `Object::Error` sentinel rather than formatting
//! strings ad hoc, so every message lives here and can be unit tested in
//! isolation from the dispatch logic that produces it.

use std::num::ParseIntError;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {got} instead")]
    ExpectedToken { expected: String, got: String },

    #[error("no prefix parse function for {found} found")]
    NoPrefixParseFn { found: String },

    #[error("could not parse {literal:?} as integer: {source}")]
    InvalidInteger {
        literal: String,
        #[source]
        source: IntegerParseError,
    },
}

/// Wraps [`ParseIntError`] so [`ParseError`] can derive `PartialEq`/`Eq`
/// (the standard library type implements neither).
#[derive(Clone, Debug, Error)]
#[error("{0}")]
pub struct IntegerParseError(String);

impl From<ParseIntError> for IntegerParseError {
    fn from(err: ParseIntError) -> Self {
        IntegerParseError(err.to_string())
    }
}

impl PartialEq for IntegerParseError {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for IntegerParseError {}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EvalError {
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch { left: String, op: String, right: String },

    #[error("unknown operator: {op}{operand}")]
    UnknownOperator { op: String, operand: String },

    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator { left: String, op: String, right: String },

    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },

    #[error("not a function: {type_name}")]
    NotAFunction { type_name: String },

    #[error("unusable as hash key: {type_name}")]
    UnusableHashKey { type_name: String },

    #[error("index operator not supported: {type_name}")]
    IndexNotSupported { type_name: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow: {left} {op} {right}")]
    IntegerOverflow { left: i64, op: String, right: i64 },

    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongArgumentCount { got: usize, want: String },

    #[error("argument to {name:?} must be {expected}, got {got}")]
    ArgumentTypeError { name: String, expected: String, got: String },

    #[error("argument to {name:?} not supported, got {got}")]
    ArgumentNotSupported { name: String, got: String },
}
