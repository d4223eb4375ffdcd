//! Error types for expression evaluation.
//!
//! The variant set of [`Expr`](tally_expr::Expr) is closed and matched
//! exhaustively, so the only runtime failure the evaluator can produce is
//! arithmetic overflow. The error is structured all the same: callers match
//! on [`EvalErrorKind`] rather than parsing message strings, and a future
//! error class is a new variant that every call site has to acknowledge.

use std::error::Error;
use std::fmt;

use tracing::debug;

use tally_expr::ScalarInt;

/// Result of evaluating an expression.
pub type EvalResult = Result<ScalarInt, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Checked arithmetic produced a value outside the `i64` range.
    IntegerOverflow { operation: &'static str },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        Self { kind }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl Error for EvalError {}

/// Integer overflow error.
#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    debug!(operation, "evaluation failed: integer overflow");
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}
