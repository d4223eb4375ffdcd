//! Tree-walking evaluation of arithmetic expressions.
//!
//! Dispatch is a direct `match` over the closed variant set. The set is
//! fixed, so pattern matching is preferred over trait objects: the compiler
//! enforces exhaustiveness, meaning a future variant fails to compile here
//! instead of failing at runtime.

use tally_expr::{Expr, ScalarInt};
use tally_stack::ensure_sufficient_stack;

use crate::errors::{integer_overflow, EvalResult};

/// Reduce an expression tree to a single integer.
///
/// Children evaluate left to right and subtraction is `left - right`: the
/// tree shape as constructed determines the result, with no algebraic
/// re-association. Arithmetic is checked; overflow surfaces as
/// [`EvalErrorKind::IntegerOverflow`](crate::errors::EvalErrorKind) and an
/// error in any subtree aborts the traversal.
///
/// Evaluation is a pure function of the tree, so a shared `&Expr` may be
/// evaluated from any number of threads concurrently.
pub fn evaluate(expr: &Expr) -> EvalResult {
    ensure_sufficient_stack(|| eval_node(expr))
}

/// Structural recursion over the variant set; terminal at `Number` leaves.
fn eval_node(expr: &Expr) -> EvalResult {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Addition { left, right } => {
            let sum = evaluate(left)?.checked_add(evaluate(right)?);
            checked_arith(sum, "addition")
        }
        Expr::Subtraction { left, right } => {
            let difference = evaluate(left)?.checked_sub(evaluate(right)?);
            checked_arith(difference, "subtraction")
        }
    }
}

/// Checked arithmetic with overflow surfaced as an error.
#[inline]
fn checked_arith(result: Option<ScalarInt>, op_name: &'static str) -> EvalResult {
    result.ok_or_else(|| integer_overflow(op_name))
}
