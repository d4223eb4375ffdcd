#![deny(clippy::arithmetic_side_effects)]
//! Tally Eval - tree-walking evaluator for arithmetic expression trees.
//!
//! The evaluator reduces an [`Expr`] to a single integer by structural
//! recursion: literals return their value, compositions combine the results
//! of their children with checked arithmetic. Recursion depth is bounded by
//! the heap, not the OS stack (see `tally_stack`).
//!
//! # Re-exports
//!
//! The tree types from `tally_expr` are re-exported so callers can build and
//! evaluate expressions from a single import:
//!
//! ```
//! use tally_eval::{evaluate, Expr, ScalarInt};
//!
//! let expr = Expr::addition(
//!     Expr::number(20),
//!     Expr::subtraction(Expr::number(10), Expr::number(34)),
//! );
//! assert_eq!(evaluate(&expr), Ok(ScalarInt::new(-4)));
//! ```

pub mod errors;
mod evaluate;

pub use errors::{integer_overflow, EvalError, EvalErrorKind, EvalResult};
pub use evaluate::evaluate;

// Re-export the tree types from tally_expr
pub use tally_expr::{Expr, ScalarInt};
