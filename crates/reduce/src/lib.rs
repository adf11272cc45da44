//! covenant-reduce: the effect-schema reducer.
//!
//! Consumes an effect schema built upstream, folds constant
//! subexpressions under a three-valued logic, and drops clauses whose
//! condition is provably always false, producing an equivalent but
//! smaller schema. Reduction is a pure, single-pass, bottom-up
//! structural recursion: it never mutates its input, performs no I/O,
//! and is safe to call concurrently.
//!
//! # Public API
//!
//! - [`reduce_schema()`] -- reduce all clauses, drop the infeasible ones
//! - [`reduce_clause()`] -- reduce one clause, `None` when infeasible
//! - [`reduce_expr()`] -- reduce a single expression tree
//! - [`Truth`] -- tri-valued outcome of a static query
//! - [`ReduceError`] -- the fatal malformed-tree abort

pub mod error;
pub mod reduce;

pub use error::ReduceError;
pub use reduce::{reduce_clause, reduce_expr, reduce_schema, Truth};
