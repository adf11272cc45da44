//! covenant-core: effect-schema expression model.
//!
//! An effect schema is the set of conditional statements ("when
//! `<condition>` holds, `<effect>` occurs") describing a callable's
//! observable contract. This crate holds the data model only: literal
//! values, opaque type references plus the subtype-oracle seam,
//! expression nodes with their functors, and the [`Clause`]/[`Schema`]
//! containers. The reducer that simplifies these trees lives in
//! `covenant-reduce`.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`Expr`] and its leaf structs [`Constant`], [`Variable`]
//! - [`IsFunctor`], [`EqualFunctor`] -- per-node evaluation metadata
//! - [`Clause`], [`Schema`], [`Lambda`] -- schema containers
//! - [`TypeRef`], [`TypeOracle`], [`TypeTable`] -- the type seam
//! - [`Value`] -- literal payloads

pub mod expr;
pub mod schema;
pub mod types;
pub mod value;

// ── Convenience re-exports: key types ────────────────────────────────

pub use expr::{Constant, EqualFunctor, Expr, IsFunctor, Variable};
pub use schema::{Clause, Lambda, Schema};
pub use types::{TypeOracle, TypeRef, TypeTable};
pub use value::Value;
