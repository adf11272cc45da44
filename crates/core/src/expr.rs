//! Expression nodes of the effect-schema algebra.
//!
//! Two families of nodes: value expressions ([`Constant`], [`Variable`])
//! that stand for runtime quantities, and boolean expressions (`Is`,
//! `Equal`, `And`, `Or`, `Not`) that guard clauses. Effect payloads
//! ([`Lambda`]) appear as opaque leaves. The set is closed; the reducer
//! matches it exhaustively so a new node kind cannot be forgotten.

use serde::{Deserialize, Serialize};

use crate::schema::Lambda;
use crate::types::TypeRef;
use crate::value::Value;

// ──────────────────────────────────────────────
// Value-expression leaves
// ──────────────────────────────────────────────

/// A literal value of known static type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constant {
    pub value: Value,
    pub ty: TypeRef,
}

impl Constant {
    /// A constant carrying the canonical type of its value.
    pub fn new(value: Value) -> Self {
        let ty = TypeRef::of_value(&value);
        Constant { value, ty }
    }

    /// A constant with an explicitly declared type.
    pub fn typed(value: Value, ty: TypeRef) -> Self {
        Constant { value, ty }
    }
}

/// A reference to an unevaluated quantity (e.g. a parameter): the static
/// type is known, the runtime value is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub ty: TypeRef,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Variable {
            name: name.into(),
            ty,
        }
    }
}

// ──────────────────────────────────────────────
// Functors
// ──────────────────────────────────────────────

/// Metadata of an `Is` node: the target type and the negation flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsFunctor {
    pub target: TypeRef,
    pub negated: bool,
}

/// Metadata of an `Equal` node: the negation flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EqualFunctor {
    pub negated: bool,
}

// ──────────────────────────────────────────────
// Expression tree
// ──────────────────────────────────────────────

/// Expression tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A literal value.
    Constant(Constant),
    /// An unevaluated quantity.
    Variable(Variable),
    /// `left is T` (or `left !is T` when negated).
    Is { left: Box<Expr>, functor: IsFunctor },
    /// `left == literal` (or `!=` when negated). The right side is a
    /// literal by construction.
    Equal {
        left: Box<Expr>,
        literal: Constant,
        functor: EqualFunctor,
    },
    /// Conjunction.
    And { left: Box<Expr>, right: Box<Expr> },
    /// Disjunction.
    Or { left: Box<Expr>, right: Box<Expr> },
    /// Negation.
    Not { operand: Box<Expr> },
    /// Opaque effect payload; atomic to every consumer of the tree.
    Lambda(Lambda),
}

impl Expr {
    /// Lifts a raw boolean into the canonical literal node. Two lifted
    /// instances of the same boolean are structurally equal.
    pub fn lit(value: bool) -> Expr {
        Expr::Constant(Constant::typed(Value::Bool(value), TypeRef::bool()))
    }

    /// Whether this node is exactly the lifted `value` literal.
    pub fn is_lit(&self, value: bool) -> bool {
        matches!(self, Expr::Constant(c) if c.value == Value::Bool(value))
    }

    /// A constant node carrying the canonical type of its value.
    pub fn constant(value: Value) -> Expr {
        Expr::Constant(Constant::new(value))
    }

    /// A variable node.
    pub fn variable(name: impl Into<String>, ty: TypeRef) -> Expr {
        Expr::Variable(Variable::new(name, ty))
    }

    /// Builds `left is target` (or its negation).
    pub fn is_type(left: Expr, target: TypeRef, negated: bool) -> Expr {
        Expr::Is {
            left: Box::new(left),
            functor: IsFunctor { target, negated },
        }
    }

    /// Builds `left == literal` (or `!=` when negated).
    pub fn equals(left: Expr, literal: Constant, negated: bool) -> Expr {
        Expr::Equal {
            left: Box::new(left),
            literal,
            functor: EqualFunctor { negated },
        }
    }

    pub fn and(left: Expr, right: Expr) -> Expr {
        Expr::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn or(left: Expr, right: Expr) -> Expr {
        Expr::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn not(operand: Expr) -> Expr {
        Expr::Not {
            operand: Box::new(operand),
        }
    }

    /// Whether the node is a value expression (`Constant` or `Variable`).
    /// The left operand of `Is`/`Equal` must reduce to one of these.
    pub fn is_value_expr(&self) -> bool {
        matches!(self, Expr::Constant(_) | Expr::Variable(_))
    }

    /// Diagnostic name of the node kind, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Constant(_) => "Constant",
            Expr::Variable(_) => "Variable",
            Expr::Is { .. } => "Is",
            Expr::Equal { .. } => "Equal",
            Expr::And { .. } => "And",
            Expr::Or { .. } => "Or",
            Expr::Not { .. } => "Not",
            Expr::Lambda(_) => "Lambda",
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
