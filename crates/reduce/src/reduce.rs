//! Bottom-up reduction of effect-schema expressions.
//!
//! Reduction recurses into children first, then applies the node rule to
//! the already-reduced children: constant subtype and equality checks
//! fold to boolean literals, connectives collapse around literal
//! operands, and clauses whose condition reduces to `false` are dropped.
//! Checks that cannot be decided from static types alone are left
//! unevaluated for downstream consumers.

use covenant_core::{Clause, Constant, Expr, Schema, TypeOracle, TypeRef};

use crate::error::ReduceError;

// ──────────────────────────────────────────────
// Tri-valued logic
// ──────────────────────────────────────────────

/// Outcome of a static subtype or equality query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truth {
    True,
    False,
    Unknown,
}

impl Truth {
    pub fn from_bool(b: bool) -> Truth {
        if b {
            Truth::True
        } else {
            Truth::False
        }
    }

    /// Negation; `Unknown` stays `Unknown`.
    pub fn negate(self) -> Truth {
        match self {
            Truth::True => Truth::False,
            Truth::False => Truth::True,
            Truth::Unknown => Truth::Unknown,
        }
    }
}

// ──────────────────────────────────────────────
// Static queries
// ──────────────────────────────────────────────

/// Statically checks whether `operand`'s runtime value must instantiate
/// `target`.
///
/// A constant's type decides the question outright. A variable decides
/// it only positively: when the declared type is not a subtype of the
/// target, the runtime value could still be one through narrowing, so
/// the answer is `Unknown`.
fn type_check(
    operand: &Expr,
    target: &TypeRef,
    oracle: &dyn TypeOracle,
) -> Result<Truth, ReduceError> {
    match operand {
        Expr::Constant(c) => Ok(Truth::from_bool(oracle.is_subtype(&c.ty, target))),
        Expr::Variable(v) => {
            if oracle.is_subtype(&v.ty, target) {
                Ok(Truth::True)
            } else {
                Ok(Truth::Unknown)
            }
        }
        other => Err(ReduceError::MalformedOperand {
            context: "is",
            kind: other.kind_name(),
        }),
    }
}

/// Statically checks value equality between `operand` and a literal.
fn literal_check(operand: &Expr, literal: &Constant) -> Result<Truth, ReduceError> {
    match operand {
        Expr::Constant(c) => Ok(Truth::from_bool(c.value == literal.value)),
        Expr::Variable(_) => Ok(Truth::Unknown),
        other => Err(ReduceError::MalformedOperand {
            context: "equal",
            kind: other.kind_name(),
        }),
    }
}

// ──────────────────────────────────────────────
// Reduction
// ──────────────────────────────────────────────

/// Reduces an expression to its normal form for this grammar.
///
/// Children are reduced before the parent rule fires, and no rule's
/// output can trigger the same rule again at the same position, so a
/// single bottom-up pass suffices.
pub fn reduce_expr(expr: &Expr, oracle: &dyn TypeOracle) -> Result<Expr, ReduceError> {
    match expr {
        // Already maximally reduced. Lambdas are atomic: the reducer
        // never descends into an effect payload.
        Expr::Constant(_) | Expr::Variable(_) | Expr::Lambda(_) => Ok(expr.clone()),

        Expr::Is { left, functor } => {
            let left = reduce_expr(left, oracle)?;
            let verdict = type_check(&left, &functor.target, oracle)?;
            let verdict = if functor.negated {
                verdict.negate()
            } else {
                verdict
            };
            match verdict {
                Truth::True => Ok(Expr::lit(true)),
                Truth::False => Ok(Expr::lit(false)),
                Truth::Unknown => Ok(Expr::Is {
                    left: Box::new(left),
                    functor: functor.clone(),
                }),
            }
        }

        Expr::Equal {
            left,
            literal,
            functor,
        } => {
            let left = reduce_expr(left, oracle)?;
            let verdict = literal_check(&left, literal)?;
            let verdict = if functor.negated {
                verdict.negate()
            } else {
                verdict
            };
            match verdict {
                Truth::True => Ok(Expr::lit(true)),
                Truth::False => Ok(Expr::lit(false)),
                Truth::Unknown => Ok(Expr::Equal {
                    left: Box::new(left),
                    literal: literal.clone(),
                    functor: functor.clone(),
                }),
            }
        }

        Expr::And { left, right } => {
            let left = reduce_expr(left, oracle)?;
            let right = reduce_expr(right, oracle)?;
            // The absorbing literal must win over the identity literal
            // when both are present.
            if left.is_lit(false) || right.is_lit(false) {
                Ok(Expr::lit(false))
            } else if left.is_lit(true) {
                Ok(right)
            } else if right.is_lit(true) {
                Ok(left)
            } else {
                Ok(Expr::And {
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
        }

        Expr::Or { left, right } => {
            let left = reduce_expr(left, oracle)?;
            let right = reduce_expr(right, oracle)?;
            if left.is_lit(true) || right.is_lit(true) {
                Ok(Expr::lit(true))
            } else if left.is_lit(false) {
                Ok(right)
            } else if right.is_lit(false) {
                Ok(left)
            } else {
                Ok(Expr::Or {
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
        }

        Expr::Not { operand } => {
            let operand = reduce_expr(operand, oracle)?;
            if operand.is_lit(false) {
                Ok(Expr::lit(true))
            } else if operand.is_lit(true) {
                Ok(Expr::lit(false))
            } else {
                // No double-negation cancellation: a Not over a
                // non-literal operand is rebuilt as-is.
                Ok(Expr::Not {
                    operand: Box::new(operand),
                })
            }
        }
    }
}

/// Reduces a clause's condition. Returns `None` when the condition
/// reduced to the `false` literal -- the clause can never contribute its
/// effect. The effect payload is never simplified.
pub fn reduce_clause(
    clause: &Clause,
    oracle: &dyn TypeOracle,
) -> Result<Option<Clause>, ReduceError> {
    let condition = reduce_expr(&clause.condition, oracle)?;
    if condition.is_lit(false) {
        return Ok(None);
    }
    Ok(Some(Clause {
        condition,
        effect: clause.effect.clone(),
    }))
}

/// Reduces every clause of a schema, dropping infeasible clauses and
/// preserving the relative order of the survivors.
pub fn reduce_schema(schema: &Schema, oracle: &dyn TypeOracle) -> Result<Schema, ReduceError> {
    let mut clauses = Vec::with_capacity(schema.clauses.len());
    for clause in &schema.clauses {
        if let Some(reduced) = reduce_clause(clause, oracle)? {
            clauses.push(reduced);
        }
    }
    Ok(Schema::new(clauses))
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
