//! Effect schemas: clauses pairing a boolean condition with an opaque
//! effect payload.

use serde::{Deserialize, Serialize};

use crate::expr::Expr;

// ──────────────────────────────────────────────
// Effect payloads
// ──────────────────────────────────────────────

/// An opaque effect payload.
///
/// Built by the upstream schema constructor and consumed downstream;
/// everything in between carries it through untouched and never reads
/// `body`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lambda {
    /// Diagnostic label for the effect.
    pub label: String,
    /// Uninterpreted payload.
    pub body: serde_json::Value,
}

impl Lambda {
    pub fn new(label: impl Into<String>, body: serde_json::Value) -> Self {
        Lambda {
            label: label.into(),
            body,
        }
    }
}

// ──────────────────────────────────────────────
// Clauses and schemas
// ──────────────────────────────────────────────

/// A single conditional statement: when `condition` holds, `effect`
/// applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub condition: Expr,
    pub effect: Lambda,
}

impl Clause {
    pub fn new(condition: Expr, effect: Lambda) -> Self {
        Clause { condition, effect }
    }
}

/// An effect schema: the ordered clauses describing a callable's
/// observable contract.
///
/// Order carries no meaning for evaluation (clauses hold independently)
/// but is preserved by every transformation for stable output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub clauses: Vec<Clause>,
}

impl Schema {
    pub fn new(clauses: Vec<Clause>) -> Self {
        Schema { clauses }
    }

    pub fn empty() -> Self {
        Schema {
            clauses: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeRef;

    fn effect(label: &str) -> Lambda {
        Lambda::new(label, serde_json::json!({ "effect": label }))
    }

    #[test]
    fn schema_accessors() {
        let schema = Schema::empty();
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);

        let clause = Clause::new(Expr::lit(true), effect("notify"));
        let schema = Schema::new(vec![clause.clone()]);
        assert!(!schema.is_empty());
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.clauses[0], clause);
    }

    #[test]
    fn schema_json_round_trip() {
        let clause = Clause::new(
            Expr::is_type(
                Expr::variable("x", TypeRef::new("Any")),
                TypeRef::new("String"),
                false,
            ),
            effect("trim"),
        );
        let schema = Schema::new(vec![clause]);
        let json = serde_json::to_string(&schema).unwrap();
        let back: Schema = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schema);
    }
}
