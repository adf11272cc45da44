//! Literal values carried by constant expressions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Literal payload of a constant expression.
/// Numeric values use `rust_decimal::Decimal` -- never `f64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Decimal(Decimal),
    Text(String),
}

impl Value {
    /// Returns a human-readable type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Decimal(_) => "Decimal",
            Value::Text(_) => "Text",
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn value_equality_is_structural() {
        assert_eq!(Value::Bool(true), Value::Bool(true));
        assert_ne!(Value::Bool(true), Value::Bool(false));
        assert_eq!(Value::Int(42), Value::Int(42));
        assert_eq!(Value::Text("a".to_string()), Value::Text("a".to_string()));
        assert_ne!(Value::Int(1), Value::Bool(true));
    }

    #[test]
    fn value_decimal_equality() {
        assert_eq!(Value::Decimal(dec("100.50")), Value::Decimal(dec("100.50")));
        assert_ne!(Value::Decimal(dec("100.50")), Value::Decimal(dec("100.51")));
    }

    #[test]
    fn value_type_name() {
        assert_eq!(Value::Bool(true).type_name(), "Bool");
        assert_eq!(Value::Int(1).type_name(), "Int");
        assert_eq!(Value::Decimal(dec("1.0")).type_name(), "Decimal");
        assert_eq!(Value::Text("x".to_string()).type_name(), "Text");
    }
}
