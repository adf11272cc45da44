//! Static type references and the subtype decision oracle.
//!
//! The expression model never interprets a type beyond its name. Every
//! subtyping question is delegated to a [`TypeOracle`], so the algebra
//! stays independent of how the host represents and resolves types.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

// ──────────────────────────────────────────────
// Type references
// ──────────────────────────────────────────────

/// An opaque reference to a static type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        TypeRef { name: name.into() }
    }

    /// The canonical boolean type. Every lifted boolean literal carries
    /// this reference, so independently lifted literals compare equal.
    pub fn bool() -> Self {
        TypeRef::new("Bool")
    }

    /// The canonical type of a literal value.
    pub fn of_value(value: &Value) -> Self {
        TypeRef::new(value.type_name())
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ──────────────────────────────────────────────
// Subtype oracle
// ──────────────────────────────────────────────

/// Decides whether one static type is a subtype of another.
///
/// Implementations must be total, deterministic and side-effect-free;
/// the reducer may ask the same question any number of times and only
/// ever passes declared/static types, never runtime values.
pub trait TypeOracle {
    fn is_subtype(&self, sub: &TypeRef, sup: &TypeRef) -> bool;
}

/// A table-backed [`TypeOracle`]: reflexive, with an optional designated
/// top type and declared `sub <: sup` edges closed transitively.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    supers: BTreeMap<String, BTreeSet<String>>,
    top: Option<String>,
}

impl TypeTable {
    pub fn new() -> Self {
        TypeTable::default()
    }

    /// A table whose `top` type (e.g. `Any`) has every type as a subtype.
    pub fn with_top(top: impl Into<String>) -> Self {
        TypeTable {
            supers: BTreeMap::new(),
            top: Some(top.into()),
        }
    }

    /// Declares a direct `sub <: sup` edge.
    pub fn insert(&mut self, sub: impl Into<String>, sup: impl Into<String>) {
        self.supers
            .entry(sub.into())
            .or_default()
            .insert(sup.into());
    }
}

impl TypeOracle for TypeTable {
    fn is_subtype(&self, sub: &TypeRef, sup: &TypeRef) -> bool {
        if sub.name == sup.name {
            return true;
        }
        if self.top.as_deref() == Some(sup.name.as_str()) {
            return true;
        }
        // Walk declared edges transitively. The seen set keeps cyclic
        // declarations from looping.
        let mut seen = BTreeSet::new();
        let mut stack = vec![sub.name.as_str()];
        while let Some(name) = stack.pop() {
            if !seen.insert(name) {
                continue;
            }
            if let Some(ups) = self.supers.get(name) {
                for up in ups {
                    if up == &sup.name {
                        return true;
                    }
                    stack.push(up.as_str());
                }
            }
        }
        false
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn t(name: &str) -> TypeRef {
        TypeRef::new(name)
    }

    #[test]
    fn subtype_is_reflexive() {
        let table = TypeTable::new();
        assert!(table.is_subtype(&t("Int"), &t("Int")));
        assert!(!table.is_subtype(&t("Int"), &t("String")));
    }

    #[test]
    fn top_type_accepts_everything() {
        let table = TypeTable::with_top("Any");
        assert!(table.is_subtype(&t("Int"), &t("Any")));
        assert!(table.is_subtype(&t("String"), &t("Any")));
        // Top is not a subtype of anything else.
        assert!(!table.is_subtype(&t("Any"), &t("Int")));
    }

    #[test]
    fn declared_edges_are_transitive() {
        let mut table = TypeTable::new();
        table.insert("Int", "Number");
        table.insert("Number", "Object");
        assert!(table.is_subtype(&t("Int"), &t("Number")));
        assert!(table.is_subtype(&t("Int"), &t("Object")));
        assert!(!table.is_subtype(&t("Object"), &t("Int")));
    }

    #[test]
    fn cyclic_declarations_terminate() {
        let mut table = TypeTable::new();
        table.insert("A", "B");
        table.insert("B", "A");
        assert!(table.is_subtype(&t("A"), &t("B")));
        assert!(!table.is_subtype(&t("A"), &t("C")));
    }

    #[test]
    fn of_value_maps_canonical_names() {
        assert_eq!(TypeRef::of_value(&Value::Bool(true)), TypeRef::bool());
        assert_eq!(TypeRef::of_value(&Value::Int(5)), t("Int"));
    }
}
