//! Field-access strategy resolution.
//!
//! Runs exactly once, at engine construction. For every non-static field of
//! the target type it registers a [`WriteStrategy`] and a [`ReadStrategy`]:
//! a direct-access fallback first, then — unless suppressed by the engine
//! options — a pre-bound method callable whenever the type declares a
//! qualifying `set<CapitalizedField>` / `get<CapitalizedField>` member.
//!
//! Method access wins over direct access so the target type can enforce its
//! own invariants (derived or transformed storage) on both directions. The
//! two tables are independent: a field with only a setter keeps direct reads,
//! and vice versa.

use std::collections::HashMap;
use std::fmt;

use crate::descriptor::{AccessorFn, MethodBody, MethodDef, MutatorFn, TypeDescriptor, Visibility};
use crate::hydrator::HydratorOptions;

/// Resolved write access for one field.
#[derive(Clone)]
pub enum WriteStrategy {
    /// Invoke a pre-bound public mutator.
    Method {
        /// The selected method's name, kept for diagnostics.
        name: String,
        /// The bound mutator body.
        call: MutatorFn,
    },
    /// Set the field's value directly, bypassing visibility.
    Direct,
}

/// Resolved read access for one field.
#[derive(Clone)]
pub enum ReadStrategy {
    /// Invoke a pre-bound public accessor.
    Method {
        /// The selected method's name, kept for diagnostics.
        name: String,
        /// The bound accessor body.
        call: AccessorFn,
    },
    /// Read the field's value directly, bypassing visibility.
    Direct,
}

impl fmt::Debug for WriteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Method { name, .. } => write!(f, "Method({name})"),
            Self::Direct => write!(f, "Direct"),
        }
    }
}

impl fmt::Debug for ReadStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Method { name, .. } => write!(f, "Method({name})"),
            Self::Direct => write!(f, "Direct"),
        }
    }
}

/// The two per-field lookup tables an engine consults at call time.
#[derive(Debug, Clone, Default)]
pub struct StrategyTables {
    /// Field name → write strategy, used by `hydrate`.
    pub write: HashMap<String, WriteStrategy>,
    /// Field name → read strategy, used by `extract`.
    pub read: HashMap<String, ReadStrategy>,
}

/// Computes both strategy tables for `ty`.
///
/// Static fields get no entry in either table, which is what makes them
/// unreachable through the engine.
pub fn resolve(ty: &TypeDescriptor, options: &HydratorOptions) -> StrategyTables {
    let mut tables = StrategyTables::default();

    for field in ty.fields().iter().filter(|f| !f.is_static) {
        let name = field.name.as_str();
        tables.write.insert(name.to_string(), WriteStrategy::Direct);
        tables.read.insert(name.to_string(), ReadStrategy::Direct);

        let capitalized = capitalize(name);

        if !options.ignore_mutators {
            if let Some(def) = ty.method(&format!("set{capitalized}")) {
                if qualifies(def, 1) {
                    if let MethodBody::Mutator(call) = &def.body {
                        tables.write.insert(
                            name.to_string(),
                            WriteStrategy::Method {
                                name: def.name.clone(),
                                call: call.clone(),
                            },
                        );
                    }
                }
            }
        }

        if !options.ignore_accessors {
            if let Some(def) = ty.method(&format!("get{capitalized}")) {
                if qualifies(def, 0) {
                    if let MethodBody::Accessor(call) = &def.body {
                        tables.read.insert(
                            name.to_string(),
                            ReadStrategy::Method {
                                name: def.name.clone(),
                                call: call.clone(),
                            },
                        );
                    }
                }
            }
        }
    }

    tables
}

/// A method qualifies when it is public, concrete, bound to instances, and
/// declares the expected parameter count.
fn qualifies(def: &MethodDef, arity: usize) -> bool {
    def.visibility == Visibility::Public
        && !def.is_abstract
        && !def.is_static
        && def.arity == arity
}

/// Upper-cases the first character of a field name, leaving the rest intact.
///
/// ASCII-only semantics: a non-ASCII first character is left unchanged.
fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(field.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn capitalize_upper_cases_only_the_first_ascii_char() {
        assert_eq!(capitalize("amount"), "Amount");
        assert_eq!(capitalize("dueDate"), "DueDate");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_leaves_non_ascii_first_char_unchanged() {
        assert_eq!(capitalize("über"), "über");
    }
}
