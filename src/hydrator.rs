//! The hydration engine.
//!
//! A [`Hydrator`] is built once per (type, mapping) pair: the constructor
//! looks the type up in the registry, normalizes the alias table, resolves
//! both strategy tables, and is immutable from then on. `hydrate` and
//! `extract` only walk the canonical mapping and the precomputed tables — no
//! further introspection happens at call time — so a single engine can serve
//! concurrent callers working on distinct objects.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::descriptor::{TypeDescriptor, TypeRegistry};
use crate::error::{HydrateError, Result};
use crate::instance::Instance;
use crate::mapping::{AliasTable, MapEntry};
use crate::resolver::{resolve, ReadStrategy, StrategyTables, WriteStrategy};

/// A string-keyed record of dynamic values, e.g. a decoded request payload.
///
/// `Value::Null` entries count as absent for hydration: sending `null` for a
/// key skips the corresponding field, just like omitting the key.
pub type Record = serde_json::Map<String, Value>;

/// Construction-time switches for the engine.
///
/// Either flag suppresses method-strategy selection for its direction even
/// when a qualifying method exists, forcing direct field access. Both default
/// to `false`. Derives serde so options can sit next to alias tables in
/// configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydratorOptions {
    /// Never write through `set*` methods; always set fields directly.
    pub ignore_mutators: bool,
    /// Never read through `get*` methods; always read fields directly.
    pub ignore_accessors: bool,
}

/// Bidirectional mapper between [`Record`]s and [`Instance`]s of one type.
#[derive(Debug)]
pub struct Hydrator {
    ty: Arc<TypeDescriptor>,
    mapping: AliasTable,
    tables: StrategyTables,
    options: HydratorOptions,
}

impl Hydrator {
    /// Builds an engine with default options.
    ///
    /// # Errors
    /// [`HydrateError::Reflection`] when `type_name` is not registered.
    pub fn new<I, E>(registry: &TypeRegistry, type_name: &str, mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<MapEntry>,
    {
        Self::with_options(registry, type_name, mapping, HydratorOptions::default())
    }

    /// Builds an engine with explicit options.
    ///
    /// Runs the full construction pipeline: registry lookup, mapping
    /// normalization, strategy resolution.
    ///
    /// # Errors
    /// [`HydrateError::Reflection`] when `type_name` is not registered.
    pub fn with_options<I, E>(
        registry: &TypeRegistry,
        type_name: &str,
        mapping: I,
        options: HydratorOptions,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<MapEntry>,
    {
        let ty = registry.describe(type_name)?;
        let mapping = AliasTable::normalize(mapping);
        let tables = resolve(&ty, &options);

        Ok(Self {
            ty,
            mapping,
            tables,
            options,
        })
    }

    /// The configured type's fully-qualified name.
    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    /// The canonical mapping in effect.
    pub fn mapping(&self) -> &AliasTable {
        &self.mapping
    }

    /// The options the engine was constructed with.
    pub fn options(&self) -> HydratorOptions {
        self.options
    }

    /// Copies present record values into `object`, in canonical mapping
    /// order.
    ///
    /// Fields whose external key is absent from the record — or bound to
    /// `Value::Null` — are left untouched, which is what makes partial
    /// updates work. Fields written before a failing key stay written.
    ///
    /// # Errors
    /// - [`HydrateError::TypeMismatch`] when `object` is not an instance of
    ///   the configured type.
    /// - [`HydrateError::UnknownField`] when a present value maps to a field
    ///   the type does not declare.
    pub fn hydrate(&self, object: &mut Instance, record: &Record) -> Result<()> {
        self.check_identity(object)?;

        for (key, field) in self.mapping.iter() {
            let value = match record.get(key) {
                Some(v) if !v.is_null() => v,
                _ => continue,
            };

            match self.tables.write.get(field) {
                Some(WriteStrategy::Method { call, .. }) => call(object, value.clone()),
                Some(WriteStrategy::Direct) => object.set_field(field, value.clone()),
                None => {
                    return Err(HydrateError::UnknownField {
                        type_name: self.ty.name().to_string(),
                        field: field.to_string(),
                    })
                }
            }
        }

        Ok(())
    }

    /// Reads mapped fields out of `object` into a fresh record keyed by
    /// external key, in canonical mapping order.
    ///
    /// Mapped field names the type does not declare are silently omitted from
    /// the result — deliberately asymmetric with `hydrate`'s strict failure.
    ///
    /// # Errors
    /// [`HydrateError::TypeMismatch`] when `object` is not an instance of the
    /// configured type.
    pub fn extract(&self, object: &Instance) -> Result<Record> {
        self.check_identity(object)?;

        let mut record = Record::new();

        for (key, field) in self.mapping.iter() {
            match self.tables.read.get(field) {
                Some(ReadStrategy::Method { call, .. }) => {
                    record.insert(key.to_string(), call(object));
                }
                Some(ReadStrategy::Direct) => {
                    let value = object.field(field).cloned().unwrap_or(Value::Null);
                    record.insert(key.to_string(), value);
                }
                None => {}
            }
        }

        Ok(record)
    }

    // Exact-type precondition shared by both operations.
    fn check_identity(&self, object: &Instance) -> Result<()> {
        if object.is_instance_of(&self.ty) {
            Ok(())
        } else {
            Err(HydrateError::TypeMismatch {
                expected: self.ty.name().to_string(),
            })
        }
    }
}
